use hpmc3d::math::{Rotation, Vector};
use hpmc3d::query;
use hpmc3d::shape::{ShapeUnion, Sphere, UnionMember, UnionParams};

fn main() {
    // Two spheres of radius 0.5, one unit away from the union center on each side.
    let members = [
        UnionMember::new(Vector::new(-1.0, 0.0, 0.0), Sphere::new(0.5)),
        UnionMember::new(Vector::new(1.0, 0.0, 0.0), Sphere::new(0.5)),
    ];
    let params = UnionParams::<Sphere>::new(&members).unwrap();
    let dumbbell = ShapeUnion::new(Rotation::identity(), &params);
    let mut err = 0;

    // Two dumbbells aligned along x touch when their centers are 3 units apart.
    let touching = Vector::new(3.0, 0.0, 0.0);
    let apart = Vector::new(3.1, 0.0, 0.0);

    assert!(query::check_circumsphere_overlap(&touching, &dumbbell, &dumbbell));
    assert!(query::intersection_test_union_union(
        &touching, &dumbbell, &dumbbell, &mut err
    ));
    assert!(!query::intersection_test_union_union(
        &apart, &dumbbell, &dumbbell, &mut err
    ));

    // Once rotated by 90 degrees about z, the second dumbbell fits between the spheres of the first.
    let rotated = ShapeUnion::new(
        Rotation::from_axis_angle(&Vector::z_axis(), std::f32::consts::FRAC_PI_2),
        &params,
    );
    assert!(!query::intersection_test_union_union(
        &Vector::zeros(),
        &dumbbell,
        &rotated,
        &mut err
    ));

    assert_eq!(err, 0);
    println!("Union diameter: {}", params.diameter());
}
