use hpmc3d::math::{Real, Rotation, Vector};
use hpmc3d::partitioning::ObbTreeBuilder;
use hpmc3d::query;
use hpmc3d::shape::{ShapeUnion, Sphere, UnionMember, UnionParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn dumbbell(d: Real, r: Real, leaf_capacity: usize) -> UnionParams<Sphere> {
    let members = [
        UnionMember::new(Vector::new(-d / 2.0, 0.0, 0.0), Sphere::new(r)),
        UnionMember::new(Vector::new(d / 2.0, 0.0, 0.0), Sphere::new(r)),
    ];
    UnionParams::with_builder(&members, &ObbTreeBuilder::new(leaf_capacity)).unwrap()
}

#[test]
fn dumbbells_along_their_axis() {
    let (d, r) = (2.0, 0.5);
    let contact = d + 2.0 * r;

    for leaf_capacity in [1, 4] {
        let params = dumbbell(d, r, leaf_capacity);
        let a = ShapeUnion::new(Rotation::identity(), &params);

        for i in 0..=100 {
            let dist = (contact + 1.0) * i as Real / 100.0;
            let mut err = 0;
            let r_ab = Vector::new(dist, 0.0, 0.0);
            assert_eq!(
                query::intersection_test_union_union(&r_ab, &a, &a, &mut err),
                dist <= contact,
                "distance: {}",
                dist
            );
            assert_eq!(err, 0);
        }
    }
}

#[test]
fn touching_dumbbells_overlap() {
    let mut rng = StdRng::seed_from_u64(21);

    // Dyadic sizes keep every distance computed along the x axis exact.
    for (d, r) in [(2.0, 0.5), (1.0, 0.25), (3.0, 1.5), (1.5, 0.125), (0.5, 2.0)] {
        let contact = d + 2.0 * r;

        for leaf_capacity in [1, 4] {
            let params = dumbbell(d, r, leaf_capacity);

            for k in 0..20 {
                let (q_a, q_b) = if k == 0 {
                    (Rotation::identity(), Rotation::identity())
                } else {
                    (
                        Rotation::from_axis_angle(&Vector::x_axis(), rng.gen_range(0.0..6.28)),
                        Rotation::from_axis_angle(&Vector::x_axis(), rng.gen_range(0.0..6.28)),
                    )
                };
                let a = ShapeUnion::new(q_a, &params);
                let b = ShapeUnion::new(q_b, &params);
                let mut err = 0;

                assert!(
                    query::intersection_test_union_union(
                        &Vector::new(contact, 0.0, 0.0),
                        &a,
                        &b,
                        &mut err
                    ),
                    "d: {}, r: {}, leaf capacity: {}",
                    d,
                    r,
                    leaf_capacity
                );
                assert!(query::intersection_test_union_union(
                    &Vector::new(-contact, 0.0, 0.0),
                    &a,
                    &b,
                    &mut err
                ));
                assert!(!query::intersection_test_union_union(
                    &Vector::new(contact + 1.0e-2, 0.0, 0.0),
                    &a,
                    &b,
                    &mut err
                ));
                assert_eq!(err, 0);
            }
        }
    }
}

#[test]
fn dumbbells_spinning_about_their_axis() {
    let mut rng = StdRng::seed_from_u64(20);
    let (d, r) = (1.5, 0.3);
    let contact = d + 2.0 * r;
    let params = dumbbell(d, r, 4);

    for _ in 0..200 {
        // Rotations about the x axis keep the member centers on the world x axis.
        let q_a = Rotation::from_axis_angle(&Vector::x_axis(), rng.gen_range(0.0..6.28));
        let q_b = Rotation::from_axis_angle(&Vector::x_axis(), rng.gen_range(0.0..6.28));
        let dist: Real = rng.gen_range(0.0..contact + 1.0);

        let mut err = 0;
        let result = query::intersection_test_union_union(
            &Vector::new(dist, 0.0, 0.0),
            &ShapeUnion::new(q_a, &params),
            &ShapeUnion::new(q_b, &params),
            &mut err,
        );
        assert_eq!(result, dist <= contact, "distance: {}", dist);
    }
}

#[test]
fn crossed_dumbbells() {
    let params = dumbbell(2.0, 0.5, 4);
    let a = ShapeUnion::new(Rotation::identity(), &params);
    let b = ShapeUnion::new(
        Rotation::from_axis_angle(&Vector::z_axis(), core::f64::consts::FRAC_PI_2 as Real),
        &params,
    );
    let mut err = 0;

    // `b` is along the y axis, its lower sphere sitting on the right sphere of `a`.
    assert!(query::intersection_test_union_union(
        &Vector::new(1.0, 1.9, 0.0),
        &a,
        &b,
        &mut err
    ));
    assert!(!query::intersection_test_union_union(
        &Vector::new(1.0, 2.1, 0.0),
        &a,
        &b,
        &mut err
    ));
    // Centered on each other, the spheres of `a` and `b` do not touch.
    assert!(!query::intersection_test_union_union(
        &Vector::new(0.0, 0.0, 0.0),
        &a,
        &b,
        &mut err
    ));
}
