use hpmc3d::math::{Real, Rotation, Vector};
use hpmc3d::partitioning::ObbTreeBuilder;
use hpmc3d::query;
use hpmc3d::shape::{Cuboid, OrientedCuboid, ShapeUnion, UnionMember, UnionParams};

fn main() {
    // A ring of 24 thin boxes around the z axis.
    let members: Vec<_> = (0..24)
        .map(|i| {
            let angle = i as Real * core::f32::consts::TAU / 24.0;
            let orientation = Rotation::from_axis_angle(&Vector::z_axis(), angle);
            let position = orientation * Vector::new(2.0, 0.0, 0.0);
            UnionMember::new(position, Cuboid::new(Vector::new(0.05, 0.3, 0.1)))
                .with_orientation(orientation)
        })
        .collect();
    let params =
        UnionParams::<OrientedCuboid>::with_builder(&members, &ObbTreeBuilder::new(2)).unwrap();
    let tree = params.hierarchy();
    println!(
        "Ring: {} members, {} tree nodes, tree depth {}.",
        params.member_count(),
        tree.nodes().len(),
        tree.depth()
    );

    let flat = ShapeUnion::new(Rotation::identity(), &params);
    let tilted = ShapeUnion::new(
        Rotation::from_axis_angle(&Vector::x_axis(), core::f32::consts::FRAC_PI_2),
        &params,
    );
    let mut err = 0;

    // Two interlocked rings, like chain links.
    let links = Vector::new(2.0, 0.0, 0.0);
    println!(
        "Interlocked rings overlap: {}",
        query::intersection_test_union_union(&links, &flat, &tilted, &mut err)
    );

    // Stacked flat rings.
    for height in [0.1, 0.2, 0.3] {
        let r_ab = Vector::new(0.0, 0.0, height);
        println!(
            "Rings stacked {} apart overlap: {}",
            height,
            query::intersection_test_union_union(&r_ab, &flat, &flat, &mut err)
        );
    }

    println!("Degenerate member tests: {}", err);
}
