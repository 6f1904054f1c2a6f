//! Implementation details of the union/union overlap test.

pub use self::intersection_test_circumspheres::{
    check_circumsphere_overlap, intersection_test_circumspheres,
};
pub use self::intersection_test_cuboid_cuboid::intersection_test_cuboid_cuboid;
pub use self::intersection_test_node_union::{
    intersection_test_node_union, PRUNE_MARGIN_ULPS, TRAVERSAL_STACK_SIZE,
};
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;
pub use self::intersection_test_union_leaves::intersection_test_union_leaves;
#[cfg(feature = "parallel")]
pub use self::intersection_test_union_union::intersection_test_union_union_par;
pub use self::intersection_test_union_union::{
    intersection_test_union_union, intersection_test_union_union_strided,
};

mod intersection_test_circumspheres;
mod intersection_test_cuboid_cuboid;
mod intersection_test_node_union;
mod intersection_test_sphere_sphere;
mod intersection_test_union_leaves;
mod intersection_test_union_union;
