use crate::math::{Real, Vector};
use crate::partitioning::BoundingHierarchy;
use crate::shape::{MemberShape, ShapeUnion};

/// Tests if the circumspheres of two shapes with the given diameters overlap.
///
/// `r_ab` is the vector from the center of the first shape to the center of the second one.
/// This never reports `false` for shapes that actually overlap, as long as the diameters enclose
/// them. Touching circumspheres are considered overlapping.
#[inline]
pub fn intersection_test_circumspheres(
    r_ab: &Vector<Real>,
    diameter_a: Real,
    diameter_b: Real,
) -> bool {
    let diameter_sum = diameter_a + diameter_b;
    r_ab.norm_squared() * 4.0 <= diameter_sum * diameter_sum
}

/// Tests if the circumspheres of two union instances overlap.
///
/// This is a cheap broad-phase filter to run before [`intersection_test_union_union`].
///
/// [`intersection_test_union_union`]: crate::query::intersection_test_union_union
#[inline]
pub fn check_circumsphere_overlap<S: MemberShape, H: BoundingHierarchy>(
    r_ab: &Vector<Real>,
    a: &ShapeUnion<S, H>,
    b: &ShapeUnion<S, H>,
) -> bool {
    intersection_test_circumspheres(r_ab, a.circumsphere_diameter(), b.circumsphere_diameter())
}
