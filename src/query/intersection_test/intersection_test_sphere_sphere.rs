use crate::math::{Real, Vector};
use crate::shape::Sphere;

/// Intersection test between spheres.
///
/// `center12` is the vector from the center of `s1` to the center of `s2`.
#[inline]
pub fn intersection_test_sphere_sphere(center12: &Vector<Real>, s1: &Sphere, s2: &Sphere) -> bool {
    let r1 = s1.radius;
    let r2 = s2.radius;
    let distance_squared = center12.norm_squared();
    let sum_radius = r1 + r2;
    distance_squared <= sum_radius * sum_radius
}
