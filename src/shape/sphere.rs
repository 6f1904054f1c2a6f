//! Sphere member shape.

use crate::bounding_volume::Obb;
use crate::math::{Point, Real, Rotation, Vector};
use crate::query::details::intersection_test_sphere_sphere;
use crate::shape::MemberShape;

/// A sphere, centered at the origin of its local frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a sphere with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Sphere { radius }
    }
}

impl MemberShape for Sphere {
    type Params = Sphere;

    #[inline]
    fn from_params(_: &Rotation<Real>, params: &Sphere) -> Self {
        *params
    }

    #[inline]
    fn has_orientation(_: &Sphere) -> bool {
        false
    }

    #[inline]
    fn intersection_test(r_ab: &Vector<Real>, a: &Self, b: &Self, err: &mut u32) -> bool {
        if !r_ab.iter().all(|x| x.is_finite()) || !(a.radius + b.radius).is_finite() {
            *err += 1;
            return false;
        }

        intersection_test_sphere_sphere(r_ab, a, b)
    }

    #[inline]
    fn circumsphere_diameter(&self) -> Real {
        self.radius * 2.0
    }

    #[inline]
    fn local_obb(&self) -> Obb {
        Obb::from_half_extents(Point::origin(), Vector::repeat(self.radius))
    }
}
