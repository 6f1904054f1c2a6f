//! Box member shapes.

use crate::bounding_volume::Obb;
use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use crate::query::details::intersection_test_cuboid_cuboid;
use crate::shape::MemberShape;

/// A box, centered at the origin and aligned with the axes of its local frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-lengths of the box along each axis.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a box with the given half-extents.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The vertex of this box furthest along `dir`.
    #[inline]
    pub fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::from(self.half_extents.zip_map(dir, |he, d| he.copysign(d)))
    }
}

/// A [`Cuboid`] member together with its orientation.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedCuboid {
    /// The shape of the box.
    pub cuboid: Cuboid,
    /// The orientation of the box axes.
    pub orientation: Rotation<Real>,
}

impl MemberShape for OrientedCuboid {
    type Params = Cuboid;

    #[inline]
    fn from_params(orientation: &Rotation<Real>, params: &Cuboid) -> Self {
        OrientedCuboid {
            cuboid: *params,
            orientation: *orientation,
        }
    }

    #[inline]
    fn has_orientation(_: &Cuboid) -> bool {
        true
    }

    fn intersection_test(r_ab: &Vector<Real>, a: &Self, b: &Self, err: &mut u32) -> bool {
        let finite = r_ab
            .iter()
            .chain(a.orientation.coords.iter())
            .chain(b.orientation.coords.iter())
            .chain(a.cuboid.half_extents.iter())
            .chain(b.cuboid.half_extents.iter())
            .all(|x| x.is_finite());

        if !finite {
            *err += 1;
            return false;
        }

        let pos12 = Isometry::from_parts(
            Translation::from(a.orientation.inverse_transform_vector(r_ab)),
            a.orientation.inverse() * b.orientation,
        );
        intersection_test_cuboid_cuboid(&pos12, &a.cuboid, &b.cuboid)
    }

    #[inline]
    fn circumsphere_diameter(&self) -> Real {
        self.cuboid.half_extents.norm() * 2.0
    }

    #[inline]
    fn local_obb(&self) -> Obb {
        Obb::new(Point::origin(), self.orientation, self.cuboid.half_extents)
    }
}
