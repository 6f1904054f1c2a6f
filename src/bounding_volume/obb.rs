//! Oriented Bounding Box.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector, DIM};
use crate::query::details::intersection_test_cuboid_cuboid;
use crate::shape::Cuboid;

/// An Oriented Bounding Box.
///
/// This is the bounding volume stored at each node of the hierarchies of union shapes. The box is
/// the set of points `center + rotation * v` with `|v[i]| <= half_extents[i]`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The orientation of the box axes.
    pub rotation: Rotation<Real>,
    /// The half-lengths of the box along each of its own axes.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates a new oriented bounding box.
    #[inline]
    pub fn new(center: Point<Real>, rotation: Rotation<Real>, half_extents: Vector<Real>) -> Obb {
        Obb {
            center,
            rotation,
            half_extents,
        }
    }

    /// Creates an axis-aligned box from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Obb {
        Obb::new(center, Rotation::identity(), half_extents)
    }

    /// Computes an oriented box enclosing all the given points.
    ///
    /// The box axes are the principal axes of the point cloud. The result is not the smallest
    /// enclosing box, but it is guaranteed to contain every point of `pts`.
    ///
    /// # Panics
    /// Panics if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Obb {
        crate::utils::obb(pts)
    }

    /// The rigid transformation mapping the box-local frame to the frame this box is expressed in.
    #[inline]
    pub fn isometry(&self) -> Isometry<Real> {
        Isometry::from_parts(Translation::from(self.center.coords), self.rotation)
    }

    /// Re-expresses this box in another frame.
    ///
    /// The box is first rotated by `rotation` about the origin of its current frame, then translated
    /// by `translation`.
    #[inline]
    pub fn transform_by(&self, rotation: &Rotation<Real>, translation: &Vector<Real>) -> Obb {
        Obb {
            center: rotation * self.center + translation,
            rotation: rotation * self.rotation,
            half_extents: self.half_extents,
        }
    }

    /// Tests if this box intersects `other`, both being expressed in the same frame.
    ///
    /// This is an exact separating-axis test. Touching boxes are considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &Obb) -> bool {
        let pos12 = self.isometry().inv_mul(&other.isometry());
        intersection_test_cuboid_cuboid(
            &pos12,
            &Cuboid::new(self.half_extents),
            &Cuboid::new(other.half_extents),
        )
    }

    /// Does this box contain the given point (boundary included)?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.rotation.inverse_transform_vector(&(pt - self.center));
        (0..DIM).all(|i| local[i].abs() <= self.half_extents[i])
    }

    /// A copy of this box with every half-extent enlarged by `amount`.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Obb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Obb {
            half_extents: self.half_extents.add_scalar(amount),
            ..*self
        }
    }

    /// Computes the 8 vertices of this box.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let he = self.half_extents;
        let signs = [
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, 1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, 1.0],
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
        ];

        signs.map(|[x, y, z]: [Real; 3]| {
            self.center + self.rotation * Vector::new(he.x * x, he.y * y, he.z * z)
        })
    }

    /// The smallest axis-aligned box enclosing this oriented box.
    pub fn aabb(&self) -> Aabb {
        let abs_rot = self.rotation.to_rotation_matrix().into_inner().abs();
        Aabb::from_half_extents(self.center, abs_rot * self.half_extents)
    }

    /// Are all the components of this box finite?
    pub fn is_finite(&self) -> bool {
        self.center.iter().all(|x| x.is_finite())
            && self.rotation.coords.iter().all(|x| x.is_finite())
            && self.half_extents.iter().all(|x| x.is_finite())
    }
}
