use crate::bounding_volume::Obb;
use crate::math::{Real, Rotation, Vector};
use core::fmt::Debug;

/// A primitive shape kind that can be a member of a [`UnionParams`](crate::shape::UnionParams).
///
/// Every member of a union has the same kind. A member is described by its `Params` and is turned
/// into a queryable shape with [`MemberShape::from_params`] once its orientation, relative to the
/// frame the test is performed in, is known.
pub trait MemberShape: Sized {
    /// The parameters describing one member, independently from its orientation.
    type Params: Clone + Debug + Send + Sync;

    /// Builds the shape of a member with the given orientation.
    fn from_params(orientation: &Rotation<Real>, params: &Self::Params) -> Self;

    /// Does the orientation of a member with these parameters affect its geometry?
    ///
    /// When this returns `false`, the orientation passed to [`MemberShape::from_params`] is
    /// always the identity.
    fn has_orientation(params: &Self::Params) -> bool;

    /// Exact overlap test between two shapes.
    ///
    /// `r_ab` is the vector from the center of `a` to the center of `b`. Touching shapes are
    /// considered overlapping. Numerical degeneracies must not panic: they increment `err` and
    /// report whatever answer the implementation deems the most sensible.
    fn intersection_test(r_ab: &Vector<Real>, a: &Self, b: &Self, err: &mut u32) -> bool;

    /// The diameter of the smallest sphere centered at the shape center and enclosing the shape.
    fn circumsphere_diameter(&self) -> Real;

    /// An oriented box enclosing the shape, expressed in a frame centered at the shape center.
    fn local_obb(&self) -> Obb;
}
