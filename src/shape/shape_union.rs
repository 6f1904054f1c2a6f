//! Union of member shapes.

use crate::bounding_volume::{Aabb, Obb};
use crate::math::{Point, Real, Rotation, Vector};
use crate::partitioning::{
    BoundingHierarchy, LeafPartitionError, ObbTree, ObbTreeBuildError, ObbTreeBuilder,
};
use crate::shape::{MemberShape, Sphere};
use alloc::vec::Vec;
use core::fmt;

/// Relative tolerance when comparing a user-provided union diameter to the extent of its members.
const DIAMETER_TOLERANCE: Real = 1.0e-5;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// Flags that exclude a union shape type from some bookkeeping.
pub struct IgnoreFlags(u32);

bitflags::bitflags! {
    impl IgnoreFlags: u32 {
        /// If set, overlap tests against this shape type are not counted in the simulation
        /// statistics.
        const STATISTICS = 1;
    }
}

/// Errors that can occur when building the parameters of a union shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum UnionParamsError {
    /// The per-member arrays do not have the same length.
    #[error("the member arrays have different lengths: {positions} positions, {orientations} orientations, {params} parameters and {masks} masks.")]
    LengthMismatch {
        /// The number of member positions.
        positions: usize,
        /// The number of member orientations.
        orientations: usize,
        /// The number of member shape parameters.
        params: usize,
        /// The number of member masks.
        masks: usize,
    },
    /// There are more members than what a hierarchy can index.
    #[error("a union cannot have {0} members.")]
    TooManyMembers(usize),
    /// A member has a non-finite position, orientation, or extent.
    #[error("the member {0} has a non-finite position, orientation, or extent.")]
    NonFiniteMember(usize),
    /// The union diameter is not finite.
    #[error("the union diameter {0} is not finite.")]
    NonFiniteDiameter(Real),
    /// The union diameter does not enclose all the members.
    #[error("the union diameter {diameter} is smaller than the extent of its members ({required}).")]
    DiameterTooSmall {
        /// The diameter that was provided.
        diameter: Real,
        /// The smallest diameter enclosing all the members.
        required: Real,
    },
    /// The hierarchy leaves do not partition the members.
    #[error(transparent)]
    Hierarchy(#[from] LeafPartitionError),
    /// The hierarchy could not be built.
    #[error(transparent)]
    Build(#[from] ObbTreeBuildError),
}

/// The description of a single member of a union.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct UnionMember<P> {
    /// The position of the member center in the union's local frame.
    pub position: Vector<Real>,
    /// The orientation of the member in the union's local frame.
    pub orientation: Rotation<Real>,
    /// The shape parameters of the member.
    pub params: P,
    /// The interaction groups of the member.
    ///
    /// Two members are tested against each other only if their masks share at least one bit.
    pub mask: u32,
}

impl<P> UnionMember<P> {
    /// The mask given to members created with [`UnionMember::new`].
    pub const DEFAULT_MASK: u32 = 1;

    /// A member at the given position with an identity orientation and the default mask.
    pub fn new(position: Vector<Real>, params: P) -> Self {
        Self {
            position,
            orientation: Rotation::identity(),
            params,
            mask: Self::DEFAULT_MASK,
        }
    }

    /// Sets the orientation of this member.
    pub fn with_orientation(mut self, orientation: Rotation<Real>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the interaction mask of this member.
    pub fn with_mask(mut self, mask: u32) -> Self {
        self.mask = mask;
        self
    }
}

/// The shared, immutable description of a union shape type.
///
/// A union is a rigid assembly of members of the same kind `S`. Each member has a position,
/// an orientation, shape parameters, and an interaction mask, all expressed in the union's local
/// frame. The members are indexed by a bounding hierarchy `H` used to prune the pairwise tests.
///
/// These parameters are validated once at construction and cannot be modified afterwards, except
/// for the [`IgnoreFlags`]. They are meant to be shared by all the [`ShapeUnion`] instances of
/// the same type.
pub struct UnionParams<S: MemberShape, H = ObbTree> {
    positions: Vec<Vector<Real>>,
    orientations: Vec<Rotation<Real>>,
    params: Vec<S::Params>,
    masks: Vec<u32>,
    diameter: Real,
    ignore: IgnoreFlags,
    hierarchy: H,
}

impl<S: MemberShape, H: Clone> Clone for UnionParams<S, H> {
    fn clone(&self) -> Self {
        Self {
            positions: self.positions.clone(),
            orientations: self.orientations.clone(),
            params: self.params.clone(),
            masks: self.masks.clone(),
            diameter: self.diameter,
            ignore: self.ignore,
            hierarchy: self.hierarchy.clone(),
        }
    }
}

impl<S: MemberShape, H: fmt::Debug> fmt::Debug for UnionParams<S, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionParams")
            .field("positions", &self.positions)
            .field("orientations", &self.orientations)
            .field("params", &self.params)
            .field("masks", &self.masks)
            .field("diameter", &self.diameter)
            .field("ignore", &self.ignore)
            .field("hierarchy", &self.hierarchy)
            .finish()
    }
}

impl<S: MemberShape> UnionParams<S, ObbTree> {
    /// Builds the parameters of a union from its members.
    ///
    /// The diameter is the smallest one enclosing all the members, and the members are indexed
    /// by an [`ObbTree`] with the default leaf capacity.
    pub fn new(members: &[UnionMember<S::Params>]) -> Result<Self, UnionParamsError> {
        Self::with_builder(members, &ObbTreeBuilder::default())
    }

    /// Builds the parameters of a union from its members, indexed by an [`ObbTree`] built with
    /// the given builder.
    pub fn with_builder(
        members: &[UnionMember<S::Params>],
        builder: &ObbTreeBuilder,
    ) -> Result<Self, UnionParamsError> {
        let mut member_obbs = Vec::with_capacity(members.len());
        let mut diameter: Real = 0.0;

        for (i, member) in members.iter().enumerate() {
            if !member_is_finite(&member.position, &member.orientation) {
                return Err(UnionParamsError::NonFiniteMember(i));
            }

            let shape = S::from_params(&member.orientation, &member.params);
            let member_diameter = shape.circumsphere_diameter();

            if !member_diameter.is_finite() {
                return Err(UnionParamsError::NonFiniteMember(i));
            }

            diameter = diameter.max(member.position.norm() * 2.0 + member_diameter);
            member_obbs.push(
                shape
                    .local_obb()
                    .transform_by(&Rotation::identity(), &member.position),
            );
        }

        let hierarchy = builder.build(&member_obbs)?;
        Self::from_members(members, diameter, hierarchy)
    }
}

impl<S: MemberShape, H: BoundingHierarchy> UnionParams<S, H> {
    /// Builds the parameters of a union from its members, a diameter, and a hierarchy.
    pub fn from_members(
        members: &[UnionMember<S::Params>],
        diameter: Real,
        hierarchy: H,
    ) -> Result<Self, UnionParamsError> {
        Self::from_parts(
            members.iter().map(|m| m.position).collect(),
            members.iter().map(|m| m.orientation).collect(),
            members.iter().map(|m| m.params.clone()).collect(),
            members.iter().map(|m| m.mask).collect(),
            diameter,
            hierarchy,
        )
    }

    /// Builds the parameters of a union from index-aligned per-member arrays, a diameter, and a
    /// hierarchy over the members.
    ///
    /// This fails if the arrays do not have the same length, if a member is not finite, if the
    /// diameter does not enclose every member, or if the leaves of the hierarchy do not reference
    /// each member exactly once. A diameter larger than necessary is accepted.
    pub fn from_parts(
        positions: Vec<Vector<Real>>,
        orientations: Vec<Rotation<Real>>,
        params: Vec<S::Params>,
        masks: Vec<u32>,
        diameter: Real,
        hierarchy: H,
    ) -> Result<Self, UnionParamsError> {
        let member_count = positions.len();

        if orientations.len() != member_count
            || params.len() != member_count
            || masks.len() != member_count
        {
            return Err(UnionParamsError::LengthMismatch {
                positions: member_count,
                orientations: orientations.len(),
                params: params.len(),
                masks: masks.len(),
            });
        }

        if member_count >= u32::MAX as usize {
            return Err(UnionParamsError::TooManyMembers(member_count));
        }

        if !diameter.is_finite() {
            return Err(UnionParamsError::NonFiniteDiameter(diameter));
        }

        let mut required: Real = 0.0;

        for i in 0..member_count {
            if !member_is_finite(&positions[i], &orientations[i]) {
                return Err(UnionParamsError::NonFiniteMember(i));
            }

            let member_diameter =
                S::from_params(&orientations[i], &params[i]).circumsphere_diameter();

            if !member_diameter.is_finite() {
                return Err(UnionParamsError::NonFiniteMember(i));
            }

            required = required.max(positions[i].norm() * 2.0 + member_diameter);
        }

        if diameter < required * (1.0 - DIAMETER_TOLERANCE) {
            return Err(UnionParamsError::DiameterTooSmall { diameter, required });
        }

        if diameter > required * (1.0 + DIAMETER_TOLERANCE) {
            log::debug!(
                "Union diameter {} is larger than the extent of its members ({}).",
                diameter,
                required
            );
        }

        hierarchy.check_leaf_partition(member_count)?;

        Ok(Self {
            positions,
            orientations,
            params,
            masks,
            diameter,
            ignore: IgnoreFlags::empty(),
            hierarchy,
        })
    }
}

impl<S: MemberShape, H> UnionParams<S, H> {
    /// Sets the ignore flags of this union type.
    pub fn with_ignore(mut self, ignore: IgnoreFlags) -> Self {
        self.ignore = ignore;
        self
    }

    /// Sets the ignore flags of this union type.
    pub fn set_ignore(&mut self, ignore: IgnoreFlags) {
        self.ignore = ignore;
    }

    /// The number of members.
    #[inline]
    pub fn member_count(&self) -> usize {
        self.positions.len()
    }

    /// The member positions in the union's local frame.
    #[inline]
    pub fn positions(&self) -> &[Vector<Real>] {
        &self.positions
    }

    /// The member orientations in the union's local frame.
    #[inline]
    pub fn orientations(&self) -> &[Rotation<Real>] {
        &self.orientations
    }

    /// The member shape parameters.
    #[inline]
    pub fn params(&self) -> &[S::Params] {
        &self.params
    }

    /// The member interaction masks.
    #[inline]
    pub fn masks(&self) -> &[u32] {
        &self.masks
    }

    /// The diameter of a sphere centered at the union origin and enclosing all the members.
    #[inline]
    pub fn diameter(&self) -> Real {
        self.diameter
    }

    /// The ignore flags of this union type.
    #[inline]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }

    /// The bounding hierarchy over the members.
    #[inline]
    pub fn hierarchy(&self) -> &H {
        &self.hierarchy
    }

    /// The description of the `i`-th member.
    pub fn member(&self, i: usize) -> UnionMember<S::Params> {
        UnionMember {
            position: self.positions[i],
            orientation: self.orientations[i],
            params: self.params[i].clone(),
            mask: self.masks[i],
        }
    }
}

fn member_is_finite(position: &Vector<Real>, orientation: &Rotation<Real>) -> bool {
    position
        .iter()
        .chain(orientation.coords.iter())
        .all(|x| x.is_finite())
}

/// An instance of a union shape: an orientation and a reference to the shared parameters.
pub struct ShapeUnion<'a, S: MemberShape, H = ObbTree> {
    /// The orientation of the union in the world frame.
    pub orientation: Rotation<Real>,
    /// The parameters of the union type.
    pub params: &'a UnionParams<S, H>,
}

impl<S: MemberShape, H> Clone for ShapeUnion<'_, S, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: MemberShape, H> Copy for ShapeUnion<'_, S, H> {}

impl<S: MemberShape, H: fmt::Debug> fmt::Debug for ShapeUnion<'_, S, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeUnion")
            .field("orientation", &self.orientation)
            .field("params", self.params)
            .finish()
    }
}

impl<'a, S: MemberShape, H> ShapeUnion<'a, S, H> {
    /// Creates a union instance with the given orientation.
    #[inline]
    pub fn new(orientation: Rotation<Real>, params: &'a UnionParams<S, H>) -> Self {
        Self {
            orientation,
            params,
        }
    }

    /// Does the orientation of this union affect its geometry?
    ///
    /// This is only `false` for a union with a single member, centered at the union origin, and
    /// whose own geometry does not depend on its orientation.
    pub fn has_orientation(&self) -> bool {
        let params = self.params;
        !(params.member_count() == 1
            && params.positions[0] == Vector::zeros()
            && !S::has_orientation(&params.params[0]))
    }

    /// Should overlap tests against this union be left out of the statistics?
    #[inline]
    pub fn ignore_statistics(&self) -> bool {
        self.params.ignore.contains(IgnoreFlags::STATISTICS)
    }

    /// The diameter of a sphere centered at the union origin and enclosing all the members.
    #[inline]
    pub fn circumsphere_diameter(&self) -> Real {
        self.params.diameter
    }

    /// The radius of a sphere enclosed by the union.
    ///
    /// This is not computed for unions and is always zero.
    #[inline]
    pub fn insphere_radius(&self) -> Real {
        0.0
    }

    /// An axis-aligned box enclosing this union when its origin is at `position`.
    pub fn aabb(&self, position: &Point<Real>) -> Aabb {
        Aabb::from_half_extents(*position, Vector::repeat(self.params.diameter * 0.5))
    }

    /// Can the overlap test of this union be split across several workers?
    #[inline]
    pub fn is_parallel(&self) -> bool {
        true
    }
}

impl<S: MemberShape, H: BoundingHierarchy> ShapeUnion<'_, S, H> {
    /// The bounding box of the given hierarchy node, expressed in the union's local frame.
    #[inline]
    pub fn node_obb(&self, node: u32) -> Obb {
        self.params.hierarchy.obb(node)
    }
}

static_assertions::assert_impl_all!(UnionParams<Sphere, ObbTree>: Send, Sync);
static_assertions::assert_impl_all!(ShapeUnion<'static, Sphere, ObbTree>: Copy, Send, Sync);
