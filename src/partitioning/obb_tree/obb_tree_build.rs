use super::obb_tree::{ObbTreeNode, NO_CHILD};
use super::ObbTree;
use crate::bounding_volume::Obb;
use crate::math::{Point, Real, Vector};
use alloc::vec::Vec;
use ordered_float::OrderedFloat;

/// The default maximum number of members grouped at a single leaf.
pub const DEFAULT_LEAF_CAPACITY: usize = 4;

const FIT_MARGIN_ULPS: Real = 16.0;

/// Error that can occur while building an [`ObbTree`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObbTreeBuildError {
    /// The bounding box of a member has a non-finite component.
    #[error("the bounding box of the member {0} is not finite.")]
    NonFiniteBox(u32),
    /// There are more members than what can be indexed by the tree.
    #[error("cannot build a tree over {0} members.")]
    TooManyMembers(usize),
}

/// Top-down builder of [`ObbTree`].
///
/// Each node box is fitted to the corners of the member boxes it encloses, using the principal
/// axes of these corners. Nodes with more than `leaf_capacity` members are split in two halves at
/// the median of the member centers projected on the longest axis of the node box. Median splits
/// bound the tree depth by `ceil(log2(member_count))`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ObbTreeBuilder {
    /// The maximum number of members grouped at a single leaf.
    pub leaf_capacity: usize,
}

impl Default for ObbTreeBuilder {
    fn default() -> Self {
        Self {
            leaf_capacity: DEFAULT_LEAF_CAPACITY,
        }
    }
}

impl ObbTreeBuilder {
    /// Creates a builder with the given leaf capacity.
    pub fn new(leaf_capacity: usize) -> Self {
        Self { leaf_capacity }
    }

    /// Builds a tree over the given member boxes.
    ///
    /// The member indices stored at the leaves are indices into `member_obbs`.
    pub fn build(&self, member_obbs: &[Obb]) -> Result<ObbTree, ObbTreeBuildError> {
        if member_obbs.len() >= NO_CHILD as usize {
            return Err(ObbTreeBuildError::TooManyMembers(member_obbs.len()));
        }

        if let Some(i) = member_obbs.iter().position(|obb| !obb.is_finite()) {
            return Err(ObbTreeBuildError::NonFiniteBox(i as u32));
        }

        let leaf_capacity = if self.leaf_capacity == 0 {
            log::warn!("An OBB tree leaf capacity of 0 was requested; using 1 instead.");
            1
        } else {
            self.leaf_capacity
        };

        let mut tree = ObbTree::new();

        if member_obbs.is_empty() {
            return Ok(tree);
        }

        let mut indices: Vec<u32> = (0..member_obbs.len() as u32).collect();
        tree.build_range(member_obbs, &mut indices, leaf_capacity);

        log::debug!(
            "Built an OBB tree over {} members: {} nodes, {} leaves, depth {}.",
            member_obbs.len(),
            tree.nodes.len(),
            tree.leaves.len(),
            tree.depth()
        );
        debug_assert!((tree.depth() as usize) < crate::query::details::TRAVERSAL_STACK_SIZE);

        Ok(tree)
    }
}

impl ObbTree {
    fn build_range(&mut self, member_obbs: &[Obb], indices: &mut [u32], leaf_capacity: usize) {
        let id = self.nodes.len() as u32;
        let obb = enclosing_obb(member_obbs, indices);

        if indices.len() <= leaf_capacity {
            let first_member = self.members.len() as u32;
            self.members.extend_from_slice(indices);
            self.leaves.push(id);
            self.nodes.push(ObbTreeNode {
                obb,
                escape: id + 1,
                left: NO_CHILD,
                first_member,
                member_count: indices.len() as u32,
            });
            return;
        }

        self.nodes.push(ObbTreeNode {
            obb,
            escape: id + 1, // Fixed once the children are built.
            left: id + 1,
            first_member: 0,
            member_count: 0,
        });

        let split_axis = obb.rotation * Vector::ith(obb.half_extents.imax(), 1.0);
        let mid = indices.len() / 2;
        let _ = indices.select_nth_unstable_by_key(mid, |i| {
            OrderedFloat(split_axis.dot(&member_obbs[*i as usize].center.coords))
        });

        let (left, right) = indices.split_at_mut(mid);
        self.build_range(member_obbs, left, leaf_capacity);
        self.build_range(member_obbs, right, leaf_capacity);
        self.nodes[id as usize].escape = self.nodes.len() as u32;
    }
}

/// The box enclosing all the given members, fitted to the corners of their boxes.
///
/// Fitted boxes are enlarged by a few ulps of their own magnitude so that rounding in the fit
/// never leaves a corner outside.
fn enclosing_obb(member_obbs: &[Obb], members: &[u32]) -> Obb {
    if let [single] = members {
        return member_obbs[*single as usize];
    }

    let corners: Vec<Point<Real>> = members
        .iter()
        .flat_map(|i| member_obbs[*i as usize].vertices())
        .collect();
    let fitted = crate::utils::obb(&corners);
    let scale = fitted.center.coords.norm() + fitted.half_extents.norm();
    fitted.loosened(FIT_MARGIN_ULPS * Real::EPSILON * scale)
}
