use super::ObbTreeBuildError;
use super::ObbTreeBuilder;
use crate::bounding_volume::Obb;
use crate::partitioning::BoundingHierarchy;
use alloc::vec::Vec;

/// Value of [`ObbTreeNode::left`] for leaves.
pub(super) const NO_CHILD: u32 = u32::MAX;

/// A node (internal or leaf) of an [`ObbTree`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ObbTreeNode {
    /// The bounding box of every member reachable from this node.
    pub(super) obb: Obb,
    /// Index of the first node following the subtree rooted at this node.
    ///
    /// For a left child this is its right sibling. For the root this is the node count.
    pub(super) escape: u32,
    /// Index of the left child, or `NO_CHILD` if this node is a leaf.
    pub(super) left: u32,
    /// Index, in `ObbTree::members`, of the first member of this leaf.
    pub(super) first_member: u32,
    /// Number of members of this leaf (`0` for internal nodes).
    pub(super) member_count: u32,
}

impl ObbTreeNode {
    /// The bounding box of this node.
    #[inline]
    pub fn obb(&self) -> &Obb {
        &self.obb
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == NO_CHILD
    }

    /// Index of the first node following the subtree rooted at this node.
    #[inline]
    pub fn escape(&self) -> u32 {
        self.escape
    }

    /// The number of members grouped at this node if it is a leaf, `0` otherwise.
    #[inline]
    pub fn member_count(&self) -> u32 {
        self.member_count
    }
}

/// A binary tree of oriented bounding boxes over the members of a union shape.
///
/// The nodes are stored in depth-first order: the left child of an internal node immediately
/// follows it, and its right child is the escape index of the left child. This lets the
/// traversal find the sibling of a node without storing parent links.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ObbTree {
    pub(super) nodes: Vec<ObbTreeNode>,
    pub(super) leaves: Vec<u32>,
    pub(super) members: Vec<u32>,
}

impl ObbTree {
    /// An empty tree, for a union without members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree with a single leaf grouping every member.
    ///
    /// Traversing such a tree degenerates into an exhaustive scan of all the member pairs.
    pub fn single_leaf(member_obbs: &[Obb]) -> Result<Self, ObbTreeBuildError> {
        ObbTreeBuilder::new(usize::MAX).build(member_obbs)
    }

    /// Does this tree have no node?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All the nodes of this tree, in depth-first order.
    #[inline]
    pub fn nodes(&self) -> &[ObbTreeNode] {
        &self.nodes
    }

    /// The node indices of all the leaves, in depth-first order.
    #[inline]
    pub fn leaves(&self) -> &[u32] {
        &self.leaves
    }

    /// The member indices grouped at the given leaf node.
    #[inline]
    pub fn leaf_members(&self, leaf: u32) -> &[u32] {
        let node = &self.nodes[leaf as usize];
        let start = node.first_member as usize;
        &self.members[start..start + node.member_count as usize]
    }
}

impl BoundingHierarchy for ObbTree {
    #[inline]
    fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    #[inline]
    fn obb(&self, node: u32) -> Obb {
        self.nodes[node as usize].obb
    }

    #[inline]
    fn left_child(&self, node: u32) -> u32 {
        self.nodes[node as usize].left
    }

    #[inline]
    fn next_sibling(&self, node: u32) -> u32 {
        self.nodes[node as usize].escape
    }

    #[inline]
    fn is_leaf(&self, node: u32) -> bool {
        self.nodes[node as usize].is_leaf()
    }

    #[inline]
    fn leaf_count(&self) -> u32 {
        self.leaves.len() as u32
    }

    #[inline]
    fn leaf_node(&self, i: u32) -> u32 {
        self.leaves[i as usize]
    }

    #[inline]
    fn member_count_at(&self, leaf: u32) -> u32 {
        self.nodes[leaf as usize].member_count
    }

    #[inline]
    fn member_at(&self, leaf: u32, k: u32) -> u32 {
        self.members[(self.nodes[leaf as usize].first_member + k) as usize]
    }
}
