use crate::bounding_volume::Obb;
use alloc::vec;

/// Error returned when the leaves of a hierarchy do not partition the members of a union.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LeafPartitionError {
    /// A leaf references a member index outside of `0..member_count`.
    #[error("leaf {leaf} references the member {member}, but the union only has {member_count} members.")]
    UnknownMember {
        /// The node index of the faulty leaf.
        leaf: u32,
        /// The out-of-bounds member index.
        member: u32,
        /// The number of members of the union.
        member_count: usize,
    },
    /// A member is referenced by more than one leaf slot.
    #[error("the member {0} is referenced more than once by the hierarchy leaves.")]
    DuplicateMember(u32),
    /// A member is not referenced by any leaf.
    #[error("the member {0} is not referenced by any hierarchy leaf.")]
    MissingMember(u32),
}

/// A read-only bounding volume hierarchy over the members of a union shape.
///
/// Nodes are identified by indices in `0..self.node_count()`. The root is the node `0`. Every
/// internal node has exactly two children: [`Self::left_child`] and the sibling following it,
/// given by [`Self::next_sibling`]. A hierarchy with more than one node must therefore have an
/// internal root.
///
/// The traversal relies on the following preconditions that are not checked at query time:
/// - `node_count()` is not a valid node index. It is used as a sentinel value.
/// - The depth of the tree does not exceed
///   [`TRAVERSAL_STACK_SIZE`](crate::query::details::TRAVERSAL_STACK_SIZE).
/// - The bounding box of a node encloses every member grouped at the leaves of its subtree.
pub trait BoundingHierarchy {
    /// The total number of nodes.
    fn node_count(&self) -> u32;

    /// The oriented bounding box of the given node, expressed in the union's local frame.
    fn obb(&self, node: u32) -> Obb;

    /// The index of the left child of an internal node.
    fn left_child(&self, node: u32) -> u32;

    /// The index of the sibling of a left child.
    fn next_sibling(&self, node: u32) -> u32;

    /// Is the given node a leaf?
    fn is_leaf(&self, node: u32) -> bool;

    /// The total number of leaves.
    fn leaf_count(&self) -> u32;

    /// The node index of the `i`-th leaf.
    fn leaf_node(&self, i: u32) -> u32;

    /// The number of members grouped at the given leaf.
    fn member_count_at(&self, leaf: u32) -> u32;

    /// The index of the `k`-th member grouped at the given leaf.
    fn member_at(&self, leaf: u32, k: u32) -> u32;

    /// Checks that the leaves reference each member index of `0..member_count` exactly once.
    fn check_leaf_partition(&self, member_count: usize) -> Result<(), LeafPartitionError> {
        let mut seen = vec![false; member_count];

        for i in 0..self.leaf_count() {
            let leaf = self.leaf_node(i);

            for k in 0..self.member_count_at(leaf) {
                let member = self.member_at(leaf, k);
                let Some(seen) = seen.get_mut(member as usize) else {
                    return Err(LeafPartitionError::UnknownMember {
                        leaf,
                        member,
                        member_count,
                    });
                };

                if *seen {
                    return Err(LeafPartitionError::DuplicateMember(member));
                }

                *seen = true;
            }
        }

        match seen.iter().position(|seen| !seen) {
            Some(missing) => Err(LeafPartitionError::MissingMember(missing as u32)),
            None => Ok(()),
        }
    }
}
