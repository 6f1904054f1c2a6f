use super::ObbTree;
use crate::bounding_volume::Obb;
use crate::math::Real;
use crate::partitioning::BoundingHierarchy;
use alloc::vec::Vec;

impl ObbTree {
    /// The number of edges on the longest path from the root to a leaf.
    ///
    /// Returns `0` for an empty tree and for a tree with a single leaf.
    pub fn depth(&self) -> u32 {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut max_depth = 0;
        let mut stack = Vec::new();
        stack.push((0u32, 0u32));

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);

            if !self.is_leaf(node) {
                let left = self.left_child(node);
                stack.push((left, depth + 1));
                stack.push((self.next_sibling(left), depth + 1));
            }
        }

        max_depth
    }

    /// Panics if the structure of this tree is inconsistent.
    ///
    /// This checks that the escape indices chain properly, that internal nodes have two children,
    /// and that the leaves partition the members.
    pub fn assert_well_formed(&self) {
        if self.nodes.is_empty() {
            assert!(self.leaves.is_empty());
            assert!(self.members.is_empty());
            return;
        }

        let mut leaves = Vec::new();
        self.assert_well_formed_recursive(0, self.nodes.len() as u32, &mut leaves);
        assert_eq!(leaves, self.leaves, "Leaves are not listed in depth-first order.");

        if let Err(err) = self.check_leaf_partition(self.members.len()) {
            panic!("Invalid leaf partition: {}", err);
        }
    }

    /// Panics if the box of a node does not enclose the boxes of all the members of its subtree.
    pub fn assert_encloses_members(&self, member_obbs: &[Obb]) {
        for (id, node) in self.nodes.iter().enumerate() {
            let tolerance = containment_tolerance(&node.obb);
            let subtree = id as u32..node.escape;

            for leaf in self.leaves.iter().filter(|leaf| subtree.contains(*leaf)) {
                for member in self.leaf_members(*leaf) {
                    for pt in member_obbs[*member as usize].vertices() {
                        assert!(
                            node.obb.loosened(tolerance).contains_point(&pt),
                            "Node {} does not enclose the member {}.",
                            id,
                            member
                        );
                    }
                }
            }
        }
    }

    fn assert_well_formed_recursive(&self, node: u32, expected_escape: u32, leaves: &mut Vec<u32>) {
        let data = &self.nodes[node as usize];
        assert_eq!(data.escape, expected_escape, "Invalid escape index at node {}.", node);

        if data.is_leaf() {
            assert!(data.member_count > 0, "Empty leaf {}.", node);
            leaves.push(node);
            return;
        }

        assert_eq!(data.left, node + 1);
        assert_eq!(data.member_count, 0);
        let right = self.next_sibling(data.left);
        assert!(right < expected_escape, "Internal node {} has no right child.", node);

        self.assert_well_formed_recursive(data.left, right, leaves);
        self.assert_well_formed_recursive(right, expected_escape, leaves);
    }
}

fn containment_tolerance(obb: &Obb) -> Real {
    1.0e-4 * (1.0 + obb.center.coords.norm() + obb.half_extents.norm())
}
