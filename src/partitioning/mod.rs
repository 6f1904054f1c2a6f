//! Spatial partitioning tools.

pub use self::bounding_hierarchy::{BoundingHierarchy, LeafPartitionError};
pub use self::obb_tree::{
    ObbTree, ObbTreeBuildError, ObbTreeBuilder, ObbTreeNode, DEFAULT_LEAF_CAPACITY,
};

mod bounding_hierarchy;
mod obb_tree;
