pub use obb_tree::{ObbTree, ObbTreeNode};
pub use obb_tree_build::{ObbTreeBuildError, ObbTreeBuilder, DEFAULT_LEAF_CAPACITY};

mod obb_tree;
mod obb_tree_build;
mod obb_tree_validation;
