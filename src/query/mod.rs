//! Overlap queries between union shapes.
//!
//! The most general entry points of this module are:
//!
//! * [`intersection_test_union_union`] to decide if two union instances overlap.
//! * [`check_circumsphere_overlap`] as a cheap, conservative pre-check of the above.
//!
//! The functions exported by the `details` submodule are the building blocks of these tests.
//! They have the form `intersection_test_[shape1]_[shape2]()`, where `[shape1]` and `[shape2]`
//! identify the kind of geometry tested, e.g., `sphere`, `union_leaves`, or `node_union`.

pub use self::intersection_test::{
    check_circumsphere_overlap, intersection_test_circumspheres, intersection_test_union_union,
    intersection_test_union_union_strided,
};
#[cfg(feature = "parallel")]
pub use self::intersection_test::intersection_test_union_union_par;

mod intersection_test;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
