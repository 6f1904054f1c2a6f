//! Application of the Separating Axis Theorem (SAT) to boxes.
//!
//! Two convex polyhedra are disjoint if and only if there exists an axis on which their
//! projections do not overlap. For two boxes, the candidate axes are the three face normals of
//! each box and the nine cross products between an edge direction of each box.

pub use self::sat_cuboid_cuboid::*;

mod sat_cuboid_cuboid;
