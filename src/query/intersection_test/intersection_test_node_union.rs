use crate::bounding_volume::Obb;
use crate::math::{Real, Vector};
use crate::partitioning::BoundingHierarchy;
use crate::query::details::intersection_test_union_leaves;
use crate::shape::{MemberShape, ShapeUnion};
use arrayvec::ArrayVec;

/// The maximum number of pending nodes during a traversal.
///
/// Hierarchies traversed by [`intersection_test_node_union`] must not be deeper than this.
pub const TRAVERSAL_STACK_SIZE: usize = 64;

/// Margin, in multiples of `Real::EPSILON` relative to the magnitudes involved, by which the box
/// of the driving leaf is enlarged before pruning.
///
/// Node boxes and the separating-axis test both carry rounding errors, so a pair of boxes that
/// exactly touch could otherwise be reported as disjoint.
pub const PRUNE_MARGIN_ULPS: Real = 64.0;

/// Overlap test between the members of one leaf of `a` and all the members of `b`.
///
/// `r_ab` is the vector from the center of `a` to the center of `b`, in the world frame. The box
/// of `leaf_a` is re-expressed in the local frame of `b`, then the hierarchy of `b` is traversed
/// depth-first, pruning every subtree whose box does not intersect it. Each leaf of `b` reached
/// this way is tested exhaustively against `leaf_a` with [`intersection_test_union_leaves`].
///
/// Pruning is conservative: the box of `leaf_a` is enlarged by [`PRUNE_MARGIN_ULPS`] so that a
/// subtree is skipped only when it is separated from `leaf_a` by more than the rounding errors.
///
/// # Panics
/// Panics if the hierarchy of `b` is deeper than [`TRAVERSAL_STACK_SIZE`].
pub fn intersection_test_node_union<S: MemberShape, H: BoundingHierarchy>(
    r_ab: &Vector<Real>,
    a: &ShapeUnion<S, H>,
    leaf_a: u32,
    b: &ShapeUnion<S, H>,
    err: &mut u32,
) -> bool {
    let hierarchy_b = b.params.hierarchy();
    let node_count = hierarchy_b.node_count();

    if node_count == 0 {
        return false;
    }

    let inv_rot_b = b.orientation.inverse();
    let mut obb_a = a
        .node_obb(leaf_a)
        .transform_by(&(inv_rot_b * a.orientation), &(inv_rot_b * -r_ab));
    let margin = prune_margin(&obb_a, b.circumsphere_diameter());

    // NaN for non-finite boxes.
    if margin > 0.0 {
        obb_a = obb_a.loosened(margin);
    }

    if node_count == 1 {
        return obb_a.intersects(&hierarchy_b.obb(0))
            && intersection_test_union_leaves(r_ab, a, leaf_a, b, 0, err);
    }

    // `node_count` is never a valid node index: popping it ends the traversal.
    let mut stack = ArrayVec::<u32, TRAVERSAL_STACK_SIZE>::new();
    stack.push(node_count);
    let mut curr_id = 0;

    while curr_id != node_count {
        let left = hierarchy_b.left_child(curr_id);
        let right = hierarchy_b.next_sibling(left);
        let mut go_left = false;
        let mut go_right = false;

        if obb_a.intersects(&hierarchy_b.obb(left)) {
            if hierarchy_b.is_leaf(left) {
                if intersection_test_union_leaves(r_ab, a, leaf_a, b, left, err) {
                    return true;
                }
            } else {
                go_left = true;
            }
        }

        if obb_a.intersects(&hierarchy_b.obb(right)) {
            if hierarchy_b.is_leaf(right) {
                if intersection_test_union_leaves(r_ab, a, leaf_a, b, right, err) {
                    return true;
                }
            } else {
                go_right = true;
            }
        }

        match (go_left, go_right) {
            (true, true) => {
                curr_id = left;
                stack.push(right);
            }
            (true, false) => curr_id = left,
            (false, true) => curr_id = right,
            (false, false) => curr_id = stack.pop().unwrap_or(node_count),
        }
    }

    false
}

fn prune_margin(obb_a: &Obb, diameter_b: Real) -> Real {
    let scale = obb_a.center.coords.norm() + obb_a.half_extents.norm() + diameter_b;
    PRUNE_MARGIN_ULPS * Real::EPSILON * scale
}
