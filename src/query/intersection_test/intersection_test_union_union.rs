use crate::math::{Real, Vector};
use crate::partitioning::BoundingHierarchy;
use crate::query::details::intersection_test_node_union;
use crate::shape::{MemberShape, ShapeUnion};
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Overlap test between two union instances.
///
/// `r_ab` is the vector from the center of `a` to the center of `b`, in the world frame.
/// Degeneracies reported by the member tests are added to `err`.
///
/// The union whose hierarchy has the fewest leaves drives the test (`a` on ties): each of its
/// leaves is tested against the whole hierarchy of the other union with
/// [`intersection_test_node_union`]. The result is the same if the roles of `a` and `b` are
/// swapped and `r_ab` is negated.
pub fn intersection_test_union_union<S: MemberShape, H: BoundingHierarchy>(
    r_ab: &Vector<Real>,
    a: &ShapeUnion<S, H>,
    b: &ShapeUnion<S, H>,
    err: &mut u32,
) -> bool {
    let found = AtomicBool::new(false);
    intersection_test_union_union_strided(r_ab, a, b, err, 0, 1, &found)
}

/// Overlap test between two union instances, restricted to a strided subset of the driving leaves.
///
/// Only the leaves `offset`, `offset + stride`, `offset + 2 * stride`, ... of the driving union
/// (see [`intersection_test_union_union`]) are tested. Running this with every `offset` in
/// `0..stride`, possibly on different threads, and or-ing the results gives the same answer as
/// [`intersection_test_union_union`].
///
/// The `found` flag is shared by all the workers of the same test. It is set as soon as one of
/// them finds an overlap, and the others stop early (returning `false`) when they see it set. It
/// is advisory only: a worker may miss an update and keep going.
pub fn intersection_test_union_union_strided<S: MemberShape, H: BoundingHierarchy>(
    r_ab: &Vector<Real>,
    a: &ShapeUnion<S, H>,
    b: &ShapeUnion<S, H>,
    err: &mut u32,
    offset: u32,
    stride: u32,
    found: &AtomicBool,
) -> bool {
    debug_assert!(stride > 0, "The leaf stride must be positive.");
    let (r_ab, a, b) = driving_order(r_ab, a, b);
    let leaf_count = a.params.hierarchy().leaf_count();

    for i in (offset..leaf_count).step_by(stride.max(1) as usize) {
        if found.load(Ordering::Relaxed) {
            return false;
        }

        let leaf = a.params.hierarchy().leaf_node(i);

        if intersection_test_node_union(&r_ab, a, leaf, b, err) {
            found.store(true, Ordering::Relaxed);
            return true;
        }
    }

    false
}

/// Overlap test between two union instances, with the driving leaves processed in parallel.
///
/// Each task counts its own degeneracies and the counts are summed into `err`. Tasks that start
/// after an overlap was found are skipped and do not contribute to `err`.
#[cfg(feature = "parallel")]
pub fn intersection_test_union_union_par<S: MemberShape, H: BoundingHierarchy + Sync>(
    r_ab: &Vector<Real>,
    a: &ShapeUnion<S, H>,
    b: &ShapeUnion<S, H>,
    err: &mut u32,
) -> bool {
    let (r_ab, a, b) = driving_order(r_ab, a, b);
    let hierarchy_a = a.params.hierarchy();
    let found = AtomicBool::new(false);

    let (hit, task_err) = (0..hierarchy_a.leaf_count())
        .into_par_iter()
        .map(|i| {
            if found.load(Ordering::Relaxed) {
                return (false, 0);
            }

            let mut task_err = 0;
            let leaf = hierarchy_a.leaf_node(i);
            let hit = intersection_test_node_union(&r_ab, a, leaf, b, &mut task_err);

            if hit {
                found.store(true, Ordering::Relaxed);
            }

            (hit, task_err)
        })
        .reduce(|| (false, 0), |(hit1, err1), (hit2, err2)| {
            (hit1 || hit2, err1 + err2)
        });

    *err += task_err;
    hit
}

/// Orders the arguments so that the union with the fewest leaves comes first.
#[inline]
fn driving_order<'a, 'b, S: MemberShape, H: BoundingHierarchy>(
    r_ab: &Vector<Real>,
    a: &'b ShapeUnion<'a, S, H>,
    b: &'b ShapeUnion<'a, S, H>,
) -> (Vector<Real>, &'b ShapeUnion<'a, S, H>, &'b ShapeUnion<'a, S, H>) {
    if b.params.hierarchy().leaf_count() < a.params.hierarchy().leaf_count() {
        (-r_ab, b, a)
    } else {
        (*r_ab, a, b)
    }
}
