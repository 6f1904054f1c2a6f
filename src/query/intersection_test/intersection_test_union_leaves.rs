use crate::math::{Real, Rotation, Vector};
use crate::partitioning::BoundingHierarchy;
use crate::shape::{MemberShape, ShapeUnion};

/// Exhaustive overlap test between the members of a leaf of `a` and the members of a leaf of `b`.
///
/// `r_ab` is the vector from the center of `a` to the center of `b`, in the world frame. The test
/// is performed in the local frame of `b`. Two members are only tested if their masks share at
/// least one bit. Degeneracies reported by the member tests are added to `err` without stopping
/// the scan.
pub fn intersection_test_union_leaves<S: MemberShape, H: BoundingHierarchy>(
    r_ab: &Vector<Real>,
    a: &ShapeUnion<S, H>,
    leaf_a: u32,
    b: &ShapeUnion<S, H>,
    leaf_b: u32,
    err: &mut u32,
) -> bool {
    let params_a = a.params;
    let params_b = b.params;
    let hierarchy_a = params_a.hierarchy();
    let hierarchy_b = params_b.hierarchy();

    let inv_rot_b = b.orientation.inverse();
    let rot_ba = inv_rot_b * a.orientation;
    let local_r_ab = inv_rot_b * r_ab;

    for ka in 0..hierarchy_a.member_count_at(leaf_a) {
        let i = hierarchy_a.member_at(leaf_a, ka) as usize;
        let mask_i = params_a.masks()[i];

        if mask_i == 0 {
            continue;
        }

        let member_params_i = &params_a.params()[i];
        let orientation_i = if S::has_orientation(member_params_i) {
            rot_ba * params_a.orientations()[i]
        } else {
            Rotation::identity()
        };
        let shape_i = S::from_params(&orientation_i, member_params_i);
        let pos_i = rot_ba * params_a.positions()[i] - local_r_ab;

        for kb in 0..hierarchy_b.member_count_at(leaf_b) {
            let j = hierarchy_b.member_at(leaf_b, kb) as usize;

            if mask_i & params_b.masks()[j] == 0 {
                continue;
            }

            let member_params_j = &params_b.params()[j];
            let orientation_j = if S::has_orientation(member_params_j) {
                params_b.orientations()[j]
            } else {
                Rotation::identity()
            };
            let shape_j = S::from_params(&orientation_j, member_params_j);
            let r_ij = params_b.positions()[j] - pos_i;

            if S::intersection_test(&r_ij, &shape_i, &shape_j, err) {
                return true;
            }
        }
    }

    false
}
