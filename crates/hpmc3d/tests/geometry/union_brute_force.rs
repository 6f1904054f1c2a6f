use super::utils::*;
use hpmc3d::bounding_volume::Obb;
use hpmc3d::math::Vector;
use hpmc3d::partitioning::ObbTree;
use hpmc3d::query;
use hpmc3d::shape::{ShapeUnion, Sphere, UnionMember, UnionParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn sphere_unions_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut hits = 0;
    let mut misses = 0;

    for _ in 0..40 {
        let count_a = rng.gen_range(1..24);
        let count_b = rng.gen_range(1..24);
        let members_a = random_sphere_members(&mut rng, count_a, &[1]);
        let members_b = random_sphere_members(&mut rng, count_b, &[1]);

        for leaf_capacity in [1, 3, 8] {
            let params_a = sphere_union(&members_a, leaf_capacity);
            let params_b = sphere_union(&members_b, leaf_capacity);

            for _ in 0..20 {
                let a = ShapeUnion::new(random_rotation(&mut rng), &params_a);
                let b = ShapeUnion::new(random_rotation(&mut rng), &params_b);
                let r_ab = random_vector(&mut rng, 3.5);
                let mut err = 0;

                let expected = brute_force_overlap(&r_ab, &a, &b, &mut err);
                let result = query::intersection_test_union_union(&r_ab, &a, &b, &mut err);
                assert_eq!(result, expected, "r_ab: {:?}", r_ab);
                assert_eq!(err, 0);

                if expected {
                    hits += 1;
                } else {
                    misses += 1;
                }
            }
        }
    }

    assert!(hits > 50 && misses > 50, "{} hits, {} misses", hits, misses);
}

#[test]
fn cuboid_unions_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut hits = 0;
    let mut misses = 0;

    for _ in 0..30 {
        let count_a = rng.gen_range(1..16);
        let count_b = rng.gen_range(1..16);
        let members_a = random_cuboid_members(&mut rng, count_a, &[1]);
        let members_b = random_cuboid_members(&mut rng, count_b, &[1]);

        for leaf_capacity in [1, 4] {
            let params_a = cuboid_union(&members_a, leaf_capacity);
            let params_b = cuboid_union(&members_b, leaf_capacity);

            for _ in 0..20 {
                let a = ShapeUnion::new(random_rotation(&mut rng), &params_a);
                let b = ShapeUnion::new(random_rotation(&mut rng), &params_b);
                let r_ab = random_vector(&mut rng, 3.0);
                let mut err = 0;

                let expected = brute_force_overlap(&r_ab, &a, &b, &mut err);
                let result = query::intersection_test_union_union(&r_ab, &a, &b, &mut err);
                assert_eq!(result, expected, "r_ab: {:?}", r_ab);

                if expected {
                    hits += 1;
                } else {
                    misses += 1;
                }
            }
        }
    }

    assert!(hits > 50 && misses > 50, "{} hits, {} misses", hits, misses);
}

#[test]
fn single_leaf_tree_is_an_exhaustive_scan() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..30 {
        let members_a = random_sphere_members(&mut rng, 12, &[1, 2, 3]);
        let members_b = random_sphere_members(&mut rng, 9, &[1, 2, 3]);

        let tree_a = sphere_union(&members_a, 2);
        let tree_b = sphere_union(&members_b, 2);

        let flat_a = single_leaf_union(&members_a, &tree_a);
        let flat_b = single_leaf_union(&members_b, &tree_b);

        for _ in 0..20 {
            let q_a = random_rotation(&mut rng);
            let q_b = random_rotation(&mut rng);
            let r_ab = random_vector(&mut rng, 5.0);
            let mut err = 0;

            let flat = query::intersection_test_union_union(
                &r_ab,
                &ShapeUnion::new(q_a, &flat_a),
                &ShapeUnion::new(q_b, &flat_b),
                &mut err,
            );
            let tree = query::intersection_test_union_union(
                &r_ab,
                &ShapeUnion::new(q_a, &tree_a),
                &ShapeUnion::new(q_b, &tree_b),
                &mut err,
            );
            assert_eq!(flat, tree);
        }
    }
}

#[test]
fn single_leaf_tree_agrees_at_contact() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut checked = 0;

    for _ in 0..30 {
        // Equal member counts give equal leaf counts, so `a` drives both tests.
        let members_a = random_sphere_members(&mut rng, 12, &[1, 2, 3]);
        let members_b = random_sphere_members(&mut rng, 12, &[1, 2, 3]);

        for leaf_capacity in [1, 2, 4, 16] {
            let tree_a = sphere_union(&members_a, leaf_capacity);
            let tree_b = sphere_union(&members_b, leaf_capacity);
            let flat_a = single_leaf_union(&members_a, &tree_a);
            let flat_b = single_leaf_union(&members_b, &tree_b);

            for _ in 0..10 {
                let i = rng.gen_range(0..members_a.len());
                let j = rng.gen_range(0..members_b.len());

                if members_a[i].mask & members_b[j].mask == 0 {
                    continue;
                }

                // Place the members `i` and `j` exactly at their contact distance.
                let q_a = random_rotation(&mut rng);
                let q_b = random_rotation(&mut rng);
                let dir = random_vector(&mut rng, 1.0)
                    .try_normalize(1.0e-3)
                    .unwrap_or(Vector::x());
                let contact = members_a[i].params.radius + members_b[j].params.radius;
                let r_ab = q_a * members_a[i].position + dir * contact - q_b * members_b[j].position;
                let mut err = 0;

                let flat = query::intersection_test_union_union(
                    &r_ab,
                    &ShapeUnion::new(q_a, &flat_a),
                    &ShapeUnion::new(q_b, &flat_b),
                    &mut err,
                );
                let tree = query::intersection_test_union_union(
                    &r_ab,
                    &ShapeUnion::new(q_a, &tree_a),
                    &ShapeUnion::new(q_b, &tree_b),
                    &mut err,
                );

                assert_eq!(flat, tree, "r_ab: {:?}, leaf capacity: {}", r_ab, leaf_capacity);
                assert_eq!(err, 0);
                checked += 1;
            }
        }
    }

    assert!(checked > 100, "only {} contact configurations", checked);
}

fn single_leaf_union(
    members: &[UnionMember<Sphere>],
    tree: &UnionParams<Sphere>,
) -> UnionParams<Sphere> {
    let obbs: Vec<_> = members.iter().map(member_obb).collect();
    let hierarchy = ObbTree::single_leaf(&obbs).unwrap();
    UnionParams::<Sphere>::from_members(members, tree.diameter(), hierarchy).unwrap()
}

fn member_obb(member: &UnionMember<Sphere>) -> Obb {
    Obb::from_half_extents(member.position.into(), Vector::repeat(member.params.radius))
}
