use super::utils::*;
use hpmc3d::bounding_volume::Obb;
use hpmc3d::math::{Point, Real, Rotation, Vector};
use hpmc3d::partitioning::{BoundingHierarchy, LeafPartitionError};
use hpmc3d::query;
use hpmc3d::shape::{ShapeUnion, Sphere, UnionMember, UnionParams, UnionParamsError};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A hierarchy made of a root enclosing everything and one leaf per group of members.
///
/// Only a root with exactly two leaves is supported.
#[derive(Debug)]
struct TwoLeaves {
    root: Obb,
    leaves: [(Obb, Vec<u32>); 2],
}

impl BoundingHierarchy for TwoLeaves {
    fn node_count(&self) -> u32 {
        3
    }

    fn obb(&self, node: u32) -> Obb {
        match node {
            0 => self.root,
            _ => self.leaves[node as usize - 1].0,
        }
    }

    fn left_child(&self, _: u32) -> u32 {
        1
    }

    fn next_sibling(&self, node: u32) -> u32 {
        node + 1
    }

    fn is_leaf(&self, node: u32) -> bool {
        node != 0
    }

    fn leaf_count(&self) -> u32 {
        2
    }

    fn leaf_node(&self, i: u32) -> u32 {
        i + 1
    }

    fn member_count_at(&self, leaf: u32) -> u32 {
        self.leaves[leaf as usize - 1].1.len() as u32
    }

    fn member_at(&self, leaf: u32, k: u32) -> u32 {
        self.leaves[leaf as usize - 1].1[k as usize]
    }
}

fn row(count: usize) -> Vec<UnionMember<Sphere>> {
    (0..count)
        .map(|i| UnionMember::new(Vector::new(i as Real, 0.0, 0.0), Sphere::new(0.5)))
        .collect()
}

fn two_leaves(left: Vec<u32>, right: Vec<u32>, count: usize) -> TwoLeaves {
    let length = count as Real;
    let half = Vector::new(length / 2.0, 0.5, 0.5);
    let center = Point::new(length / 2.0 - 0.5, 0.0, 0.0);
    let obb = Obb::from_half_extents(center, half);
    TwoLeaves {
        root: obb,
        leaves: [(obb, left), (obb, right)],
    }
}

#[test]
fn custom_hierarchy_is_validated() {
    let members = row(4);

    let ok = two_leaves(vec![0, 2], vec![3, 1], 4);
    assert!(UnionParams::<Sphere, TwoLeaves>::from_members(&members, 8.0, ok).is_ok());

    let duplicate = two_leaves(vec![0, 2], vec![2, 1], 4);
    assert_eq!(
        UnionParams::<Sphere, TwoLeaves>::from_members(&members, 8.0, duplicate).unwrap_err(),
        UnionParamsError::Hierarchy(LeafPartitionError::DuplicateMember(2))
    );

    let unknown = two_leaves(vec![0, 2], vec![3, 1, 4], 4);
    assert_eq!(
        UnionParams::<Sphere, TwoLeaves>::from_members(&members, 8.0, unknown).unwrap_err(),
        UnionParamsError::Hierarchy(LeafPartitionError::UnknownMember {
            leaf: 2,
            member: 4,
            member_count: 4
        })
    );
}

#[test]
fn custom_hierarchy_is_traversed() {
    let members = row(4);
    let params = UnionParams::<Sphere, TwoLeaves>::from_members(
        &members,
        8.0,
        two_leaves(vec![0, 1], vec![2, 3], 4),
    )
    .unwrap();
    let a = ShapeUnion::new(Rotation::identity(), &params);
    let mut err = 0;

    // Members of `a` span [-0.5, 3.5] along x.
    assert!(query::intersection_test_union_union(&Vector::new(4.0, 0.0, 0.0), &a, &a, &mut err));
    assert!(!query::intersection_test_union_union(&Vector::new(4.01, 0.0, 0.0), &a, &a, &mut err));
    assert!(query::intersection_test_union_union(&Vector::new(1.5, 0.8, 0.0), &a, &a, &mut err));
    assert!(!query::intersection_test_union_union(&Vector::new(0.5, 1.01, 0.0), &a, &a, &mut err));
}

#[test]
fn random_unions_have_partitioned_leaves() {
    let mut rng = StdRng::seed_from_u64(40);

    for count in [1, 2, 5, 17, 64] {
        for leaf_capacity in [1, 3, 4, 16] {
            let members = random_sphere_members(&mut rng, count, &[1]);
            let params = sphere_union(&members, leaf_capacity);
            assert!(params.hierarchy().check_leaf_partition(count).is_ok());
            params.hierarchy().assert_well_formed();
        }
    }
}

#[test]
fn diameter_encloses_members() {
    let mut rng = StdRng::seed_from_u64(41);
    let members = random_sphere_members(&mut rng, 30, &[1]);
    let params = sphere_union(&members, 4);

    for member in &members {
        assert!(member.position.norm() + member.params.radius <= params.diameter() / 2.0 + 1.0e-5);
    }

    let undersized = UnionParams::<Sphere>::from_members(
        &members,
        params.diameter() * 0.9,
        params.hierarchy().clone(),
    );
    assert!(matches!(
        undersized,
        Err(UnionParamsError::DiameterTooSmall { .. })
    ));
}
