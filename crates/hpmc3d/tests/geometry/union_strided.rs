use super::utils::*;
use hpmc3d::math::Vector;
use hpmc3d::query;
use hpmc3d::shape::ShapeUnion;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn strided_workers_agree_with_serial_test() {
    let mut rng = StdRng::seed_from_u64(30);

    for stride in [1, 2, 3, 7] {
        for _ in 0..20 {
            let params_a = sphere_union(&random_sphere_members(&mut rng, 16, &[1]), 1);
            let params_b = sphere_union(&random_sphere_members(&mut rng, 20, &[1]), 2);
            let a = ShapeUnion::new(random_rotation(&mut rng), &params_a);
            let b = ShapeUnion::new(random_rotation(&mut rng), &params_b);

            for _ in 0..10 {
                let r_ab = random_vector(&mut rng, 3.5);
                let mut err = 0;
                let expected = query::intersection_test_union_union(&r_ab, &a, &b, &mut err);

                let found = AtomicBool::new(false);
                let mut any = false;
                for offset in 0..stride {
                    any |= query::intersection_test_union_union_strided(
                        &r_ab, &a, &b, &mut err, offset, stride, &found,
                    );
                }

                assert_eq!(any, expected);
                assert_eq!(found.load(Ordering::Relaxed), expected);
            }
        }
    }
}

#[test]
fn strided_worker_exits_when_found_is_set() {
    let mut rng = StdRng::seed_from_u64(31);
    let params = sphere_union(&random_sphere_members(&mut rng, 8, &[1]), 1);
    let a = ShapeUnion::new(random_rotation(&mut rng), &params);
    let r_ab = Vector::zeros();
    let mut err = 0;

    let found = AtomicBool::new(false);
    assert!(query::intersection_test_union_union_strided(
        &r_ab, &a, &a, &mut err, 0, 1, &found
    ));
    assert!(found.load(Ordering::Relaxed));

    // Another worker of the same test does not need to do anything.
    assert!(!query::intersection_test_union_union_strided(
        &r_ab, &a, &a, &mut err, 0, 1, &found
    ));
}
