//! Property-based tests for recip-math
//!
//! Uses proptest to validate the invariants of the reciprocal kernel across
//! generated inputs and iteration budgets.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use recip_math::math::{recip_newton, recip_newton_scalar, InverseSeed, SeedMode};
use recip_math::{DefaultSimdVector, SimdVector};

use test_utils::*;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 2_000,
        ..ProptestConfig::default()
    }
}

fn seed_mode() -> impl Strategy<Value = SeedMode> {
    prop_oneof![Just(SeedMode::Bucketed), Just(SeedMode::Normalized)]
}

/// Property: recip(-x) == -recip(x), bit for bit
#[test]
fn test_sign_symmetry() {
    proptest!(proptest_config(), |(x in nonzero_normal_f32(), iterations in 1usize..=20, mode in seed_mode())| {
        let seed = InverseSeed::new(mode, iterations);
        let pos = recip_newton_scalar(x, &seed);
        let neg = recip_newton_scalar(-x, &seed);
        prop_assert_eq!(pos.to_bits(), (-neg).to_bits(), "x={}, iterations={}", x, iterations);
    });
}

/// Property: the normalized seed converges across [1e-3, 1e3] within three steps
#[test]
fn test_normalized_accuracy() {
    proptest!(proptest_config(), |(x in moderate_magnitude_f32(), negative in any::<bool>(), iterations in 3usize..=16)| {
        let x = if negative { -x } else { x };
        let r = recip_newton_scalar(x, &InverseSeed::normalized(iterations));
        prop_assert!(
            recip_relative_error(r, x) < RELATIVE_ERROR_TOLERANCE,
            "recip({}) = {} with {} iterations", x, r, iterations
        );
    });
}

/// Property: the bucketed seed converges for the whole upper bucket given 16 steps
#[test]
fn test_bucketed_upper_bucket_accuracy() {
    proptest!(proptest_config(), |(x in upper_bucket_f32())| {
        let r = recip_newton_scalar(x, &InverseSeed::bucketed(16));
        prop_assert!(recip_relative_error(r, x) < RELATIVE_ERROR_TOLERANCE, "recip({}) = {}", x, r);
    });
}

/// Property: every lane equals the scalar path, including special values
#[test]
fn test_lanes_match_scalar_bits() {
    let lanes_strategy = proptest::collection::vec(any_f32(), DefaultSimdVector::LANES);
    proptest!(proptest_config(), |(input in lanes_strategy, iterations in 1usize..=12, mode in seed_mode())| {
        let seed = InverseSeed::new(mode, iterations);
        let result = lanes(recip_newton(DefaultSimdVector::from_slice(&input), &seed));
        for (x, r) in input.iter().zip(result.iter()) {
            let expected = recip_newton_scalar(*x, &seed);
            prop_assert_eq!(r.to_bits(), expected.to_bits(), "x={}", x);
        }
    });
}

/// Property: seed constants depend only on the iteration count
#[test]
fn test_seed_bounds_are_reciprocal_pair() {
    proptest!(proptest_config(), |(iterations in 1usize..=200)| {
        let seed = InverseSeed::bucketed(iterations);
        let cube = (iterations * iterations * iterations) as f32;
        prop_assert_eq!(seed.max(), cube);
        prop_assert_eq!(seed.inv_max(), 1.0 / cube);
        prop_assert!(seed.inv_max() <= 1.0 && seed.max() >= 1.0);
    });
}
