//! Scalar Backend Implementation
//!
//! Processes one element at a time through the same lane-generic kernel the
//! SIMD backends use. This is the reference every other backend must match bit
//! for bit.

use recip_math::math::{recip_newton, recip_newton_scalar, InverseSeed};
use recip_math::ScalarVector;

use crate::backend::InverseBackend;
use crate::helpers::{process_unary, process_unary_in_place};

/// Scalar Backend (No SIMD)
///
/// Always available; the default when the `avx2` feature is off.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScalarBackend;

impl InverseBackend for ScalarBackend {
    #[inline]
    fn inv(input: &[f32], output: &mut [f32], seed: &InverseSeed) {
        process_unary::<ScalarVector<f32>, _, _>(
            input,
            output,
            |v| recip_newton(v, seed),
            |x| recip_newton_scalar(x, seed),
        );
    }

    #[inline]
    fn inv_in_place(data: &mut [f32], seed: &InverseSeed) {
        process_unary_in_place::<ScalarVector<f32>, _, _>(
            data,
            |v| recip_newton(v, seed),
            |x| recip_newton_scalar(x, seed),
        );
    }

    fn name() -> &'static str {
        "scalar"
    }
}
