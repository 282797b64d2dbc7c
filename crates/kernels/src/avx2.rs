//! AVX2 Backend Implementation
//!
//! Processes 8 f32 values per iteration with 256-bit registers and falls back
//! to the scalar kernel for the `len % 8` tail.
//!
//! # Requirements
//! - x86_64 architecture
//! - AVX2 CPU support (Intel Haswell 2013+, AMD Excavator 2015+)
//! - Compiled with `avx2` feature flag
//!
//! No runtime CPU detection is performed.

#![cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]

use recip_math::math::{recip_newton, recip_newton_scalar, InverseSeed};
use recip_math::Avx2Vector;

use crate::backend::InverseBackend;
use crate::helpers::{process_unary, process_unary_in_place};

/// AVX2 Backend (256-bit SIMD)
///
/// Zero-sized type; bit-identical to [`ScalarBackend`](crate::ScalarBackend).
#[derive(Copy, Clone, Debug, Default)]
pub struct Avx2Backend;

impl InverseBackend for Avx2Backend {
    #[inline]
    fn inv(input: &[f32], output: &mut [f32], seed: &InverseSeed) {
        process_unary::<Avx2Vector, _, _>(
            input,
            output,
            |v| recip_newton(v, seed),
            |x| recip_newton_scalar(x, seed),
        );
    }

    #[inline]
    fn inv_in_place(data: &mut [f32], seed: &InverseSeed) {
        process_unary_in_place::<Avx2Vector, _, _>(
            data,
            |v| recip_newton(v, seed),
            |x| recip_newton_scalar(x, seed),
        );
    }

    fn name() -> &'static str {
        "avx2"
    }
}
