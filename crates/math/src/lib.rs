#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! recip-math: lane-generic Newton-Raphson reciprocal kernels
//!
//! This crate provides the numeric core of the `recip` workspace: a small SIMD
//! abstraction and the division-free reciprocal kernel written against it.
//!
//! # Features
//!
//! - **Trait-based SIMD abstraction**: the kernel is written once against `SimdVector`
//! - **Compile-time backend selection**: scalar (default) or AVX2 via cargo features
//! - **Bit-identical backends**: no fused multiply-add, so lanes match the scalar path
//! - **No allocations**: all operations are stack-based and reentrant
//!
//! # Quick Start
//!
//! ```rust
//! use recip_math::math::{recip_newton_scalar, InverseSeed};
//!
//! // Seed constants are computed once per call and shared by every element
//! let seed = InverseSeed::bucketed(16);
//! let r = recip_newton_scalar(4.0, &seed);
//! assert!((r - 0.25).abs() < 1e-6);
//! ```

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Fast math kernels
pub mod math;

// Public re-exports for convenience
pub use traits::{SimdInt, SimdMask, SimdVector};

// Re-export backend types
pub use backends::scalar::{ScalarInt, ScalarMask, ScalarVector};

// Only re-export AVX2 types when both feature is enabled AND we're targeting x86/x86_64
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::avx2::{Avx2Int, Avx2Mask, Avx2Vector};

/// Default SIMD vector type based on enabled feature
///
/// This type alias resolves to the appropriate SIMD backend selected at compile time:
/// - default: `ScalarVector<f32>` (1 lane)
/// - `avx2` feature: `Avx2Vector` (8 lanes, x86-64)
#[cfg(not(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64"))))]
pub type DefaultSimdVector = ScalarVector<f32>;

/// Default SIMD vector type (AVX2 backend for x86-64)
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub type DefaultSimdVector = Avx2Vector;
