//! Fast math kernels
//!
//! Vectorized kernels written against the `SimdVector` trait, so each one runs
//! unchanged on every backend (scalar, AVX2).
//!
//! # Modules
//!
//! - `inverse`: Division-free reciprocal (1/x) by Newton-Raphson iteration
//!
//! # Example
//!
//! ```rust
//! use recip_math::{DefaultSimdVector, SimdVector};
//! use recip_math::math::{recip_newton, InverseSeed};
//!
//! let seed = InverseSeed::normalized(4);
//! let x = DefaultSimdVector::splat(8.0);
//! let mut out = [0.0f32; 16];
//! recip_newton(x, &seed).to_slice(&mut out);
//! assert!((out[0] - 0.125).abs() < 1e-6);
//! ```

pub mod inverse;

pub use self::inverse::{recip_newton, recip_newton_scalar, InverseSeed, SeedMode};
