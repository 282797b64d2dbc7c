//! SIMD backend implementations
//!
//! This module contains platform-specific SIMD implementations selected at compile time
//! via cargo features. The scalar backend is always compiled: wider backends use it for
//! the lanes left over at the end of a slice.

// Scalar backend (always available as fallback)
pub mod scalar;

// Platform-specific backends (feature-gated)
#[cfg(feature = "avx2")]
pub mod avx2;
