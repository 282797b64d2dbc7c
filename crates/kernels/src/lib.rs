#![warn(missing_docs)]
#![warn(clippy::all)]

//! recip-kernels: parallel elementwise vector reciprocal
//!
//! Computes `output[i] ≈ 1 / input[i]` over `f32` slices without a hardware
//! divide, splitting the slice into contiguous ranges that a
//! [`Team`](recip_team::Team) runs concurrently.
//!
//! # Architecture
//!
//! - `kernel`: [`inv`], [`inv_in_place`] and the [`InvKernel`] builder (primary API)
//! - `backend`: [`InverseBackend`] slice-level contract
//! - `helpers`: vector/remainder chunking shared by the backends
//! - `scalar`, `avx2`: backends, selected at compile time as [`DefaultBackend`]
//!
//! # Feature Flags
//!
//! - `parallel` (default): enable `recip_team::RayonTeam`
//! - `avx2`: 8-lane AVX2 backend (x86_64)
//!
//! # Example Usage
//!
//! ```rust
//! use recip_kernels::InvKernel;
//! use recip_math::math::SeedMode;
//! use recip_team::SerialTeam;
//!
//! let input = vec![3.0f32; 1000];
//! let mut output = vec![0.0f32; 1000];
//! InvKernel::new(4)
//!     .parallelism(8)
//!     .seed_mode(SeedMode::Normalized)
//!     .execute(&SerialTeam, &input, &mut output);
//! assert!((output[999] - 1.0 / 3.0).abs() < 1e-6);
//! ```

pub mod backend;
pub mod helpers;
mod kernel;
pub mod scalar;

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

pub use backend::InverseBackend;
pub use kernel::{inv, inv_in_place, InvKernel};
pub use scalar::ScalarBackend;

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use avx2::Avx2Backend;

/// Backend used by [`InvKernel`], selected at compile time
#[cfg(not(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64"))))]
pub type DefaultBackend = ScalarBackend;

/// Backend used by [`InvKernel`] (AVX2 backend for x86-64)
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub type DefaultBackend = Avx2Backend;
