//! Reciprocal backend trait
//!
//! Every backend implements the same slice-level contract; only the lane width
//! differs. Because the underlying kernel avoids fused multiply-add, all
//! backends produce bit-identical output for the same seed.

use recip_math::math::InverseSeed;

/// Slice-level reciprocal backend
///
/// Backends are zero-sized marker types selected at compile time.
///
/// # Contract Requirements
///
/// 1. **Bit equivalence**: every backend produces the same bits as [`ScalarBackend`](crate::ScalarBackend)
/// 2. **No allocation**: work happens in registers and the caller's buffers
/// 3. **Prefix semantics**: with slices of different length only the common prefix is written
/// 4. **No special-casing**: NaN, infinities and zeros run through the same arithmetic
pub trait InverseBackend: Copy {
    /// Write the reciprocal of every `input` element to `output`
    fn inv(input: &[f32], output: &mut [f32], seed: &InverseSeed);

    /// Replace every element of `data` with its reciprocal
    fn inv_in_place(data: &mut [f32], seed: &InverseSeed);

    /// Backend name for logging
    fn name() -> &'static str;
}
