//! Bridging slice-based backends to vector-based kernels
//!
//! The helpers walk a slice in full SIMD vectors and hand the tail to a scalar
//! fallback, so a backend only has to name its vector type and kernel.

use recip_math::SimdVector;

/// Process a unary operation on slices using a SIMD vector kernel
///
/// Full vectors of `V::LANES` elements go through `kernel`; the remaining
/// `len % V::LANES` elements go through `scalar_fallback`. Only the common
/// prefix of `input` and `output` is processed.
///
/// # Example
///
/// ```rust
/// use recip_kernels::helpers::process_unary;
/// use recip_math::math::{recip_newton, recip_newton_scalar, InverseSeed};
/// use recip_math::ScalarVector;
///
/// let seed = InverseSeed::normalized(4);
/// let input = [2.0f32, 8.0, -0.5];
/// let mut output = [0.0f32; 3];
/// process_unary::<ScalarVector<f32>, _, _>(
///     &input,
///     &mut output,
///     |v| recip_newton(v, &seed),
///     |x| recip_newton_scalar(x, &seed),
/// );
/// assert!((output[2] + 2.0).abs() < 1e-6);
/// ```
#[inline]
pub fn process_unary<V, F, S>(input: &[f32], output: &mut [f32], kernel: F, scalar_fallback: S)
where
    V: SimdVector<Scalar = f32>,
    F: Fn(V) -> V,
    S: Fn(f32) -> f32,
{
    debug_assert_eq!(
        input.len(),
        output.len(),
        "Input and output slices must have the same length"
    );

    let lanes = V::LANES;
    let len = input.len().min(output.len());

    let chunks = len / lanes;

    for i in 0..chunks {
        let start = i * lanes;
        let end = start + lanes;

        let vec = V::from_slice(&input[start..end]);
        kernel(vec).to_slice(&mut output[start..end]);
    }

    let remainder_start = chunks * lanes;
    for (out, &x) in output[remainder_start..len]
        .iter_mut()
        .zip(&input[remainder_start..len])
    {
        *out = scalar_fallback(x);
    }
}

/// In-place variant of [`process_unary`]: each element is read before it is overwritten
#[inline]
pub fn process_unary_in_place<V, F, S>(data: &mut [f32], kernel: F, scalar_fallback: S)
where
    V: SimdVector<Scalar = f32>,
    F: Fn(V) -> V,
    S: Fn(f32) -> f32,
{
    let lanes = V::LANES;
    let chunks = data.len() / lanes;

    for i in 0..chunks {
        let start = i * lanes;
        let end = start + lanes;

        let vec = V::from_slice(&data[start..end]);
        kernel(vec).to_slice(&mut data[start..end]);
    }

    for x in &mut data[chunks * lanes..] {
        *x = scalar_fallback(*x);
    }
}
