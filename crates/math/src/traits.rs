//! Lane abstraction the reciprocal kernel is written against
//!
//! A backend supplies a float vector, a comparison mask and a raw-bits view of
//! the same lanes. The operation set is exactly what `math::inverse` needs.
//!
//! Arithmetic is plain IEEE 754 single precision. `mul` followed by `sub` must
//! never be contracted into a fused instruction: every backend has to produce
//! the bits the scalar backend produces.

/// Float lanes
///
/// # Example
///
/// ```rust
/// use recip_math::{DefaultSimdVector, SimdVector};
///
/// let x = DefaultSimdVector::splat(3.0);
/// let y = x.mul(DefaultSimdVector::splat(2.0)).sub(x);
/// let mut out = [0.0f32; 16];
/// y.to_slice(&mut out);
/// assert_eq!(out[0], 3.0);
/// ```
pub trait SimdVector: Copy {
    /// Element type
    type Scalar: Copy;

    /// Result of a lane comparison
    type Mask: SimdMask;

    /// Same lanes reinterpreted as `u32` bit patterns
    type IntBits: SimdInt;

    /// Lanes per vector
    const LANES: usize;

    /// Same value in every lane
    fn splat(value: Self::Scalar) -> Self;

    /// Load the first `LANES` elements
    ///
    /// # Panics
    ///
    /// If `slice` is shorter than `LANES`.
    fn from_slice(slice: &[Self::Scalar]) -> Self;

    /// Store into the first `LANES` elements
    ///
    /// # Panics
    ///
    /// If `slice` is shorter than `LANES`.
    fn to_slice(self, slice: &mut [Self::Scalar]);

    /// `self - rhs`
    fn sub(self, rhs: Self) -> Self;

    /// `self * rhs`
    fn mul(self, rhs: Self) -> Self;

    /// Flip the sign bit: `neg(0.0)` is `-0.0`
    fn neg(self) -> Self;

    /// Clear the sign bit
    fn abs(self) -> Self;

    /// Lanes where `self < rhs`; false for NaN
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Lanes where `self > rhs`; false for NaN
    fn gt(self, rhs: Self) -> Self::Mask;

    /// `if_true` where `mask` is set, `if_false` elsewhere
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Raw bits of every lane
    ///
    /// ```rust
    /// use recip_math::{ScalarVector, SimdVector};
    /// assert_eq!(ScalarVector(1.0f32).to_bits().0, 0x3F80_0000);
    /// ```
    fn to_bits(self) -> Self::IntBits;

    /// Float lanes from raw bits
    fn from_bits(bits: Self::IntBits) -> Self;
}

/// `u32` lanes used to take floats apart into exponent and mantissa fields
///
/// Arithmetic wraps.
pub trait SimdInt: Copy {
    /// `self & rhs` in every lane
    fn bitwise_and(self, rhs: u32) -> Self;

    /// `self | rhs` in every lane
    fn bitwise_or(self, rhs: u32) -> Self;

    /// `minuend - self` in every lane
    fn sub_from(self, minuend: u32) -> Self;
}

/// Per-lane condition produced by comparisons and consumed by `select`
pub trait SimdMask: Copy {}
