//! One-lane backend
//!
//! Available everywhere. It also finishes the tail of every wider backend, so
//! its arithmetic is the reference the other backends are checked against.

use crate::traits::{SimdInt, SimdMask, SimdVector};

/// A single float treated as a one-lane vector
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarVector<T>(pub T);

/// Outcome of a one-lane comparison
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScalarMask(pub bool);

/// Bit pattern of a one-lane float
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScalarInt(pub u32);

impl SimdVector for ScalarVector<f32> {
    type Scalar = f32;
    type Mask = ScalarMask;
    type IntBits = ScalarInt;

    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f32]) {
        slice[0] = self.0;
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0 - rhs.0)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarVector(self.0 * rhs.0)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        ScalarVector(-self.0)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        ScalarVector(libm::fabsf(self.0))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 < rhs.0)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 > rhs.0)
    }

    #[inline(always)]
    fn select(mask: ScalarMask, if_true: Self, if_false: Self) -> Self {
        if mask.0 {
            if_true
        } else {
            if_false
        }
    }

    #[inline(always)]
    fn to_bits(self) -> ScalarInt {
        ScalarInt(self.0.to_bits())
    }

    #[inline(always)]
    fn from_bits(bits: ScalarInt) -> Self {
        ScalarVector(f32::from_bits(bits.0))
    }
}

impl SimdInt for ScalarInt {
    #[inline(always)]
    fn bitwise_and(self, rhs: u32) -> Self {
        ScalarInt(self.0 & rhs)
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: u32) -> Self {
        ScalarInt(self.0 | rhs)
    }

    #[inline(always)]
    fn sub_from(self, minuend: u32) -> Self {
        ScalarInt(minuend.wrapping_sub(self.0))
    }
}

impl SimdMask for ScalarMask {}
