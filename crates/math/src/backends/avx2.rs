//! Eight-lane x86 backend
//!
//! Built only with the `avx2` feature, and the feature is a promise that the
//! target CPU has AVX2: there is no runtime detection.

#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use crate::traits::{SimdInt, SimdMask, SimdVector};

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

const SIGN_BIT: i32 = i32::MIN;

/// Eight f32 lanes in a `__m256`
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Vector(__m256);

/// All-ones or all-zeros per lane, as produced by `_mm256_cmp_ps`
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Mask(__m256);

/// Eight u32 bit patterns in a `__m256i`
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Int(__m256i);

impl SimdVector for Avx2Vector {
    type Scalar = f32;
    type Mask = Avx2Mask;
    type IntBits = Avx2Int;

    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        unsafe { Avx2Vector(_mm256_set1_ps(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        let lanes = &slice[..Self::LANES];
        unsafe { Avx2Vector(_mm256_loadu_ps(lanes.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f32]) {
        let lanes = &mut slice[..Self::LANES];
        unsafe { _mm256_storeu_ps(lanes.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        // 0.0 - x would turn +0.0 into +0.0 instead of -0.0
        unsafe { Avx2Vector(_mm256_xor_ps(self.0, _mm256_castsi256_ps(_mm256_set1_epi32(SIGN_BIT)))) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { Avx2Vector(_mm256_andnot_ps(_mm256_castsi256_ps(_mm256_set1_epi32(SIGN_BIT)), self.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Avx2Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Avx2Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Avx2Mask, if_true: Self, if_false: Self) -> Self {
        unsafe { Avx2Vector(_mm256_blendv_ps(if_false.0, if_true.0, mask.0)) }
    }

    #[inline(always)]
    fn to_bits(self) -> Avx2Int {
        unsafe { Avx2Int(_mm256_castps_si256(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Avx2Int) -> Self {
        unsafe { Avx2Vector(_mm256_castsi256_ps(bits.0)) }
    }
}

impl SimdInt for Avx2Int {
    #[inline(always)]
    fn bitwise_and(self, rhs: u32) -> Self {
        unsafe { Avx2Int(_mm256_and_si256(self.0, _mm256_set1_epi32(rhs as i32))) }
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: u32) -> Self {
        unsafe { Avx2Int(_mm256_or_si256(self.0, _mm256_set1_epi32(rhs as i32))) }
    }

    #[inline(always)]
    fn sub_from(self, minuend: u32) -> Self {
        unsafe { Avx2Int(_mm256_sub_epi32(_mm256_set1_epi32(minuend as i32), self.0)) }
    }
}

impl SimdMask for Avx2Mask {}
