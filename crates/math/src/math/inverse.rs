//! Division-free reciprocal (1/x) approximation
//!
//! Computes `1/x` lane by lane with a Newton-Raphson iteration on
//! `f(c) = 1/c - x`:
//!
//! ```text
//! c_{k+1} = c_k * (2 - x * c_k)
//! ```
//!
//! The iteration converges quadratically when the seed satisfies
//! `0 < c_0 < 2/|x|` and diverges otherwise, so the seed policy decides which
//! inputs an iteration budget can handle.
//!
//! # Seed modes
//!
//! - [`SeedMode::Bucketed`]: two-bucket seed whose magnitude is tied to the
//!   iteration count. With `max = iterations^3`, inputs above one start from
//!   `1/max` and all other inputs start from `max`. Converges for
//!   `1 < |x| < 2 * iterations^3` and for `|x| < 2 / iterations^3`; inputs in
//!   between diverge without any signal. `|x| == 1` is exact only for a single
//!   iteration.
//! - [`SeedMode::Normalized`]: linear minimax estimate on the normalized
//!   mantissa, `(48/17 - 32/17 * m) * 2^-(e+1)` with `|x| = m * 2^(e+1)` and
//!   `m` in `[0.5, 1)`. Seed error is at most 1/17 and squares every iteration:
//!
//! | Iterations | Max relative error |
//! |------------|--------------------|
//! | 1          | 3.5e-3             |
//! | 2          | 1.3e-5             |
//! | 3+         | f32 rounding       |
//!
//! # Special values
//!
//! Nothing is special-cased; every lane runs the same arithmetic.
//!
//! - `±0` seeds like a small input. Bucketed: the estimate doubles every
//!   iteration, is `+inf` on the step that overflows (the last step of a
//!   108-step budget) and NaN on every later step, since `0 * inf` is NaN.
//!   Normalized: `+inf` after two iterations and NaN from the third on.
//! - NaN stays NaN.
//! - Infinities produce infinities (bucketed) or NaN (normalized).

use crate::backends::scalar::ScalarVector;
use crate::traits::{SimdInt, SimdVector};

const EXPONENT_MASK: u32 = 0x7F80_0000;
const MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Exponent field of 0.5; OR-ed onto a mantissa it yields `m` in `[0.5, 1)`
const HALF_EXPONENT: u32 = 0x3F00_0000;

/// `253 << 23`: subtracting the input's exponent field gives `2^-(e+1)`
const SCALE_BIAS: u32 = 0x7E80_0000;

/// Above this magnitude `2^-(e+1)` is not a normal float and the seed is zero
const NORMALIZED_LIMIT: f32 = 8.507_059e37;

const SEED_OFFSET: f32 = 48.0 / 17.0;
const SEED_SLOPE: f32 = 32.0 / 17.0;

/// How the initial reciprocal estimate is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// `1/iterations^3` above one, `iterations^3` otherwise
    #[default]
    Bucketed,
    /// Linear estimate on the normalized mantissa
    Normalized,
}

/// Per-call constants of the reciprocal iteration
///
/// Built once per call and shared read-only by every lane and every worker.
/// It is plain data: no caching happens across calls.
///
/// # Example
///
/// ```rust
/// use recip_math::math::InverseSeed;
///
/// let seed = InverseSeed::bucketed(4);
/// assert_eq!(seed.max(), 64.0);
/// assert_eq!(seed.inv_max(), 1.0 / 64.0);
/// assert_eq!(seed.iterations(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSeed {
    mode: SeedMode,
    iterations: usize,
    max: f32,
    inv_max: f32,
}

impl InverseSeed {
    /// Compute the seed constants for `iterations` refinement steps
    pub fn new(mode: SeedMode, iterations: usize) -> Self {
        let it = iterations as u64;
        let max = it.saturating_mul(it).saturating_mul(it) as f32;
        Self {
            mode,
            iterations,
            max,
            inv_max: 1.0 / max,
        }
    }

    /// Seed constants for [`SeedMode::Bucketed`]
    pub fn bucketed(iterations: usize) -> Self {
        Self::new(SeedMode::Bucketed, iterations)
    }

    /// Seed constants for [`SeedMode::Normalized`]
    pub fn normalized(iterations: usize) -> Self {
        Self::new(SeedMode::Normalized, iterations)
    }

    /// The seed mode
    #[inline]
    pub fn mode(&self) -> SeedMode {
        self.mode
    }

    /// Number of Newton-Raphson refinement steps
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Seed used for inputs at or below one: `iterations^3`
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Seed used for inputs above one: `1 / iterations^3`
    #[inline]
    pub fn inv_max(&self) -> f32 {
        self.inv_max
    }
}

/// Vectorized reciprocal by Newton-Raphson iteration
///
/// Lanes are independent. Negative lanes are folded onto the positive axis
/// before seeding and the sign is restored on the result, so
/// `recip_newton(-x) == -recip_newton(x)` bit for bit. No fused multiply-add
/// is used, which keeps every backend bit-identical to the scalar one.
///
/// # Example
///
/// ```rust
/// use recip_math::{ScalarVector, SimdVector};
/// use recip_math::math::{recip_newton, InverseSeed};
///
/// let seed = InverseSeed::normalized(3);
/// let r = recip_newton(ScalarVector(-4.0f32), &seed);
/// assert!((r.0 + 0.25).abs() < 1e-6);
/// ```
#[inline(always)]
pub fn recip_newton<V: SimdVector<Scalar = f32>>(x: V, seed: &InverseSeed) -> V {
    let two = V::splat(2.0);

    let negate = x.lt(V::splat(0.0));
    let v = x.abs();

    let mut c = match seed.mode {
        SeedMode::Bucketed => V::select(
            v.gt(V::splat(1.0)),
            V::splat(seed.inv_max),
            V::splat(seed.max),
        ),
        SeedMode::Normalized => normalized_estimate(v),
    };

    for _ in 0..seed.iterations {
        c = c.mul(two.sub(v.mul(c)));
    }

    V::select(negate, c.neg(), c)
}

/// Single-value reciprocal, identical to one lane of [`recip_newton`]
#[inline]
pub fn recip_newton_scalar(x: f32, seed: &InverseSeed) -> f32 {
    recip_newton(ScalarVector(x), seed).0
}

/// Initial estimate for non-negative `v` from its exponent and mantissa fields
#[inline(always)]
fn normalized_estimate<V: SimdVector<Scalar = f32>>(v: V) -> V {
    let bits = v.to_bits();
    let scale = V::from_bits(bits.bitwise_and(EXPONENT_MASK).sub_from(SCALE_BIAS));
    let mantissa = V::from_bits(bits.bitwise_and(MANTISSA_MASK).bitwise_or(HALF_EXPONENT));

    let estimate = V::splat(SEED_OFFSET)
        .sub(V::splat(SEED_SLOPE).mul(mantissa))
        .mul(scale);

    // Exponents past 253 would wrap the subtraction into negative or NaN scales
    V::select(v.gt(V::splat(NORMALIZED_LIMIT)), V::splat(0.0), estimate)
}
