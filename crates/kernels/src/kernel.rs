//! Parallel reciprocal entry points
//!
//! A call computes its [`InverseSeed`] once, asks the team for a partition of
//! `[0, n)`, and submits one task per contiguous range. Each task runs the
//! compile-time [`DefaultBackend`] over its slice pair. The output is the same
//! bits whatever the parallelism degree or team.

use log::trace;
use recip_math::math::{InverseSeed, SeedMode};
use recip_team::Team;

use crate::backend::InverseBackend;
use crate::DefaultBackend;

/// Reciprocal kernel configuration
///
/// # Example
///
/// ```rust
/// use recip_kernels::InvKernel;
/// use recip_math::math::SeedMode;
/// use recip_team::SerialTeam;
///
/// let input = [4.0f32, 0.5, -2.0];
/// let mut output = [0.0f32; 3];
/// InvKernel::new(8)
///     .parallelism(2)
///     .seed_mode(SeedMode::Normalized)
///     .execute(&SerialTeam, &input, &mut output);
/// assert!((output[1] - 2.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvKernel {
    iterations: usize,
    parallelism: usize,
    seed_mode: SeedMode,
}

impl InvKernel {
    /// Kernel running `iterations` Newton-Raphson steps, one task, bucketed seed
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            parallelism: 1,
            seed_mode: SeedMode::default(),
        }
    }

    /// Split the work into at most `parallelism` tasks
    pub fn parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Choose how the initial estimate is formed
    pub fn seed_mode(mut self, seed_mode: SeedMode) -> Self {
        self.seed_mode = seed_mode;
        self
    }

    /// Seed constants a call with this configuration uses
    pub fn seed(&self) -> InverseSeed {
        InverseSeed::new(self.seed_mode, self.iterations)
    }

    /// Write `1/input[i]` to `output[i]` for every element, then return
    ///
    /// `input` and `output` must have the same length. This is only checked in
    /// debug builds; release builds process the common prefix.
    pub fn execute<T: Team>(&self, team: &T, input: &[f32], output: &mut [f32]) {
        self.check_contract(input.len(), output.len());

        let len = input.len().min(output.len());
        let seed = self.seed();
        let partition = team.partition(len, self.parallelism);
        trace!(
            "inv: n={}, tasks={}, iterations={}, seed={:?}, backend={}",
            len,
            partition.count(),
            self.iterations,
            self.seed_mode,
            DefaultBackend::name()
        );

        let chunk_len = partition.chunk_len();
        team.join_all(
            input[..len]
                .chunks(chunk_len)
                .zip(output[..len].chunks_mut(chunk_len))
                .map(move |(src, dst)| move || DefaultBackend::inv(src, dst, &seed)),
        );
    }

    /// Replace every element of `data` with its reciprocal
    pub fn execute_in_place<T: Team>(&self, team: &T, data: &mut [f32]) {
        self.check_contract(data.len(), data.len());

        let seed = self.seed();
        let partition = team.partition(data.len(), self.parallelism);
        trace!(
            "inv_in_place: n={}, tasks={}, iterations={}, seed={:?}, backend={}",
            data.len(),
            partition.count(),
            self.iterations,
            self.seed_mode,
            DefaultBackend::name()
        );

        team.join_all(
            data.chunks_mut(partition.chunk_len())
                .map(move |chunk| move || DefaultBackend::inv_in_place(chunk, &seed)),
        );
    }

    #[inline]
    fn check_contract(&self, input_len: usize, output_len: usize) {
        debug_assert_eq!(
            input_len, output_len,
            "Input and output slices must have the same length"
        );
        debug_assert!(self.iterations >= 1, "iterations must be at least 1");
        debug_assert!(self.parallelism >= 1, "parallelism must be at least 1");
    }
}

/// Approximate `output[i] = 1 / input[i]` with `iterations` Newton-Raphson steps
///
/// Work is split into at most `parallelism` contiguous ranges and run on
/// `team`; the call returns once every range is done. Uses the bucketed seed.
///
/// # Example
///
/// ```rust
/// use recip_team::SerialTeam;
///
/// let input = [4.0f32, -2.0, 10.0];
/// let mut output = [0.0f32; 3];
/// recip_kernels::inv(&input, &mut output, 2, 16, &SerialTeam);
/// assert!((output[0] - 0.25).abs() < 1e-6);
/// assert!((output[1] + 0.5).abs() < 1e-6);
/// ```
pub fn inv<T: Team>(
    input: &[f32],
    output: &mut [f32],
    parallelism: usize,
    iterations: usize,
    team: &T,
) {
    InvKernel::new(iterations)
        .parallelism(parallelism)
        .execute(team, input, output);
}

/// In-place form of [`inv`]
pub fn inv_in_place<T: Team>(data: &mut [f32], parallelism: usize, iterations: usize, team: &T) {
    InvKernel::new(iterations)
        .parallelism(parallelism)
        .execute_in_place(team, data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use recip_math::math::recip_newton_scalar;
    use recip_team::SerialTeam;

    #[test]
    fn test_builder_defaults() {
        let kernel = InvKernel::new(5);
        assert_eq!(kernel.seed(), InverseSeed::bucketed(5));
        assert_eq!(
            kernel.seed_mode(SeedMode::Normalized).seed(),
            InverseSeed::normalized(5)
        );
    }

    #[test]
    fn test_execute_matches_scalar_kernel() {
        let input: Vec<f32> = (1..=20).map(|i| i as f32 * 0.75).collect();
        let mut output = vec![0.0f32; input.len()];
        InvKernel::new(9)
            .parallelism(3)
            .execute(&SerialTeam, &input, &mut output);

        let seed = InverseSeed::bucketed(9);
        for (x, r) in input.iter().zip(&output) {
            assert_eq!(r.to_bits(), recip_newton_scalar(*x, &seed).to_bits());
        }
    }

    #[test]
    fn test_empty_input_submits_nothing() {
        let mut output: [f32; 0] = [];
        inv(&[], &mut output, 4, 8, &SerialTeam);
        inv_in_place(&mut output, 4, 8, &SerialTeam);
    }

    #[test]
    fn test_in_place_matches_out_of_place() {
        let input = [3.0f32, -7.5, 0.01, 1.0, 250.0];
        let mut output = [0.0f32; 5];
        inv(&input, &mut output, 2, 12, &SerialTeam);

        let mut data = input;
        inv_in_place(&mut data, 2, 12, &SerialTeam);
        assert_eq!(data.map(f32::to_bits), output.map(f32::to_bits));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Input and output slices must have the same length")]
    fn test_length_mismatch_panics_in_debug() {
        let mut output = [0.0f32; 2];
        inv(&[1.0, 2.0, 3.0], &mut output, 1, 4, &SerialTeam);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "iterations must be at least 1")]
    fn test_zero_iterations_panics_in_debug() {
        let mut output = [0.0f32; 1];
        inv(&[1.0], &mut output, 1, 0, &SerialTeam);
    }
}
