//! Team trait and the single-worker team
//!
//! A team is anything that can take a batch of independent tasks, run every
//! one of them to completion, and only then return. It decides how `[0, n)`
//! is split (contiguous by default) but never what a task does.

use crate::partition::Partition;

/// Execution context that runs partitioned work and joins it
///
/// Implementations must run every submitted task exactly once and must not
/// return from [`join_all`](Team::join_all) before all of them finished.
/// Tasks share no mutable state, so they may run in any order or concurrently.
///
/// # Example
///
/// ```rust
/// use recip_team::{SerialTeam, Team};
///
/// let mut data = vec![1u32; 10];
/// let partition = SerialTeam.partition(data.len(), 3);
/// SerialTeam.join_all(
///     data.chunks_mut(partition.chunk_len())
///         .map(|chunk| move || chunk.iter_mut().for_each(|x| *x *= 2)),
/// );
/// assert!(data.iter().all(|&x| x == 2));
/// ```
pub trait Team: Sync {
    /// Number of workers that can run tasks concurrently
    fn workers(&self) -> usize;

    /// Split `[0, len)` into at most `parts` contiguous ranges
    fn partition(&self, len: usize, parts: usize) -> Partition {
        Partition::contiguous(len, parts)
    }

    /// Run every task to completion, returning only when all have finished
    fn join_all<I>(&self, tasks: I)
    where
        I: IntoIterator,
        I::Item: FnOnce() + Send;
}

impl<T: Team + ?Sized> Team for &T {
    fn workers(&self) -> usize {
        (**self).workers()
    }

    fn partition(&self, len: usize, parts: usize) -> Partition {
        (**self).partition(len, parts)
    }

    fn join_all<I>(&self, tasks: I)
    where
        I: IntoIterator,
        I::Item: FnOnce() + Send,
    {
        (**self).join_all(tasks)
    }
}

/// Team of one: runs tasks on the calling thread in submission order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerialTeam;

impl Team for SerialTeam {
    fn workers(&self) -> usize {
        1
    }

    fn join_all<I>(&self, tasks: I)
    where
        I: IntoIterator,
        I::Item: FnOnce() + Send,
    {
        for task in tasks {
            task();
        }
    }
}
