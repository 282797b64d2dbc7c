//! # recip-team
//!
//! Execution teams for partitioned, embarrassingly parallel work.
//!
//! A kernel splits its index space with [`Team::partition`], turns every range
//! into an independent task, and hands the batch to [`Team::join_all`], which
//! returns once every task has finished. The kernel never learns how the team
//! schedules them.
//!
//! - [`Team`] - capability trait (partition, run, join)
//! - [`SerialTeam`] - team of one, runs on the calling thread
//! - [`RayonTeam`] - rayon thread pool (feature `parallel`, on by default)
//! - [`TeamConfig`] - worker count and thread naming, `RECIP_THREADS` override
//!
//! # Example
//!
//! ```ignore
//! use recip_team::{RayonTeam, Team, TeamConfig};
//!
//! let team = RayonTeam::new(&TeamConfig::from_env())?;
//! let partition = team.partition(data.len(), team.workers());
//! team.join_all(data.chunks_mut(partition.chunk_len()).map(|chunk| move || work(chunk)));
//! ```

mod config;
mod error;
mod partition;
#[cfg(feature = "parallel")]
mod pool;
mod team;

// Re-export all public types
pub use config::{TeamConfig, DEFAULT_THREAD_NAME_PREFIX, THREADS_ENV};
pub use error::{Result, TeamError};
pub use partition::Partition;
#[cfg(feature = "parallel")]
pub use pool::RayonTeam;
pub use team::{SerialTeam, Team};
