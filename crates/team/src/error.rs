//! Error types for team construction.

use thiserror::Error;

/// Errors that can occur while building a team.
#[derive(Debug, Error)]
pub enum TeamError {
    /// A team needs at least one worker.
    #[error("Invalid thread count: {0} (must be at least 1)")]
    InvalidThreadCount(usize),

    /// The rayon thread pool could not be created.
    #[cfg(feature = "parallel")]
    #[error("Thread pool build error: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for team operations.
pub type Result<T> = std::result::Result<T, TeamError>;
