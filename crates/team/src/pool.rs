//! Rayon-backed team
//!
//! Tasks are spawned into a rayon scope and joined at the end of the scope.
//! The scope body runs on the calling thread, so the caller blocks until the
//! last task has finished.

use log::{debug, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::TeamConfig;
use crate::error::{Result, TeamError};
use crate::team::Team;

/// Team that runs tasks on a rayon thread pool
///
/// Either owns a dedicated pool built from a [`TeamConfig`] or borrows rayon's
/// global pool.
///
/// # Example
///
/// ```rust
/// use recip_team::{RayonTeam, Team, TeamConfig};
///
/// let team = RayonTeam::new(&TeamConfig::default().with_threads(2)).unwrap();
/// assert_eq!(team.workers(), 2);
/// ```
#[derive(Debug)]
pub struct RayonTeam {
    pool: Option<ThreadPool>,
}

impl RayonTeam {
    /// Build a dedicated pool
    pub fn new(config: &TeamConfig) -> Result<Self> {
        let mut builder = ThreadPoolBuilder::new();
        if let Some(threads) = config.threads {
            if threads == 0 {
                return Err(TeamError::InvalidThreadCount(threads));
            }
            builder = builder.num_threads(threads);
        }

        let prefix = config.thread_name_prefix.clone();
        let pool = builder
            .thread_name(move |index| format!("{}-{}", prefix, index))
            .build()?;

        debug!(
            "built rayon team with {} workers ({}-*)",
            pool.current_num_threads(),
            config.thread_name_prefix
        );
        Ok(Self { pool: Some(pool) })
    }

    /// Build a dedicated pool sized by `RECIP_THREADS`
    pub fn from_env() -> Result<Self> {
        Self::new(&TeamConfig::from_env())
    }

    /// Use rayon's global pool
    pub fn global() -> Self {
        Self { pool: None }
    }
}

impl Team for RayonTeam {
    fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn join_all<I>(&self, tasks: I)
    where
        I: IntoIterator,
        I::Item: FnOnce() + Send,
    {
        trace!("dispatching tasks to {} workers", self.workers());
        match &self.pool {
            Some(pool) => pool.in_place_scope(|scope| {
                for task in tasks {
                    scope.spawn(move |_| task());
                }
            }),
            None => rayon::in_place_scope(|scope| {
                for task in tasks {
                    scope.spawn(move |_| task());
                }
            }),
        }
    }
}
