//! Team configuration
//!
//! Worker count and thread naming for [`RayonTeam`](crate::RayonTeam).
//! `RECIP_THREADS` overrides the worker count when read through
//! [`TeamConfig::from_env`].

use std::env;

use log::warn;

/// Environment variable holding the worker count
pub const THREADS_ENV: &str = "RECIP_THREADS";

/// Default prefix for worker thread names
pub const DEFAULT_THREAD_NAME_PREFIX: &str = "recip-worker";

/// Settings used to build a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamConfig {
    /// Worker count; `None` lets rayon pick (one per logical CPU)
    pub threads: Option<usize>,
    /// Worker threads are named `"{prefix}-{index}"`
    pub thread_name_prefix: String,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            threads: None,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_string(),
        }
    }
}

impl TeamConfig {
    /// Default configuration with the worker count taken from `RECIP_THREADS`
    pub fn from_env() -> Self {
        Self::default().with_env_threads(env::var(THREADS_ENV).ok().as_deref())
    }

    /// Set an explicit worker count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the worker thread name prefix
    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    fn with_env_threads(mut self, value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return self;
        };
        match raw.trim().parse::<usize>() {
            Ok(threads) if threads > 0 => self.threads = Some(threads),
            _ => warn!("ignoring {}={:?}: expected a positive integer", THREADS_ENV, raw),
        }
        self
    }
}
