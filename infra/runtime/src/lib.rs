//! # Runtime
//!
//! Tokio runtime profiles for the site engine.
//!
//! The catalog and lead flows are written for a cooperative, single-threaded event loop: every
//! suspension point is an `await` on a fetch, and state is mutated synchronously once the
//! awaited result resolves. [`RuntimeConfig::event_loop`] reproduces that model on a
//! current-thread runtime. [`RuntimeConfig::background`] is a multi-thread profile for tooling
//! that renders or probes many pages at once.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[df_runtime::main(event_loop)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use df_derive::main;

use anyhow::anyhow;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Fallback when the available parallelism cannot be detected.
const DEFAULT_WORKER_THREADS: usize = 4;
/// Upper bound for worker threads of the background profile.
const MAX_WORKER_THREADS: usize = 256;
const DEFAULT_THREAD_NAME: &str = "df-worker";
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(30);

/// Scheduler flavor backing a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Everything runs on the thread that calls `block_on`.
    CurrentThread,
    /// Work-stealing scheduler with the given number of workers.
    MultiThread { workers: usize },
}

/// Configuration for a Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub flavor: Flavor,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::event_loop()
    }
}

impl RuntimeConfig {
    /// Single-threaded cooperative event loop.
    #[must_use]
    pub fn event_loop() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    /// Multi-thread profile sized to the machine.
    #[must_use]
    pub fn background() -> Self {
        let workers =
            available_parallelism().map_or(DEFAULT_WORKER_THREADS, std::num::NonZero::get);
        Self {
            flavor: Flavor::MultiThread { workers },
            thread_name: "df-background".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    /// Overrides the worker count. Ignored by the event loop profile.
    #[must_use = "Customize the number of worker threads for the runtime"]
    pub const fn with_worker_threads(mut self, threads: usize) -> Self {
        if let Flavor::MultiThread { .. } = self.flavor {
            let workers = if threads == 0 {
                1
            } else if threads > MAX_WORKER_THREADS {
                MAX_WORKER_THREADS
            } else {
                threads
            };
            self.flavor = Flavor::MultiThread { workers };
        }
        self
    }

    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name =
            if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }
}

/// Builds a runtime for the given profile with timers and I/O enabled.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] when Tokio cannot create the runtime, typically because the
/// OS refuses to spawn threads.
pub fn build_runtime(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(?config, "Building tokio runtime");

    let mut builder = match config.flavor {
        Flavor::CurrentThread => Builder::new_current_thread(),
        Flavor::MultiThread { workers } => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(workers.clamp(1, MAX_WORKER_THREADS));
            builder
        },
    };

    builder
        .thread_name(&config.thread_name)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_the_event_loop() {
        assert_eq!(RuntimeConfig::default().flavor, Flavor::CurrentThread);
    }

    #[test]
    fn test_worker_threads_are_clamped() {
        let config = RuntimeConfig::background().with_worker_threads(0);
        assert_eq!(config.flavor, Flavor::MultiThread { workers: 1 });

        let config = RuntimeConfig::background().with_worker_threads(10_000);
        assert_eq!(config.flavor, Flavor::MultiThread { workers: MAX_WORKER_THREADS });
    }

    #[test]
    fn test_event_loop_ignores_worker_override() {
        let config = RuntimeConfig::event_loop().with_worker_threads(8);
        assert_eq!(config.flavor, Flavor::CurrentThread);
    }

    #[test]
    fn test_blank_thread_name_falls_back() {
        let config = RuntimeConfig::event_loop().with_thread_name("   ");
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn test_event_loop_runtime_runs_timers() -> Result<()> {
        let runtime = build_runtime(&RuntimeConfig::event_loop())?;
        let value = runtime.block_on(async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            7
        });
        assert_eq!(value, 7);
        Ok(())
    }
}
