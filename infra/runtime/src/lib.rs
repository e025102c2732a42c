//! # Runtime
//!
//! Named [Tokio](https://tokio.rs) runtime profiles for the pet registry binaries.
//!
//! * **Server**: every available core, larger stacks, long keep-alive for the HTTP server.
//! * **Default**: plain worker pool, used when no profile is named.
//!
//! The worker count honors `TOKIO_WORKER_THREADS` (1..=1024) before falling back to the
//! detected parallelism.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[petreg_runtime::main(server)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use petreg_derive::main;

use anyhow::Context;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const FALLBACK_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_THREAD_NAME: &str = "petreg-worker";

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

fn detected_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| (1..=MAX_WORKER_THREADS).contains(&n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(FALLBACK_WORKER_THREADS, std::num::NonZero::get)
            })
    })
}

/// Settings for a multi-threaded Tokio runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detected_worker_threads(),
            stack_size: 2 * 1024 * 1024,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeConfig {
    /// Profile for the HTTP server.
    #[must_use]
    pub fn server() -> Self {
        Self {
            stack_size: 4 * 1024 * 1024,
            thread_name: "petreg-http".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }

    fn normalized(&self) -> Self {
        self.clone()
            .with_worker_threads(self.worker_threads)
            .with_thread_name(self.thread_name.clone())
    }
}

/// Builds a multi-threaded runtime with I/O and timers enabled.
///
/// An out-of-range worker count is clamped and a blank thread name replaced.
///
/// # Errors
/// Returns an error if the OS refuses to create the runtime threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(config = ?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .context("Failed to initialize runtime")
}
