//! # Database Infrastructure
//!
//! Pooled relational storage for the pet registry, built on [sqlx](https://docs.rs/sqlx)'s
//! `Any` driver so a single handle serves both PostgreSQL and SQLite.
//!
//! ## Key Features
//! - **Engine Agnostic**: `postgres://`, `postgresql://` and `sqlite:` URLs.
//! - **Resilient Connectivity**: health checks retried with exponential backoff at startup.
//! - **Schema Bootstrap**: the `donos`/`pets` tables are created when missing.
//! - **Explicit Handle**: [`Database`] is a cheap clone passed to whoever needs storage;
//!   connections are acquired per statement or per transaction.
//!
//! ## Example
//!
//! ```rust
//! use petreg_database::{Database, DatabaseError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder().url("sqlite::memory:").init().await?;
//!
//!     let pets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pets").fetch_one(&*db).await?;
//!     assert_eq!(pets, 0);
//!
//!     Ok(())
//! }
//! ```

mod error;
mod schema;

pub use error::{DatabaseError, DatabaseErrorExt};
pub use schema::Backend;

use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

const HEALTH_CHECK_ATTEMPTS: u32 = 3;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Inner state of the [`Database`] wrapper.
#[derive(Debug)]
pub struct DatabaseInner {
    pool: AnyPool,
    backend: Backend,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        info!(backend = %self.backend, "Database pool handle dropped");
    }
}

/// Shared handle to the connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    /// Creates a new [`DatabaseBuilder`].
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    #[must_use]
    pub fn backend(&self) -> Backend {
        self.inner.backend
    }

    /// Closes every pooled connection and waits for checked-out ones to return.
    pub async fn close(&self) {
        self.inner.pool.close().await;
        info!(backend = %self.inner.backend, "Database pool closed");
    }
}

impl Deref for Database {
    type Target = AnyPool;

    fn deref(&self) -> &Self::Target {
        &self.inner.pool
    }
}

/// A fluent builder for configuring and establishing the connection pool.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct DatabaseBuilder {
    url: Option<String>,
    max_connections: u32,
    acquire_timeout: Duration,
    bootstrap: bool,
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            bootstrap: true,
        }
    }
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Upper bound of pooled connections. Ignored for in-memory SQLite, which is pinned to one.
    pub const fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// How long a request waits for a free connection before failing.
    pub const fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Whether to create the `donos`/`pets` tables when missing (default `true`).
    pub const fn bootstrap_schema(mut self, enabled: bool) -> Self {
        self.bootstrap = enabled;
        self
    }

    /// Consumes the builder and establishes the pool.
    ///
    /// # Process
    /// 1. **Validation**: a URL with a supported scheme is required.
    /// 2. **Pool**: a lazy pool is created; in-memory SQLite gets exactly one connection
    ///    that never expires, since the database lives only as long as its connection.
    /// 3. **Resilience**: `SELECT 1` is attempted up to three times, backing off from 500ms.
    /// 4. **Schema**: the tables are bootstrapped unless disabled.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] for a missing URL or unsupported scheme.
    /// * [`DatabaseError::Connection`] if the database stays unreachable.
    /// * [`DatabaseError::Schema`] if a bootstrap statement fails.
    #[instrument(skip(self), fields(max_connections = self.max_connections, bootstrap = self.bootstrap))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = self.url.filter(|url| !url.trim().is_empty()).ok_or(
            DatabaseError::Validation { message: "URL is required".into(), context: None },
        )?;
        let backend = Backend::from_url(&url)?;

        install_default_drivers();

        let options = AnyPoolOptions::new().acquire_timeout(self.acquire_timeout);
        let options = if is_in_memory(&url) {
            options.max_connections(1).min_connections(1).idle_timeout(None).max_lifetime(None)
        } else {
            options.max_connections(self.max_connections.max(1))
        };

        let pool = options.connect_lazy(&url).map_err(|e| DatabaseError::Validation {
            message: e.to_string().into(),
            context: Some("Parsing connection URL".into()),
        })?;

        let mut delay = Duration::from_millis(500);
        for attempt in 1..=HEALTH_CHECK_ATTEMPTS {
            match sqlx::query("SELECT 1").execute(&pool).await {
                Ok(_) => break,
                Err(e) if attempt == HEALTH_CHECK_ATTEMPTS => {
                    return Err(DatabaseError::Connection {
                        message: e.to_string().into(),
                        context: Some(format!("Unhealthy after {attempt} attempts").into()),
                    });
                }
                Err(e) => {
                    warn!(attempt, ?delay, error = %e, "Database not ready, retrying...");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
        info!(%backend, "Database connection established");

        if self.bootstrap {
            let applied = schema::bootstrap(&pool, backend).await?;
            info!(%backend, statements = applied, "Database schema bootstrapped");
        }

        Ok(Database { inner: Arc::new(DatabaseInner { pool, backend }) })
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
