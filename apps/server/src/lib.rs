//! # Pet Registry Server
//!
//! HTTP server of the pet registry built on `Axum` and `sqlx`: the registration page, the
//! pets JSON API, `/health` and the `OpenAPI` documentation at `/docs`.
//!
//! ## Example
//! ```no_run
//! use petreg_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(3000)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use petreg::domain::config::{ApiConfig, LogRotation, LoggingConfig};
use petreg::kernel::server::state::ApiState;
use petreg_database::Database;
use petreg_logger::{LevelFilter, Logger, Rotation};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Installs the global logger described by the `logging` config section.
///
/// # Errors
/// Returns an error for an unknown level, invalid filter directives or an unusable log path.
pub fn init_logging(cfg: &LoggingConfig) -> Result<Logger> {
    let level = cfg
        .level
        .parse::<LevelFilter>()
        .map_err(|e| anyhow!("Invalid log level '{}': {e}", cfg.level))?;

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).console(cfg.console);
    let builder = match &cfg.filter {
        Some(directives) => builder.filter(directives.as_str()),
        None => builder,
    };

    let logger = match &cfg.path {
        Some(path) => builder
            .path(path)
            .rotation(rotation(cfg.rotation))
            .max_files(cfg.max_files)
            .json(cfg.json)
            .init(),
        None => builder.init(),
    };

    logger.context("Failed to initialize logging")
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
    database: Option<Database>,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Uses an already connected database instead of the `database` config section.
    pub fn database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    async fn init_database(&self) -> Result<Database> {
        let db_cfg = &self.cfg.database;

        Database::builder()
            .url(&db_cfg.url)
            .max_connections(db_cfg.max_connections)
            .acquire_timeout(Duration::from_secs(db_cfg.acquire_timeout_secs))
            .bootstrap_schema(db_cfg.bootstrap_schema)
            .init()
            .await
            .context("Failed to establish database connection")
    }

    fn validate_ssl_config(&self) -> Result<()> {
        if let Some(ssl) = &self.cfg.server.ssl {
            if !ssl.cert.exists() {
                anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
            }
            if !ssl.key.exists() {
                anyhow::bail!("SSL key not found at: {}", ssl.key.display());
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let metadata = ssl.key.metadata()?;
                if metadata.permissions().mode() & 0o077 != 0 {
                    tracing::warn!(
                        "SECURITY: SSL Private Key {} has insecure permissions (should be 600)",
                        ssl.key.display()
                    );
                }
            }
        }
        Ok(())
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Validates the TLS files when `server.ssl` is set
    /// 2. Connects the database (health check and schema bootstrap)
    /// 3. Builds the enabled feature slices
    /// 4. Constructs the application state
    ///
    /// # Errors
    /// Returns an error if:
    /// * The SSL certificate or key is missing
    /// * The database URL is invalid or the database stays unreachable
    pub async fn build(mut self) -> Result<Server> {
        self.validate_ssl_config()?;

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, "Initializing server");

        let db = match self.database.take() {
            Some(db) => db,
            None => self.init_database().await?,
        };

        let slices = petreg::init(&db);
        info!(slices = slices.len(), features = ?petreg::features::ENABLED, "Feature slices ready");

        let state = ApiState::builder()
            .config(self.cfg)
            .db(db)
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state registry")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application router, without binding a socket.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address
    /// or if SSL/TLS setup fails.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config().clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        info!(address = %address, ssl = cfg.server.ssl.is_some(), "Starting server");

        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        if let Some(ssl_config) = &cfg.server.ssl {
            info!("Starting HTTPS server on https://{address}");

            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                &ssl_config.cert,
                &ssl_config.key,
            )
            .await
            .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        } else {
            info!("Starting HTTP server on http://{address}");

            axum_server::bind(address)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }

        self.state.database().close().await;
        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
