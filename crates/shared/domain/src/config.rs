use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the server.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Serves HTTPS when present.
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Relational database connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `postgres://`, `postgresql://` or `sqlite:` URL.
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Create the `donos`/`pets` tables at startup when missing.
    pub bootstrap_schema: bool,
}

/// Static assets served next to the page (e.g. `logo.png`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    pub console: bool,
    /// Directory for daily rolling log files.
    pub path: Option<PathBuf>,
    /// How often a new log file is started.
    pub rotation: LogRotation,
    /// Rotated files kept on disk.
    pub max_files: usize,
    /// JSON lines for file output.
    pub json: bool,
    /// Env-filter directives; `RUST_LOG` applies when unset.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://petreg.db?mode=rwc".to_owned(),
            max_connections: 10,
            acquire_timeout_secs: 5,
            bootstrap_schema: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { static_dir: PathBuf::from("public") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            path: None,
            rotation: LogRotation::Daily,
            max_files: 10,
            json: false,
            filter: None,
        }
    }
}
