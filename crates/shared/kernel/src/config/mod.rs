use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`PETREG__DATABASE__URL` maps to `database.url`).
pub const ENV_PREFIX: &str = "PETREG";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_PATH: &str = "server";

#[petreg_derive::petreg_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering a file with environment overrides.
///
/// 1. **Base File**: `path` (default `server`); the extension may be omitted, in which case
///    `server.toml`, `server.yaml`, `server.json` and friends are probed. The file is required.
/// 2. **Environment Overrides**: variables prefixed with `PETREG__`, nested with `__`
///    (e.g. `PETREG__SERVER__PORT=8080`).
///
/// # Errors
/// * The file cannot be found or parsed.
/// * The merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use petreg_kernel::config::load_config;
/// use petreg_kernel::domain::config::ApiConfig;
///
/// let cfg: ApiConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn load_with<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from(DEFAULT_PATH), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), "Loading configuration");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
