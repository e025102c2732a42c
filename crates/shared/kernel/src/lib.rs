//! Kernel utilities shared across slices.
//!
//! * [`config::load_config`] layers a config file with `PETREG__*` environment overrides.
//! * `server` (default feature): the shared [`server::state::ApiState`], the `/health`
//!   endpoint and the JSON message/error bodies.
//!
//! ```rust,ignore
//! use petreg_kernel::config::load_config;
//! use petreg_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server"))?;
//! ```

pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use petreg_domain as domain;
