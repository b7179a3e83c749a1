//! Runtime settings read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const HTTP_ADDR_VAR: &str = "WORKLOAD_CHART_HTTP_ADDR";
pub const SNAPSHOT_VAR: &str = "WORKLOAD_CHART_SNAPSHOT";
pub const LOG_VAR: &str = "WORKLOAD_CHART_LOG";

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: '{value}'")]
    InvalidAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    /// Snapshot loaded at start-up, if any.
    pub snapshot_path: Option<PathBuf>,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let addr = get(HTTP_ADDR_VAR).unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = addr.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            var: HTTP_ADDR_VAR,
            value: addr.clone(),
        })?;

        Ok(Self {
            http_addr,
            snapshot_path: get(SNAPSHOT_VAR).map(PathBuf::from),
            log_filter: get(LOG_VAR)
                .map(|v| v.trim().to_ascii_lowercase())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

/// Install the global `tracing` subscriber. `RUST_LOG` takes precedence over
/// `fallback_filter`.
#[cfg(any(feature = "cli", feature = "http_api"))]
pub fn init_tracing(fallback_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
