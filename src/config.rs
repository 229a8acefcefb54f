//! Environment-variable configuration for the NetOrca client.

use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Default API version when `API_VERSION` is not set.
const DEFAULT_API_VERSION: &str = "v1";
/// Default request timeout in seconds when `REQUEST_TIMEOUT` is not set.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `REQUEST_TIMEOUT` was set but is not a non-negative integer.
    #[error("REQUEST_TIMEOUT must be a non-negative integer, got {0:?}")]
    InvalidTimeout(String),
}

/// Configuration for the NetOrca client, read from the environment.
///
/// Whether a load failure aborts the process is the caller's policy; the
/// loader itself only returns the error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API (`API_URL`).
    pub base_url: String,
    /// API key used for authentication (`API_KEY`).
    pub api_key: String,
    /// API version segment (`API_VERSION`, default `v1`).
    pub api_version: String,
    /// Per-call request timeout (`REQUEST_TIMEOUT` seconds, default 5).
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `API_URL` and `API_KEY` are read as-is; empty values are caught later
    /// by [`crate::Client::new`]. Missing `API_VERSION` or `REQUEST_TIMEOUT`
    /// fall back to defaults with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if `REQUEST_TIMEOUT` is set
    /// but does not parse as a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_version = match env::var("API_VERSION") {
            Ok(v) if !v.is_empty() => v,
            _ => DEFAULT_API_VERSION.to_string(),
        };

        let timeout_secs = match env::var("REQUEST_TIMEOUT") {
            Ok(v) if !v.is_empty() => v
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(v))?,
            _ => {
                warn!(
                    "REQUEST_TIMEOUT not set, using default value of {} seconds",
                    DEFAULT_REQUEST_TIMEOUT_SECS
                );
                DEFAULT_REQUEST_TIMEOUT_SECS
            }
        };

        Ok(Self {
            base_url: env::var("API_URL").unwrap_or_default(),
            api_key: env::var("API_KEY").unwrap_or_default(),
            api_version,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
