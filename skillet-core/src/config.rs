//! API configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default backend base URL when neither environment variable is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// Default per-attempt request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Backend connection configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to each candidate request.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SKILLET_API_BASE`: backend base URL (preferred)
    /// - `SKILLET_BACKEND_URL`: backend base URL (legacy name)
    /// - `SKILLET_TIMEOUT_MS`: per-request timeout in ms (default: 15000)
    pub fn from_env() -> Self {
        let base_url = env::var("SKILLET_API_BASE")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| env::var("SKILLET_BACKEND_URL").ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_ms = env::var("SKILLET_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            base_url: normalize_base(&base_url),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Build a configuration for an explicit base URL, with the default timeout.
    pub fn with_base(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base(DEFAULT_API_BASE)
    }
}

/// Strip the trailing slash so candidate paths can be appended directly.
fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
