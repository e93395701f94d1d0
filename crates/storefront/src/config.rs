//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults point at the public demo
//! catalog service.
//!
//! - `CATALOG_BASE_URL` - Catalog service base URL (default: <https://fakestoreapi.com>)
//! - `CATALOG_CACHE_TTL_SECS` - Catalog response cache TTL in seconds (default: 300)
//! - `CATALOG_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 10)

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_BASE_URL: &str = "https://fakestoreapi.com";
const DEFAULT_CACHE_TTL_SECS: &str = "300";
const DEFAULT_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog service base URL, without a trailing slash
    pub catalog_base_url: String,
    /// How long fetched catalog responses stay cached
    pub cache_ttl: Duration,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but does not parse (bad
    /// URL, non-numeric duration).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_base_url = normalize_base_url(
            "CATALOG_BASE_URL",
            &get_env_or_default("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL),
        )?;
        let cache_ttl = parse_secs(
            "CATALOG_CACHE_TTL_SECS",
            &get_env_or_default("CATALOG_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS),
        )?;
        let request_timeout = parse_secs(
            "CATALOG_TIMEOUT_SECS",
            &get_env_or_default("CATALOG_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        )?;

        Ok(Self {
            catalog_base_url,
            cache_ttl,
            request_timeout,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate a base URL and strip any trailing slash.
fn normalize_base_url(key: &str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported URL scheme '{}'", url.scheme()),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Parse a whole-seconds duration value.
fn parse_secs(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
