//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_INTERVAL_MS;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL and reaper tick period in milliseconds (always > 0)
    pub cache_interval_ms: u64,
    /// Whether responses are cached at all
    pub cache_enabled: bool,
    /// API root, without a trailing slash
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP transport, None = no timeout
    pub http_timeout_secs: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_MS` - Cache TTL / reaper tick (default: 5000, must be > 0)
    /// - `CACHE_ENABLED` - `false`, `0`, `no` or `off` disables caching (default: true)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout in seconds, 0 = none (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            cache_interval_ms: lookup("CACHE_INTERVAL_MS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.cache_interval_ms),
            cache_enabled: lookup("CACHE_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_enabled),
            base_url: lookup("POKEAPI_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            http_timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0),
        }
    }

    /// The cache interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    /// The transport timeout as a Duration, if any.
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: DEFAULT_INTERVAL_MS,
            cache_enabled: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout_secs: None,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
