//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Price above which lookups are never cached.
pub const DEFAULT_PRICE_THRESHOLD: f64 = 1000.0;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Whether lookups and deletes go through the Product cache region
    pub cache_enabled: bool,
    /// Results priced above this value are not written to the cache
    pub price_threshold: f64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_ENABLED` - Enable the read-through cache (default: true)
    /// - `CACHE_PRICE_THRESHOLD` - Skip caching above this price (default: 1000)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_enabled: env::var("CACHE_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            price_threshold: env::var("CACHE_PRICE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_PRICE_THRESHOLD),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_enabled: true,
            price_threshold: DEFAULT_PRICE_THRESHOLD,
        }
    }
}
