//! Response DTOs for the product service API
//!
//! Defines the structure of outgoing HTTP response bodies. Products themselves
//! are serialized directly.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the cache stats endpoint (GET /product/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Cache region name
    pub region: String,
    /// Whether lookups go through the cache at all
    pub enabled: bool,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed by deletes
    pub evictions: u64,
    /// Number of lookups whose result was not cached
    pub skipped: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(region: impl Into<String>, enabled: bool, stats: &CacheStats) -> Self {
        Self {
            region: region.into(),
            enabled,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            skipped: stats.skipped,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            skipped: 3,
            total_entries: 10,
        };
        let resp = StatsResponse::new("Product", true, &stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.skipped, 3);
        assert_eq!(resp.region, "Product");
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new("Product", false, &CacheStats::new());
        assert_eq!(resp.hit_rate, 0.0);
        assert!(!resp.enabled);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
