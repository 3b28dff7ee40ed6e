//! Configuration Module
//!
//! Handles cache configuration, optionally loaded from environment variables.

use std::env;
use std::time::Duration;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Hard cap on the number of tracked keys
    pub max_items: usize,
    /// Identifier for the backing store namespace, used in log events
    pub store_name: String,
    /// Default TTL applied when an item omits its own; None = items
    /// without an explicit TTL never expire
    pub default_ttl: Option<Duration>,
    /// Interval for the background expiration sweeper; when set,
    /// `LruCache::open_shared` starts the sweeper automatically, and
    /// None disables it. `LruCache::open` leaves spawning to the caller
    /// via `spawn_sweeper`.
    pub cleanup_interval: Option<Duration>,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_MAX_ITEMS` - Maximum tracked keys (default: 1000)
    /// - `LRU_STORE_NAME` - Backing store namespace (default: "cache")
    /// - `LRU_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: unset)
    /// - `LRU_CLEANUP_INTERVAL_MS` - Sweeper frequency in milliseconds (default: unset)
    pub fn from_env() -> Self {
        Self {
            max_items: env::var("LRU_MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            store_name: env::var("LRU_STORE_NAME").unwrap_or_else(|_| "cache".to_string()),
            default_ttl: env::var("LRU_DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis),
            cleanup_interval: env::var("LRU_CLEANUP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_items: 1000,
            store_name: "cache".to_string(),
            default_ttl: None,
            cleanup_interval: None,
        }
    }
}
