//! Cache Module
//!
//! Provides LRU eviction, TTL expiration, and access statistics over a
//! pluggable storage backend.

mod engine;
mod item;
mod recency;
mod stats;


// Re-export public types
pub use engine::LruCache;
pub use item::{CacheItem, ItemMetadata};
pub use recency::RecencyList;
pub use stats::CacheStats;
