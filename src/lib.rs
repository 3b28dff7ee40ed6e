//! LRU Store - A generic LRU cache over an async key-value store
//!
//! Provides least-recently-used eviction, per-item TTL expiration, and
//! access statistics on top of any pluggable [`StorageBackend`].

pub mod cache;
pub mod config;
pub mod error;
pub mod store;
pub mod tasks;

pub use cache::{CacheItem, CacheStats, LruCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use store::{MemoryBackend, StorageBackend};
pub use tasks::spawn_sweeper;
