//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// A missing or expired key is not an error: `get` reports both as
/// `Ok(None)` and `delete` is idempotent.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The storage backend rejected a read, write, or delete
    #[error("storage backend error: {0}")]
    Store(String),

    /// The cache could not rebuild its recency state at startup
    #[error("cache initialization failed: {0}")]
    Init(String),

    /// A persisted item could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
