//! Storage Backend Trait
//!
//! Narrow async capability interface for the persistent key-value store.
//! The cache is storage-agnostic: any backend honoring per-key
//! get/set/delete/enumerate semantics with read-your-writes consistency
//! on a single logical thread can sit behind it.

use async_trait::async_trait;

use crate::error::Result;

// == Storage Backend ==
/// Async key-value store keyed by string, holding opaque serialized items.
///
/// `keys()` is used only at initialization and by the expiration sweeper,
/// so backends may implement it as a full scan.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Reads the item stored under `key`, or None if absent.
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any existing item.
    async fn set_item(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Removes the item stored under `key`. Removing an absent key is a no-op.
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Removes every item in the namespace.
    async fn clear(&self) -> Result<()>;

    /// Enumerates every key currently present, in no particular order.
    async fn keys(&self) -> Result<Vec<String>>;
}
