//! Cache Item Module
//!
//! Defines the persisted envelope for individual cache items with TTL support.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Cache Item ==
/// A single cached value plus the metadata the cache engine keeps with it.
///
/// This is the envelope persisted to the storage backend, one per key.
/// The payload `data` is opaque to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheItem<T> {
    /// The cached value
    pub data: T,
    /// Creation timestamp, set once at insertion
    pub created_at: DateTime<Utc>,
    /// Refreshed on insertion and on every successful read
    pub last_accessed: DateTime<Utc>,
    /// Per-item TTL; None = never expires
    pub ttl: Option<Duration>,
    /// Number of successful reads, informational only
    pub access_count: u64,
}

impl<T> CacheItem<T> {
    // == Constructor ==
    /// Creates a new cache item with optional TTL.
    ///
    /// `created_at` and `last_accessed` are both set to now.
    pub fn new(data: T, ttl: Option<Duration>) -> Self {
        let now = Utc::now();
        Self {
            data,
            created_at: now,
            last_accessed: now,
            ttl,
            access_count: 0,
        }
    }

    // == Is Expired ==
    /// Checks if the item has outlived its TTL.
    ///
    /// An item is expired when it carries a TTL and the current time is
    /// strictly past `created_at + ttl`. Items without a TTL never expire.
    pub fn is_expired(&self) -> bool {
        is_past_deadline(self.created_at, self.ttl)
    }

    // == Touch ==
    /// Records a successful read: refreshes `last_accessed` and bumps
    /// `access_count`.
    pub fn touch(&mut self) {
        self.last_accessed = Utc::now();
        self.access_count += 1;
    }
}

// == Item Metadata ==
/// Envelope fields only, without the payload.
///
/// Initialization recovery and the expiration sweeper deserialize this
/// projection so they never need the payload type. Serde ignores the
/// `data` field in the stored document.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemMetadata {
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    #[serde(default)]
    pub ttl: Option<Duration>,
}

impl ItemMetadata {
    /// Checks if the described item has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        is_past_deadline(self.created_at, self.ttl)
    }
}

// == Utility Functions ==
/// True when `created_at + ttl` lies strictly in the past.
fn is_past_deadline(created_at: DateTime<Utc>, ttl: Option<Duration>) -> bool {
    match ttl {
        Some(ttl) => {
            let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
            match created_at.checked_add_signed(ttl) {
                Some(deadline) => Utc::now() > deadline,
                // Deadline past the representable range, treat as never expiring
                None => false,
            }
        }
        None => false,
    }
}
