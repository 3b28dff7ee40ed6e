//! Cache Engine Module
//!
//! Main cache engine combining a storage backend with recency tracking,
//! TTL expiration, and LRU eviction.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheItem, CacheStats, ItemMetadata, RecencyList};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::store::StorageBackend;
use crate::tasks::spawn_sweeper;

// == LRU Cache ==
/// LRU cache with TTL support over an async key-value backend.
///
/// Values are persisted in the backend as serialized [`CacheItem`]
/// envelopes; only the recency order and statistics live in memory.
/// All operations are async; share the cache across tasks behind an
/// `Arc<tokio::sync::RwLock<...>>`.
///
/// Operations on different keys may interleave their backend I/O when
/// callers overlap them; operations racing on the same key are not
/// serialized here and resolve last-write-wins in the backend.
pub struct LruCache<T> {
    /// Persistent key-value storage
    backend: Arc<dyn StorageBackend>,
    /// In-memory MRU -> LRU key ordering
    recency: RecencyList,
    /// Performance counters
    stats: CacheStats,
    /// Hard cap on tracked key count
    max_items: usize,
    /// TTL applied when an item omits its own
    default_ttl: Option<Duration>,
    /// Backing namespace identifier, used in log events
    store_name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for LruCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruCache")
            .field("store_name", &self.store_name)
            .field("max_items", &self.max_items)
            .field("default_ttl", &self.default_ttl)
            .field("recency", &self.recency)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<T> LruCache<T> {
    // == Constructor ==
    /// Opens a cache over an existing backend, rebuilding recency order
    /// from what the backend already holds.
    ///
    /// Every stored key is read back for its `last_accessed` timestamp and
    /// the list is rebuilt oldest-first, so historical recency survives a
    /// restart without the backend exposing ordering natively. Items that
    /// fail to decode sort as oldest. This is O(n) in stored items; the
    /// cache is not usable until it completes.
    ///
    /// A backend failure here is fatal and reported as [`CacheError::Init`].
    pub async fn open(config: CacheConfig, backend: Arc<dyn StorageBackend>) -> Result<Self> {
        let keys = backend
            .keys()
            .await
            .map_err(|e| CacheError::Init(format!("key enumeration failed: {e}")))?;

        let mut order: Vec<(String, chrono::DateTime<chrono::Utc>)> =
            Vec::with_capacity(keys.len());
        for key in keys {
            let raw = backend
                .get_item(&key)
                .await
                .map_err(|e| CacheError::Init(format!("readback of '{key}' failed: {e}")))?;
            let last_accessed = raw
                .and_then(|bytes| serde_json::from_slice::<ItemMetadata>(&bytes).ok())
                .map(|meta| meta.last_accessed)
                .unwrap_or(chrono::DateTime::UNIX_EPOCH);
            order.push((key, last_accessed));
        }

        // Oldest first, so the most recently accessed key ends up at head
        order.sort_by_key(|(_, last_accessed)| *last_accessed);

        let mut recency = RecencyList::new();
        for (key, _) in order {
            recency.push_front(key);
        }

        info!(
            store = %config.store_name,
            recovered = recency.len(),
            max_items = config.max_items,
            "cache initialized"
        );

        Ok(Self {
            backend,
            recency,
            stats: CacheStats::new(),
            max_items: config.max_items,
            default_ttl: config.default_ttl,
            store_name: config.store_name,
            _marker: PhantomData,
        })
    }

    // == Shared Constructor ==
    /// Opens a cache behind a shared lock, starting the background
    /// expiration sweeper when `cleanup_interval` is configured.
    ///
    /// Returns the shared cache plus the sweeper handle (None when no
    /// interval was set). The handle is owned by the caller: abort it
    /// when the cache is no longer needed.
    pub async fn open_shared(
        config: CacheConfig,
        backend: Arc<dyn StorageBackend>,
    ) -> Result<(Arc<RwLock<Self>>, Option<JoinHandle<()>>)>
    where
        T: 'static,
    {
        let cleanup_interval = config.cleanup_interval;
        let cache = Arc::new(RwLock::new(Self::open(config, backend).await?));
        let sweeper = cleanup_interval.map(|interval| spawn_sweeper(cache.clone(), interval));
        Ok((cache, sweeper))
    }

    // == Delete ==
    /// Removes an entry from both the backend and the recency list.
    ///
    /// Idempotent: deleting an absent key is not an error.
    pub async fn delete(&mut self, key: &str) -> Result<()> {
        self.backend.remove_item(key).await?;
        self.recency.remove(key);
        Ok(())
    }

    // == Delete Many ==
    /// Deletes each key independently. A backend failure stops the
    /// fan-out, leaving earlier deletions applied.
    pub async fn delete_many(&mut self, keys: &[String]) -> Result<()> {
        for key in keys {
            self.delete(key).await?;
        }
        Ok(())
    }

    // == Clear ==
    /// Empties the backend namespace and resets the recency list and all
    /// statistics counters.
    pub async fn clear(&mut self) -> Result<()> {
        self.backend.clear().await?;
        self.recency.clear();
        self.stats = CacheStats::new();
        info!(store = %self.store_name, "cache cleared");
        Ok(())
    }

    // == Sweep Expired ==
    /// Removes every stored item whose TTL has elapsed.
    ///
    /// Redundant with lazy expiration in `get`; its purpose is reclaiming
    /// items that are never read again. Only envelope metadata is decoded,
    /// so the payload type is not needed. Undecodable items are skipped.
    ///
    /// Returns the number of items removed.
    pub async fn sweep_expired(&mut self) -> Result<usize> {
        let keys = self.backend.keys().await?;
        let mut removed = 0;

        for key in keys {
            let raw = match self.backend.get_item(&key).await? {
                Some(raw) => raw,
                None => continue,
            };
            let meta = match serde_json::from_slice::<ItemMetadata>(&raw) {
                Ok(meta) => meta,
                Err(_) => continue,
            };
            if meta.is_expired() {
                self.delete(&key).await?;
                debug!(key = %key, "swept expired entry");
                removed += 1;
            }
        }

        Ok(removed)
    }

    // == Stats ==
    /// Returns a snapshot of the statistics counters.
    ///
    /// `current_size` is taken from the live recency list. Mutating the
    /// returned value does not affect internal counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.current_size = self.recency.len();
        stats
    }

    // == Reset Stats ==
    /// Zeroes hits, misses, and evictions. The tracked key count is
    /// untouched since it is derived from live state.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // == Length ==
    /// Returns the current number of tracked keys.
    pub fn len(&self) -> usize {
        self.recency.len()
    }

    // == Is Empty ==
    /// Returns true if no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.recency.is_empty()
    }
}

impl<T> LruCache<T>
where
    T: Serialize + DeserializeOwned,
{
    // == Set ==
    /// Stores a key-value pair with optional TTL override.
    ///
    /// The item is persisted before the recency list is touched, so a
    /// backend failure leaves the in-memory state unchanged. When the
    /// insert pushes the tracked count past `max_items`, least recently
    /// used keys are evicted (and deleted from the backend) until the
    /// bound holds again.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (falls back to the configured default)
    pub async fn set(&mut self, key: &str, value: T, ttl: Option<Duration>) -> Result<()> {
        let item = CacheItem::new(value, ttl.or(self.default_ttl));
        let bytes = serde_json::to_vec(&item)?;

        // Persist first: the list must not be mutated if persistence failed
        self.backend.set_item(key, bytes).await?;

        if !self.recency.touch(key) {
            self.recency.push_front(key.to_string());
        }

        while self.recency.len() > self.max_items {
            match self.recency.pop_back() {
                Some(victim) => {
                    self.backend.remove_item(&victim).await?;
                    self.stats.record_eviction();
                    debug!(key = %victim, "evicted least recently used entry");
                }
                None => break,
            }
        }

        Ok(())
    }

    // == Set Many ==
    /// Stores each `(key, value, ttl)` triple independently, with no
    /// atomicity across keys. A backend failure stops the fan-out,
    /// leaving earlier writes applied.
    pub async fn set_many(&mut self, items: Vec<(String, T, Option<Duration>)>) -> Result<()> {
        for (key, value, ttl) in items {
            self.set(&key, value, ttl).await?;
        }
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A missing key and an expired key are indistinguishable to the
    /// caller: both return `Ok(None)` and count as a miss, and an expired
    /// item is removed on the spot (lazy expiration). A successful read
    /// bumps the item's access count, refreshes its `last_accessed`
    /// timestamp in the backend, and promotes the key to most recently
    /// used.
    pub async fn get(&mut self, key: &str) -> Result<Option<T>> {
        let raw = match self.backend.get_item(key).await? {
            Some(raw) => raw,
            None => {
                self.stats.record_miss();
                return Ok(None);
            }
        };

        let mut item: CacheItem<T> = serde_json::from_slice(&raw)?;

        if item.is_expired() {
            self.delete(key).await?;
            self.stats.record_miss();
            debug!(key = %key, "entry expired on access");
            return Ok(None);
        }

        item.touch();
        let bytes = serde_json::to_vec(&item)?;
        self.backend.set_item(key, bytes).await?;

        self.recency.touch(key);
        self.stats.record_hit();
        Ok(Some(item.data))
    }

    // == Get Many ==
    /// Retrieves each key independently, returning a map of per-key
    /// outcomes. A backend failure stops the fan-out.
    pub async fn get_many(&mut self, keys: &[String]) -> Result<HashMap<String, Option<T>>> {
        let mut results = HashMap::with_capacity(keys.len());
        for key in keys {
            let value = self.get(key).await?;
            results.insert(key.clone(), value);
        }
        Ok(results)
    }
}
