//! Expiration Sweeper Task
//!
//! Background task that periodically removes expired cache items,
//! reclaiming space for items that are never read again before their TTL
//! lapses (lazy expiration alone would let them linger indefinitely).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::LruCache;

/// Spawns a background task that periodically sweeps expired cache items.
///
/// The task sleeps for `interval` between sweeps and acquires the write
/// lock for each pass. The returned handle is owned by the caller: abort
/// it when the cache is no longer needed, otherwise the task recurs for
/// the lifetime of the runtime.
///
/// A sweep failure is logged and the task keeps running; the next pass
/// retries from scratch.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(cache));
/// let sweeper = spawn_sweeper(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper<T>(cache: Arc<RwLock<LruCache<T>>>, interval: Duration) -> JoinHandle<()>
where
    T: 'static,
{
    tokio::spawn(async move {
        info!(?interval, "starting expiration sweeper");

        loop {
            tokio::time::sleep(interval).await;

            let swept = {
                let mut cache = cache.write().await;
                cache.sweep_expired().await
            };

            match swept {
                Ok(0) => debug!("sweep pass found no expired items"),
                Ok(removed) => info!(removed, "sweep pass removed expired items"),
                Err(e) => warn!(error = %e, "sweep pass failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;
    use crate::store::MemoryBackend;

    async fn open_cache() -> LruCache<String> {
        LruCache::open(
            CacheConfig::default(),
            Arc::new(MemoryBackend::new("sweeper-test")),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_sweeper_removes_expired_items() {
        let mut cache = open_cache().await;
        cache
            .set("expire_soon", "value".to_string(), Some(Duration::from_millis(50)))
            .await
            .unwrap();
        let cache = Arc::new(RwLock::new(cache));

        let handle = spawn_sweeper(cache.clone(), Duration::from_millis(50));

        // Wait for the item to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(200)).await;

        {
            let cache = cache.read().await;
            assert_eq!(
                cache.stats().current_size,
                0,
                "expired item should have been swept without being read"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_preserves_valid_items() {
        let mut cache = open_cache().await;
        cache
            .set("long_lived", "value".to_string(), Some(Duration::from_secs(3600)))
            .await
            .unwrap();
        cache.set("forever", "value".to_string(), None).await.unwrap();
        let cache = Arc::new(RwLock::new(cache));

        let handle = spawn_sweeper(cache.clone(), Duration::from_millis(30));

        tokio::time::sleep(Duration::from_millis(120)).await;

        {
            let mut cache = cache.write().await;
            assert_eq!(cache.get("long_lived").await.unwrap(), Some("value".to_string()));
            assert_eq!(cache.get("forever").await.unwrap(), Some("value".to_string()));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_can_be_aborted() {
        let cache = Arc::new(RwLock::new(open_cache().await));

        let handle = spawn_sweeper(cache, Duration::from_millis(10));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
