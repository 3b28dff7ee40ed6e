//! In-Memory Backend
//!
//! HashMap-backed storage backend for tests and single-process use.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::StorageBackend;

// == Memory Backend ==
/// In-process storage backend over a `tokio::sync::RwLock<HashMap>`.
///
/// Never fails; read-your-writes consistency follows directly from the lock.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    /// Namespace identifier, kept for diagnostics
    store_name: String,
    /// Key-value storage
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    // == Constructor ==
    /// Creates an empty backend for the given namespace.
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the namespace identifier this backend was created with.
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Returns the number of items currently stored.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if no items are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        tokio_test::block_on(async {
            let backend = MemoryBackend::new("test");

            backend.set_item("key1", b"value1".to_vec()).await.unwrap();
            let value = backend.get_item("key1").await.unwrap();

            assert_eq!(value, Some(b"value1".to_vec()));
            assert_eq!(backend.len().await, 1);
        });
    }

    #[test]
    fn test_memory_backend_get_absent() {
        tokio_test::block_on(async {
            let backend = MemoryBackend::new("test");
            assert!(backend.get_item("missing").await.unwrap().is_none());
        });
    }

    #[test]
    fn test_memory_backend_overwrite() {
        tokio_test::block_on(async {
            let backend = MemoryBackend::new("test");

            backend.set_item("key1", b"old".to_vec()).await.unwrap();
            backend.set_item("key1", b"new".to_vec()).await.unwrap();

            assert_eq!(backend.get_item("key1").await.unwrap(), Some(b"new".to_vec()));
            assert_eq!(backend.len().await, 1);
        });
    }

    #[test]
    fn test_memory_backend_remove_is_noop_on_absent() {
        tokio_test::block_on(async {
            let backend = MemoryBackend::new("test");
            backend.remove_item("missing").await.unwrap();
            assert!(backend.is_empty().await);
        });
    }

    #[test]
    fn test_memory_backend_clear_and_keys() {
        tokio_test::block_on(async {
            let backend = MemoryBackend::new("test");

            backend.set_item("a", b"1".to_vec()).await.unwrap();
            backend.set_item("b", b"2".to_vec()).await.unwrap();

            let mut keys = backend.keys().await.unwrap();
            keys.sort();
            assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);

            backend.clear().await.unwrap();
            assert!(backend.is_empty().await);
            assert!(backend.keys().await.unwrap().is_empty());
        });
    }
}
