//! In-memory key-value store
//!
//! Used as session-scoped storage (dropped with the process) and as the test
//! double for durable storage. Faults can be switched on to exercise the
//! fail-closed paths of callers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use super::{KeyValueStore, StorageError, StorageResult};

/// In-memory store with optional quota and fault injection
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit total size (keys + values, in bytes)
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Make every `get` fail with [`StorageError::AccessDenied`]
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every `set`/`remove` fail with [`StorageError::AccessDenied`]
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::AccessDenied("writes disabled".to_string()));
        }
        Ok(())
    }
}

fn used_bytes(entries: &HashMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::AccessDenied("reads disabled".to_string()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        let mut entries = self.entries.write().await;

        if let Some(limit) = self.quota_bytes {
            let replaced = entries.get(key).map_or(0, |old| key.len() + old.len());
            let needed = used_bytes(&entries) - replaced + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("language").await.unwrap(), None);

        store.set("language", "english").await.unwrap();
        assert_eq!(store.get("language").await.unwrap().as_deref(), Some("english"));

        store.set("language", "hindi").await.unwrap();
        assert_eq!(store.get("language").await.unwrap().as_deref(), Some("hindi"));
        assert_eq!(store.len().await, 1);

        store.remove("language").await.unwrap();
        assert_eq!(store.get("language").await.unwrap(), None);

        // Removing again is fine
        store.remove("language").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_fail_reads() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        store.set_fail_reads(true);
        assert!(matches!(
            store.get("k").await,
            Err(StorageError::AccessDenied(_))
        ));
        store.set_fail_reads(false);
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_fail_writes() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        store.set_fail_writes(true);
        assert!(store.set("k", "w").await.is_err());
        assert!(store.remove("k").await.is_err());
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_quota() {
        let store = MemoryStore::with_quota(10);
        store.set("ab", "12345678").await.unwrap();

        // Replacing an entry only counts the difference
        store.set("ab", "87654321").await.unwrap();

        let err = store.set("c", "1").await.unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { limit: 10 }));
        assert_eq!(store.len().await, 1);
    }
}
