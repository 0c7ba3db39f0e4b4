//! Process-local backend.
//!
//! Expiry is measured on [`tokio::time::Instant`], so tests running with a
//! paused clock can step past a TTL with `tokio::time::advance`.

use super::CacheBackend;
use crate::{CacheError, CacheResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory cache backend with per-entry expiry.
///
/// Expired entries are dropped lazily on read, or in bulk by
/// [`purge_expired`](Self::purge_expired).
#[derive(Default)]
pub struct MemoryCacheBackend {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCacheBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let purged = before - entries.len();
        if purged > 0 {
            debug!(purged, "Purged expired cache entries");
        }
        purged
    }
}

#[async_trait]
impl CacheBackend for MemoryCacheBackend {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> CacheResult<()> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl);
        }
        let entry = Entry {
            value: value.to_vec(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .lock()
            .remove(key)
            .is_some_and(|entry| !entry.is_expired(now)))
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let backend = MemoryCacheBackend::new();
        assert!(backend.get("k").await.unwrap().is_none());

        backend.set("k", b"v", Duration::from_secs(60)).await.unwrap();
        assert_eq!(backend.get("k").await.unwrap().as_deref(), Some(&b"v"[..]));

        assert!(backend.delete("k").await.unwrap());
        assert!(!backend.delete("k").await.unwrap());
        assert!(backend.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value_and_expiry() {
        let backend = MemoryCacheBackend::new();
        backend.set("k", b"old", Duration::from_secs(1)).await.unwrap();
        backend.set("k", b"new", Duration::from_secs(60)).await.unwrap();
        assert_eq!(backend.len(), 1);
        assert_eq!(backend.get("k").await.unwrap().as_deref(), Some(&b"new"[..]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire() {
        let backend = MemoryCacheBackend::new();
        backend.set("k", b"v", Duration::from_secs(300)).await.unwrap();

        tokio::time::advance(Duration::from_secs(299)).await;
        assert!(backend.get("k").await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(backend.get("k").await.unwrap().is_none());
        assert!(backend.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_expired() {
        let backend = MemoryCacheBackend::new();
        backend.set("short", b"1", Duration::from_secs(10)).await.unwrap();
        backend.set("long", b"2", Duration::from_secs(600)).await.unwrap();

        tokio::time::advance(Duration::from_secs(11)).await;
        assert_eq!(backend.len(), 2);
        assert_eq!(backend.purge_expired(), 1);
        assert_eq!(backend.len(), 1);
        assert!(backend.get("long").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_zero_ttl_rejected() {
        let backend = MemoryCacheBackend::new();
        let err = backend.set("k", b"v", Duration::ZERO).await.unwrap_err();
        assert!(matches!(err, CacheError::InvalidTtl));
        assert!(backend.is_empty());
    }
}
