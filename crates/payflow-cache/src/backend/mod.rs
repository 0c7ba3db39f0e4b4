//! Key-value backends the cache store routes bytes through.
//!
//! A backend knows nothing about payload types or fail-open policy. It moves
//! opaque bytes under string keys and reports every failure; the
//! [`CacheStore`](crate::CacheStore) decides what a failure means.

mod memory;
mod redis;

pub use memory::MemoryCacheBackend;
pub use redis::{create_pool, RedisCacheBackend, RedisCacheBackendParameters};

use crate::CacheResult;
use async_trait::async_trait;
use shaku::Interface;
use std::time::Duration;

/// Remote dictionary with per-key expiry.
#[async_trait]
pub trait CacheBackend: Interface {
    /// Reads the bytes stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Writes `value` under `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> CacheResult<()>;

    /// Removes `key`.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> CacheResult<bool>;

    /// Round-trips to the backend to check it is reachable.
    async fn ping(&self) -> CacheResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}
