//! Typed, fail-open cache store.
//!
//! The store is the single place where backend failures are handled. A
//! failed read is a miss, a failed write or delete is a no-op, and every
//! outcome is logged against its key. Nothing here returns an error.

use crate::backend::CacheBackend;
use crate::metrics::CacheMetrics;
use crate::{codec, CacheError, CacheResult};
use payflow_config::CacheConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, warn};

/// Default TTL for cached items (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Default upper bound on one backend round-trip.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(500);

/// Generic typed get/set/delete over a [`CacheBackend`].
///
/// One store is built per process and shared by every facade.
pub struct CacheStore {
    backend: Arc<dyn CacheBackend>,
    default_ttl: Duration,
    operation_timeout: Duration,
}

impl fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("enabled", &self.backend.is_enabled())
            .field("default_ttl", &self.default_ttl)
            .field("operation_timeout", &self.operation_timeout)
            .finish()
    }
}

impl CacheStore {
    /// Create a store with the default TTL and operation timeout.
    #[must_use]
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend,
            default_ttl: DEFAULT_TTL,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Create a store using the configured cache policy.
    #[must_use]
    pub fn with_config(backend: Arc<dyn CacheBackend>, config: &CacheConfig) -> Self {
        Self {
            backend,
            default_ttl: config.default_ttl(),
            operation_timeout: config.operation_timeout(),
        }
    }

    /// Overrides the per-operation deadline.
    #[must_use]
    pub const fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// The TTL facades apply to every write.
    #[must_use]
    pub const fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    #[must_use]
    pub const fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    /// Check if caching is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.backend.is_enabled()
    }

    /// Reads and decodes the value under `key`.
    ///
    /// Returns `None` on a miss and on any failure.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        if !self.admits(key, "get") {
            return None;
        }

        let bytes = match self.timed("get", self.backend.get(key)).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(key = %key, outcome = "miss", "Cache miss");
                CacheMetrics::miss();
                return None;
            }
            Err(e) => {
                Self::failed("get", key, &e);
                return None;
            }
        };

        match codec::decode(&bytes) {
            Ok(value) => {
                debug!(key = %key, outcome = "hit", "Cache hit");
                CacheMetrics::hit();
                Some(value)
            }
            Err(e) => {
                Self::failed("get", key, &e);
                None
            }
        }
    }

    /// Encodes `value` and writes it under `key`, expiring after `ttl`.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Duration) {
        if !self.admits(key, "set") {
            return;
        }
        if ttl.is_zero() {
            Self::failed("set", key, &CacheError::InvalidTtl);
            return;
        }

        let bytes = match codec::encode(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                Self::failed("set", key, &e);
                return;
            }
        };

        match self.timed("set", self.backend.set(key, &bytes, ttl)).await {
            Ok(()) => {
                debug!(key = %key, ttl_secs = ttl.as_secs(), outcome = "stored", "Cached key");
                CacheMetrics::write();
            }
            Err(e) => Self::failed("set", key, &e),
        }
    }

    /// Removes `key`. A missing key is not an error.
    pub async fn delete(&self, key: &str) {
        if !self.admits(key, "delete") {
            return;
        }

        match self.timed("delete", self.backend.delete(key)).await {
            Ok(true) => {
                debug!(key = %key, outcome = "deleted", "Deleted key");
                CacheMetrics::delete();
            }
            Ok(false) => debug!(key = %key, outcome = "absent", "Key to delete was not cached"),
            Err(e) => Self::failed("delete", key, &e),
        }
    }

    /// Returns the cached value, or runs `loader` and caches what it yields.
    ///
    /// Loader errors propagate unchanged; cache failures never do.
    pub async fn get_or_load<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        loader: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.get::<T>(key).await {
            return Ok(cached);
        }

        let value = loader().await?;
        self.set(key, &value, ttl).await;
        Ok(value)
    }

    /// Returns `true` if the backend answered within the deadline.
    pub async fn ping(&self) -> bool {
        if !self.is_enabled() {
            return false;
        }
        match self.timed("ping", self.backend.ping()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, reason = e.kind(), "Cache backend is unreachable");
                false
            }
        }
    }

    /// Local checks that avoid a backend round-trip.
    fn admits(&self, key: &str, operation: &'static str) -> bool {
        if !self.backend.is_enabled() {
            return false;
        }
        if key.is_empty() {
            Self::failed(operation, key, &CacheError::EmptyKey);
            return false;
        }
        true
    }

    /// Runs one backend call under the operation deadline.
    async fn timed<R>(
        &self,
        operation: &'static str,
        call: impl Future<Output = CacheResult<R>>,
    ) -> CacheResult<R> {
        let started = Instant::now();
        let result = tokio::time::timeout(self.operation_timeout, call)
            .await
            .unwrap_or(Err(CacheError::Timeout(self.operation_timeout)));
        CacheMetrics::operation_duration(operation, started.elapsed());
        result
    }

    fn failed(operation: &'static str, key: &str, err: &CacheError) {
        error!(
            key = %key,
            operation,
            reason = err.kind(),
            error = %err,
            "Cache operation failed"
        );
        CacheMetrics::error(operation);
    }
}
