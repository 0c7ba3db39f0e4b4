//! Redis backend.

use super::CacheBackend;
use crate::{CacheError, CacheResult};
use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config, Pool, Runtime};
use payflow_config::RedisConfig;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Redis-backed cache backend.
///
/// Every key is written as `{key_prefix}:{key}` so several deployments can
/// share one Redis database.
#[derive(Component)]
#[shaku(interface = CacheBackend)]
pub struct RedisCacheBackend {
    /// Redis connection pool. `None` when caching is disabled.
    pool: Option<Arc<Pool>>,
    /// Namespace prepended to every key.
    key_prefix: String,
}

impl RedisCacheBackend {
    /// Create a backend over an existing pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>, key_prefix: impl Into<String>) -> Self {
        Self {
            pool: Some(pool),
            key_prefix: key_prefix.into(),
        }
    }

    /// Create a no-op backend (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            key_prefix: String::new(),
        }
    }

    /// The key actually stored in Redis.
    fn full_key(&self, key: &str) -> String {
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.key_prefix, key)
        }
    }

    async fn get_conn(&self) -> CacheResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => Ok(pool.get().await?),
            None => Err(CacheError::Disabled),
        }
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        let mut conn = self.get_conn().await?;
        let value: Option<Vec<u8>> = conn.get(self.full_key(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> CacheResult<()> {
        let mut conn = self.get_conn().await?;
        // SETEX has whole-second resolution
        let ttl_secs = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(self.full_key(key), value, ttl_secs)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.del(self.full_key(key)).await?;
        Ok(deleted > 0)
    }

    async fn ping(&self) -> CacheResult<()> {
        let mut conn = self.get_conn().await?;
        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await?;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }
}

/// Create a Redis connection pool.
///
/// Connections are opened lazily, so this succeeds even when Redis is down.
pub fn create_pool(config: &RedisConfig) -> CacheResult<Pool> {
    info!("Creating Redis connection pool for cache...");

    let pool = Config::from_url(&config.url)
        .builder()
        .map_err(|e| CacheError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .runtime(Runtime::Tokio1)
        .wait_timeout(Some(config.connect_timeout()))
        .create_timeout(Some(config.connect_timeout()))
        .build()
        .map_err(|e| CacheError::Configuration(format!("Failed to create pool: {}", e)))?;

    debug!(pool_size = config.pool_size, "Redis connection pool created");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_backend() {
        let backend = RedisCacheBackend::disabled();
        assert!(!backend.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_backend_reports_disabled() {
        let backend = RedisCacheBackend::disabled();
        assert!(matches!(
            backend.get("merchant:id:1").await,
            Err(CacheError::Disabled)
        ));
        assert!(matches!(backend.ping().await, Err(CacheError::Disabled)));
    }

    #[tokio::test]
    async fn test_full_key_applies_prefix() {
        let pool = create_pool(&RedisConfig::default()).unwrap();
        let backend = RedisCacheBackend::new(Arc::new(pool), "payflow");
        assert_eq!(backend.full_key("merchant:id:5"), "payflow:merchant:id:5");
        assert!(backend.is_enabled());

        let unprefixed = RedisCacheBackend::new(backend.pool.clone().unwrap(), "");
        assert_eq!(unprefixed.full_key("merchant:id:5"), "merchant:id:5");
    }

    #[test]
    fn test_create_pool_rejects_bad_url() {
        let config = RedisConfig {
            url: "not a url".to_string(),
            ..RedisConfig::default()
        };
        assert!(matches!(
            create_pool(&config),
            Err(CacheError::Configuration(_))
        ));
    }
}
