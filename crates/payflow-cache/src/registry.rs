//! Process-wide cache wiring.
//!
//! One [`CacheStore`] over one backend connection pool, shared by every
//! entity facade the service needs. Built once at startup.

use crate::backend::{create_pool, CacheBackend, RedisCacheBackend, RedisCacheBackendParameters};
use crate::entities::{
    CardCache, MerchantCache, MerchantDocumentCache, RoleCache, SaldoCache, TopupCache,
    TransactionCache, TransferCache, UserCache, WithdrawCache,
};
use crate::{metrics, CacheStore};
use payflow_config::{AppConfig, CacheConfig, RedisConfig};
use payflow_core::PayflowResult;
use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::{info, warn};

module! {
    pub CacheModule {
        components = [
            RedisCacheBackend,
        ],
        providers = [],
    }
}

/// Builds the cache module from Redis settings.
///
/// A disabled configuration yields a backend without a pool.
pub fn build_cache_module(redis_config: &RedisConfig) -> PayflowResult<Arc<CacheModule>> {
    let pool = if redis_config.enabled {
        Some(Arc::new(create_pool(redis_config)?))
    } else {
        None
    };

    let module = CacheModule::builder()
        .with_component_parameters::<RedisCacheBackend>(RedisCacheBackendParameters {
            pool,
            key_prefix: redis_config.key_prefix.clone(),
        })
        .build();

    Ok(Arc::new(module))
}

/// Trait for resolving cache components.
pub trait CacheResolver {
    /// Resolves the cache backend from the module.
    fn cache_backend(&self) -> Arc<dyn CacheBackend>;
}

impl CacheResolver for CacheModule {
    fn cache_backend(&self) -> Arc<dyn CacheBackend> {
        self.resolve()
    }
}

/// Every entity facade, sharing one store.
#[derive(Debug)]
pub struct CacheRegistry {
    store: Arc<CacheStore>,
    pub merchant: MerchantCache,
    pub merchant_document: MerchantDocumentCache,
    pub card: CardCache,
    pub saldo: SaldoCache,
    pub topup: TopupCache,
    pub transaction: TransactionCache,
    pub transfer: TransferCache,
    pub withdraw: WithdrawCache,
    pub user: UserCache,
    pub role: RoleCache,
}

impl CacheRegistry {
    /// Wires every facade onto `store`.
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        Self {
            merchant: MerchantCache::new(Arc::clone(&store)),
            merchant_document: MerchantDocumentCache::new(Arc::clone(&store)),
            card: CardCache::new(Arc::clone(&store)),
            saldo: SaldoCache::new(Arc::clone(&store)),
            topup: TopupCache::new(Arc::clone(&store)),
            transaction: TransactionCache::new(Arc::clone(&store)),
            transfer: TransferCache::new(Arc::clone(&store)),
            withdraw: WithdrawCache::new(Arc::clone(&store)),
            user: UserCache::new(Arc::clone(&store)),
            role: RoleCache::new(Arc::clone(&store)),
            store,
        }
    }

    /// Wires the registry over the backend resolved from `module`.
    #[must_use]
    pub fn from_module(module: &CacheModule, cache_config: &CacheConfig) -> Self {
        let store = CacheStore::with_config(module.cache_backend(), cache_config);
        Self::new(Arc::new(store))
    }

    /// Builds the registry from application configuration.
    ///
    /// Only an unusable Redis configuration fails. An unreachable Redis is
    /// logged and the registry is returned anyway; reads then miss until the
    /// backend comes back.
    pub async fn connect(config: &AppConfig) -> PayflowResult<Self> {
        if config.observability.metrics_enabled {
            metrics::register_metrics();
        }

        let module = build_cache_module(&config.redis)?;
        let registry = Self::from_module(&module, &config.cache);

        if !registry.store.is_enabled() {
            info!("Cache is disabled, every read will miss");
        } else if registry.store.ping().await {
            info!(
                prefix = %config.redis.key_prefix,
                ttl_secs = config.cache.default_ttl_secs,
                "Cache connected"
            );
        } else {
            warn!(url = %config.redis.url, "Cache backend unreachable at startup, continuing without cache");
        }

        Ok(registry)
    }

    /// The store every facade shares.
    #[must_use]
    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }
}
