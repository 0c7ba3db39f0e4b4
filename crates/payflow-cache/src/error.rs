//! Cache error types.
//!
//! These never reach callers of [`CacheStore`](crate::CacheStore): the store
//! logs them and degrades to a miss or a no-op. They exist so backends can
//! report precisely what went wrong.

use payflow_core::PayflowError;
use std::time::Duration;
use thiserror::Error;

/// Result type for cache backend operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache-related errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Redis command failed.
    #[error("Redis error: {0}")]
    Redis(#[from] deadpool_redis::redis::RedisError),

    /// Redis pool could not hand out a connection.
    #[error("Redis pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    /// Payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend round-trip exceeded the operation deadline.
    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),

    /// Caching is switched off for this process.
    #[error("Cache is disabled")]
    Disabled,

    /// Keys must be non-empty.
    #[error("Cache key must not be empty")]
    EmptyKey,

    /// Entries must expire.
    #[error("Cache TTL must be positive")]
    InvalidTtl,

    /// Pool or backend could not be constructed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CacheError {
    /// Short label used as the `reason` field in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Redis(_) => "redis",
            Self::Pool(_) => "pool",
            Self::Serialization(_) => "codec",
            Self::Timeout(_) => "timeout",
            Self::Disabled => "disabled",
            Self::EmptyKey => "empty_key",
            Self::InvalidTtl => "invalid_ttl",
            Self::Configuration(_) => "configuration",
        }
    }
}

impl From<CacheError> for PayflowError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Configuration(message) => Self::Configuration(message),
            CacheError::Timeout(after) => {
                Self::Timeout(format!("Cache operation timed out after {:?}", after))
            }
            other => Self::Cache(other.to_string()),
        }
    }
}
