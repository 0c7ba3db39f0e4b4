//! Settings for a service embedding the Payflow cache.
//!
//! Every section has serde defaults, so an empty file yields a usable
//! development setup against a local Redis.

use payflow_core::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a service reads at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppMetadata,

    /// Redis configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Cache policy.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging and metrics.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Which service this is and where it runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Service name, e.g. `merchant` or `topup`.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Deployment name, e.g. `development` or `production`.
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "payflow".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Redis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Connection pool size.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// When `false` no pool is built and every cache read misses.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Prefix prepended to every key written by this deployment.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Timeout for acquiring a pooled connection, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_pool_size() -> usize {
    10
}

fn default_enabled() -> bool {
    true
}

fn default_key_prefix() -> String {
    "payflow".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            pool_size: default_pool_size(),
            enabled: default_enabled(),
            key_prefix: default_key_prefix(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl RedisConfig {
    /// Returns the pool checkout timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Cache policy shared by every facade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Expiry applied to every entry at write time, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,
    /// Upper bound on a single backend round-trip, in milliseconds.
    #[serde(default = "default_operation_timeout_ms")]
    pub operation_timeout_ms: u64,
}

fn default_ttl_secs() -> u64 {
    300 // 5 minutes
}

fn default_operation_timeout_ms() -> u64 {
    500
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: default_ttl_secs(),
            operation_timeout_ms: default_operation_timeout_ms(),
        }
    }
}

impl CacheConfig {
    /// Returns the default TTL as a Duration.
    #[must_use]
    pub const fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    /// Returns the per-operation timeout as a Duration.
    #[must_use]
    pub const fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}

/// Logging plus the cache metrics switch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Logging settings.
    #[serde(flatten)]
    pub logging: TelemetryConfig,
    /// Enable cache metrics.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_metrics_enabled() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            logging: TelemetryConfig::default(),
            metrics_enabled: default_metrics_enabled(),
        }
    }
}
