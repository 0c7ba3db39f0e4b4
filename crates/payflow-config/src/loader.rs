//! Layered configuration loading.
//!
//! Later sources win: `default.toml`, then `{environment}.toml`, then
//! `local.toml`, then `PAYFLOW__SECTION__KEY` environment variables.

use crate::{validate_config, AppConfig};
use config::{Config, ConfigError, Environment, File};
use payflow_core::PayflowError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Holds the loaded [`AppConfig`] and can re-read it from disk.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Loads and validates configuration from `config_dir`.
    ///
    /// The environment name comes from `PAYFLOW_ENVIRONMENT` and defaults to
    /// `development`. Missing files are skipped.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, PayflowError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads from `./config`.
    pub fn from_default_location() -> Result<Self, PayflowError> {
        Self::new("./config")
    }

    /// A snapshot of the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Re-reads every source.
    ///
    /// On failure the previous configuration stays in place.
    pub async fn reload(&self) -> Result<(), PayflowError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!(dir = %self.config_dir, "Configuration reloaded");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, PayflowError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!(error = %e, "Skipping .env");
        }

        let environment =
            std::env::var("PAYFLOW_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!(environment = %environment, "Loading configuration");

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!(path = %path, "Adding config source");
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("PAYFLOW")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(into_payflow_error)?;

        validate_config(&app_config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            PayflowError::Configuration(message)
        })?;

        Ok(app_config)
    }

    /// Reads one value by dotted path, e.g. `"redis.key_prefix"`.
    ///
    /// Returns `None` if the path is absent or has a different type.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = serde_json::to_value(&*self.config.read().await).ok()?;
        let value = key
            .split('.')
            .try_fold(&json, |node, part| node.get(part))?;
        serde_json::from_value(value.clone()).ok()
    }
}

fn into_payflow_error(err: ConfigError) -> PayflowError {
    PayflowError::configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;

        assert_eq!(config.cache.default_ttl_secs, 300);
        assert_eq!(config.redis.key_prefix, "payflow");
        assert!(config.redis.enabled);
    }

    #[tokio::test]
    async fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[redis]\nurl = \"redis://cache:6379\"\nkey_prefix = \"merchant\"\n\n[cache]\ndefault_ttl_secs = 120\n",
        );
        write(dir.path(), "local.toml", "[cache]\ndefault_ttl_secs = 60\n");

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;

        assert_eq!(config.redis.url, "redis://cache:6379");
        assert_eq!(config.redis.key_prefix, "merchant");
        assert_eq!(config.cache.default_ttl_secs, 60);
        assert_eq!(config.cache.operation_timeout_ms, 500);
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[cache]\ndefault_ttl_secs = 0\n");

        let err = ConfigLoader::new(dir.path().to_string_lossy())
            .err()
            .expect("zero TTL must be rejected");
        assert!(matches!(err, PayflowError::Configuration(_)));
        assert!(err.to_string().contains("cache.default_ttl_secs"));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[cache]\ndefault_ttl_secs = 120\n");

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get().await.cache.default_ttl_secs, 120);

        write(dir.path(), "default.toml", "[cache]\ndefault_ttl_secs = 30\n");
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.cache.default_ttl_secs, 30);
    }

    #[tokio::test]
    async fn test_get_value_by_path() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();

        let ttl: Option<u64> = loader.get_value("cache.default_ttl_secs").await;
        assert_eq!(ttl, Some(300));

        let level: Option<String> = loader.get_value("observability.log_level").await;
        assert_eq!(level.as_deref(), Some("info"));

        let missing: Option<u64> = loader.get_value("cache.nope").await;
        assert!(missing.is_none());
    }
}
