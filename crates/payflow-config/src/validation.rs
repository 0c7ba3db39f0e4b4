//! Startup checks on [`AppConfig`].
//!
//! A bad setting fails the service at boot rather than at the first cache call.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// One rejected setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    InvalidUrl { url_type: String, message: String },
    /// Pool size is outside the accepted range.
    InvalidPoolSize { value: usize, minimum: usize, maximum: usize },
    /// Duration value must be positive.
    NonPositiveDuration { name: String },
    InvalidLogLevel { value: String },
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { url_type, message } => {
                write!(f, "{url_type}.url: {message}")
            }
            Self::InvalidPoolSize {
                value,
                minimum,
                maximum,
            } => {
                write!(f, "redis.pool_size: {value} is outside {minimum}..={maximum}")
            }
            Self::NonPositiveDuration { name } => {
                write!(f, "{name}: must be greater than zero")
            }
            Self::InvalidLogLevel { value } => {
                write!(f, "observability.log_level: unknown level '{value}'")
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "observability.log_format: expected pretty or json, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Shorthand for [`ConfigValidator::validate`].
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
    ConfigValidator::validate(config)
}

/// Validates a loaded configuration.
pub struct ConfigValidator;

impl ConfigValidator {
    const MAX_POOL_SIZE: usize = 512;
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Checks every section, collecting all problems instead of stopping at the first.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_redis(&config.redis, &mut errors);
        Self::validate_cache(&config.cache, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// A disabled cache needs no connection settings.
    fn validate_redis(config: &crate::RedisConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.enabled {
            return;
        }

        match Url::parse(&config.url) {
            Ok(url) if url.scheme() == "redis" || url.scheme() == "rediss" => {}
            Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: e.to_string(),
            }),
        }

        if config.pool_size == 0 || config.pool_size > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::InvalidPoolSize {
                value: config.pool_size,
                minimum: 1,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveDuration {
                name: "redis.connect_timeout_secs".to_string(),
            });
        }
    }

    fn validate_cache(config: &crate::CacheConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.default_ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveDuration {
                name: "cache.default_ttl_secs".to_string(),
            });
        }
        if config.operation_timeout_ms == 0 {
            errors.push(ConfigValidationError::NonPositiveDuration {
                name: "cache.operation_timeout_ms".to_string(),
            });
        }
    }

    fn validate_observability(
        config: &crate::ObservabilityConfig,
        errors: &mut Vec<ConfigValidationError>,
    ) {
        let level = config.logging.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.logging.log_level.clone(),
            });
        }

        let format = config.logging.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.logging.log_format.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_redis_url() {
        let mut config = AppConfig::default();
        config.redis.url = "http://localhost:6379".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ConfigValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let mut config = AppConfig::default();
        config.redis.url = "not a url".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(errors[0], ConfigValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn test_disabled_redis_skips_connection_checks() {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config.redis.url = String::new();
        config.redis.pool_size = 0;

        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.redis.pool_size = 0;
        config.cache.default_ttl_secs = 0;
        config.cache.operation_timeout_ms = 0;
        config.observability.logging.log_level = "verbose".to_string();
        config.observability.logging.log_format = "xml".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ConfigValidationError::NonPositiveDuration {
            name: "cache.default_ttl_secs".to_string(),
        }));
        assert!(errors.contains(&ConfigValidationError::InvalidLogLevel {
            value: "verbose".to_string(),
        }));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigValidationError::InvalidPoolSize {
            value: 0,
            minimum: 1,
            maximum: 512,
        };
        assert_eq!(err.to_string(), "redis.pool_size: 0 is outside 1..=512");
    }
}
