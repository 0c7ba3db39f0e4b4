//! Structured logging bootstrap.
//!
//! The cache layer only emits `tracing` events; whoever embeds it decides
//! where they go. Services call [`init_logging`] once at startup.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::PayflowResult;
use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (json, pretty).
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Whether to include the event target in each line.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            with_target: default_with_target(),
        }
    }
}

impl TelemetryConfig {
    /// Returns true if lines should be emitted as JSON objects.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Builds the filter directive: the configured level for everything,
    /// `debug` for our own crates when the level is `debug` or lower.
    #[must_use]
    pub fn filter_directive(&self) -> String {
        let level = self.log_level.to_ascii_lowercase();
        match level.as_str() {
            "trace" | "debug" => format!("{level},payflow={level}"),
            _ => level,
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Installing twice
/// is reported as a configuration error rather than a panic.
#[cfg(feature = "telemetry")]
pub fn init_logging(config: &TelemetryConfig) -> PayflowResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let result = if config.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
            .try_init()
    };

    result.map_err(|e| {
        crate::PayflowError::Configuration(format!("Failed to install log subscriber: {}", e))
    })?;

    tracing::info!(
        log_level = %config.log_level,
        log_format = %config.log_format,
        "Logging initialized"
    );

    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_logging(_config: &TelemetryConfig) -> PayflowResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "pretty");
        assert!(config.with_target);
        assert!(!config.is_json());
    }

    #[test]
    fn test_filter_directive() {
        let mut config = TelemetryConfig::default();
        assert_eq!(config.filter_directive(), "info");

        config.log_level = "DEBUG".to_string();
        assert_eq!(config.filter_directive(), "debug,payflow=debug");
    }

    #[test]
    fn test_json_format_detection() {
        let config = TelemetryConfig {
            log_format: "JSON".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(config.is_json());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let config = TelemetryConfig::default();
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
