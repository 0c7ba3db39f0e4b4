//! Workspace error type.
//!
//! Cache lookups never produce a [`PayflowError`]; the cache layer degrades
//! to a miss instead. These errors come from startup, configuration, and the
//! loaders callers hand to the read-through helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayflowError {
    /// The authoritative source has no record for this key.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("invalid request: {0}")]
    Validation(String),

    /// Settings could not be loaded, or a backend could not be built from them.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A cache backend failure surfaced outside the fail-open path.
    #[error("cache backend: {0}")]
    Cache(String),

    #[error("deadline exceeded: {0}")]
    Timeout(String),

    #[error("internal: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PayflowError {
    /// Stable code for logs and API error bodies.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// A missing `entity` looked up by `key`, e.g. `not_found("merchant", 5)`.
    #[must_use]
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Transient backend trouble; the same call may succeed later.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Cache(_) | Self::Timeout(_))
    }
}

impl From<serde_json::Error> for PayflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("payload encoding: {err}"))
    }
}
