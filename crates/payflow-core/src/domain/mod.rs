//! # Payflow Domain
//!
//! Response records produced by the services' repositories. These are the
//! payloads the cache stores; each derives `Serialize`/`Deserialize` and
//! round-trips through JSON without loss.

pub mod account;
pub mod card;
pub mod merchant;
pub mod payment;
pub mod statistic;

pub use account::*;
pub use card::*;
pub use merchant::*;
pub use payment::*;
pub use statistic::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record as listed by the active/trashed views, carrying its soft-delete
/// timestamp alongside the regular fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftDeleted<T> {
    #[serde(flatten)]
    pub record: T,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl<T> SoftDeleted<T> {
    /// Wraps a record that has not been deleted.
    #[must_use]
    pub const fn active(record: T) -> Self {
        Self {
            record,
            deleted_at: None,
        }
    }

    /// Wraps a record deleted at the given instant.
    #[must_use]
    pub const fn trashed(record: T, deleted_at: DateTime<Utc>) -> Self {
        Self {
            record,
            deleted_at: Some(deleted_at),
        }
    }

    /// Returns true if the record is soft-deleted.
    #[must_use]
    pub const fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RoleId, RoleResponse};

    #[test]
    fn test_soft_deleted_flattens_record() {
        let now = Utc::now();
        let role = RoleResponse {
            id: RoleId(1),
            name: "ROLE_ADMIN".to_string(),
            created_at: now,
            updated_at: now,
        };
        let trashed = SoftDeleted::trashed(role.clone(), now);
        assert!(trashed.is_trashed());

        let json = serde_json::to_value(&trashed).unwrap();
        assert_eq!(json["name"], "ROLE_ADMIN");
        assert!(json["deleted_at"].is_string());

        let back: SoftDeleted<RoleResponse> = serde_json::from_value(json).unwrap();
        assert_eq!(back, trashed);
        assert!(!SoftDeleted::active(role).is_trashed());
    }
}
