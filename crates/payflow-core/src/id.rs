//! Typed ID wrappers for domain entities.
//!
//! Every service keys its rows by a database-assigned `i32`. The wrappers
//! keep a merchant ID from being passed where a card ID is expected, which
//! matters once the value ends up inside a cache key.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Returns the inner value.
            #[must_use]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

numeric_id!(
    /// Identifies a user account.
    UserId
);
numeric_id!(
    /// Identifies a role.
    RoleId
);
numeric_id!(
    /// Identifies a merchant.
    MerchantId
);
numeric_id!(
    /// Identifies a merchant's uploaded document.
    MerchantDocumentId
);
numeric_id!(
    /// Identifies a card.
    CardId
);
numeric_id!(
    /// Identifies a saldo (card balance) record.
    SaldoId
);
numeric_id!(
    /// Identifies a topup.
    TopupId
);
numeric_id!(
    /// Identifies a payment transaction.
    TransactionId
);
numeric_id!(
    /// Identifies a card-to-card transfer.
    TransferId
);
numeric_id!(
    /// Identifies a withdrawal.
    WithdrawId
);

/// A merchant API key, the natural key merchants authenticate with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(pub String);

impl ApiKey {
    /// Creates a new API key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A card number, the natural key for cards, saldos, and card-scoped history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(pub String);

impl CardNumber {
    /// Creates a new card number.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the card number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CardNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}
