//! Request parameter types for list and statistics reads.
//!
//! These are the shapes the query layer receives from its callers. The cache
//! layer renders them into keys, so every field here participates in cache
//! partitioning.

use crate::{ApiKey, CardNumber, MerchantId};
use serde::{Deserialize, Serialize};

/// A request for one page of a searchable list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindAllRequest {
    /// The page number (1-indexed).
    pub page: i32,
    /// The number of items per page.
    pub page_size: i32,
    /// Free-text search filter. Empty means "no filter".
    #[serde(default)]
    pub search: String,
}

impl FindAllRequest {
    /// The default page size.
    pub const DEFAULT_PAGE_SIZE: i32 = 10;

    /// Creates a new page request.
    #[must_use]
    pub fn new(page: i32, page_size: i32, search: impl Into<String>) -> Self {
        Self {
            page,
            page_size,
            search: search.into(),
        }
    }

    /// Creates a request for the first page with default size and no search.
    #[must_use]
    pub fn first() -> Self {
        Self::new(1, Self::DEFAULT_PAGE_SIZE, "")
    }

    /// Returns a copy with non-positive page and page size replaced by defaults.
    ///
    /// Handlers normalize before reading so that `page=0` and `page=1` share
    /// one cache entry.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            page: if self.page <= 0 { 1 } else { self.page },
            page_size: if self.page_size <= 0 {
                Self::DEFAULT_PAGE_SIZE
            } else {
                self.page_size
            },
            search: self.search.clone(),
        }
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        (self.page - 1) * self.page_size
    }
}

impl Default for FindAllRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A page request scoped to one merchant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindAllByMerchantRequest {
    pub merchant_id: MerchantId,
    #[serde(flatten)]
    pub page: FindAllRequest,
}

/// A page request scoped to one merchant API key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindAllByApiKeyRequest {
    pub api_key: ApiKey,
    #[serde(flatten)]
    pub page: FindAllRequest,
}

/// A page request scoped to one card number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindAllByCardNumberRequest {
    pub card_number: CardNumber,
    #[serde(flatten)]
    pub page: FindAllRequest,
}

/// Statistics for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRequest {
    pub year: i32,
}

/// Statistics for one month of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthYearRequest {
    pub year: i32,
    pub month: i32,
}

/// Statistics for one merchant over a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantYearRequest {
    pub merchant_id: MerchantId,
    pub year: i32,
}

/// Statistics for one merchant API key over a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiKeyYearRequest {
    pub api_key: ApiKey,
    pub year: i32,
}

/// Statistics for one card over a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardYearRequest {
    pub card_number: CardNumber,
    pub year: i32,
}

/// Statistics for one card over one month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardMonthYearRequest {
    pub card_number: CardNumber,
    pub year: i32,
    pub month: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_first() {
        let req = FindAllRequest::first();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, FindAllRequest::DEFAULT_PAGE_SIZE);
        assert!(req.search.is_empty());
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_offset_calculation() {
        assert_eq!(FindAllRequest::new(2, 10, "").offset(), 10);
        assert_eq!(FindAllRequest::new(5, 15, "").offset(), 60);
    }

    #[test]
    fn test_normalized_replaces_non_positive_values() {
        let req = FindAllRequest::new(0, -3, "shop").normalized();
        assert_eq!(req, FindAllRequest::new(1, 10, "shop"));

        let untouched = FindAllRequest::new(3, 25, "").normalized();
        assert_eq!(untouched, FindAllRequest::new(3, 25, ""));
    }

    #[test]
    fn test_scoped_request_flattens_page() {
        let req = FindAllByMerchantRequest {
            merchant_id: MerchantId(7),
            page: FindAllRequest::new(1, 10, "coffee"),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["merchant_id"], 7);
        assert_eq!(json["page_size"], 10);
        assert_eq!(json["search"], "coffee");
    }
}
