//! Cache key generation.
//!
//! Keys render as `entity[:segment]*[:label:value]*`. Rendering is a pure
//! function of its inputs: values go through `Display` verbatim, so integers
//! come out in decimal and strings unchanged, including empty ones.

use payflow_core::{
    ApiKey, ApiKeyYearRequest, CardMonthYearRequest, CardNumber, CardYearRequest,
    FindAllByApiKeyRequest, FindAllByCardNumberRequest, FindAllByMerchantRequest,
    FindAllRequest, MerchantId, MerchantYearRequest, MonthYearRequest, UserId, YearRequest,
};
use std::fmt::{self, Display, Write as _};

/// A fully rendered cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}

/// Incremental key builder.
///
/// ```
/// use payflow_cache::KeyBuilder;
///
/// let key = KeyBuilder::new("merchant")
///     .segment("statistic")
///     .segment("monthly")
///     .segment("amount")
///     .param("merchant_id", 7)
///     .param("year", 2024)
///     .build();
/// assert_eq!(key.as_str(), "merchant:statistic:monthly:amount:merchant_id:7:year:2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBuilder {
    buf: String,
}

impl KeyBuilder {
    /// Starts a key in the namespace of `entity`.
    #[must_use]
    pub fn new(entity: &str) -> Self {
        Self {
            buf: entity.to_string(),
        }
    }

    /// Appends a fixed namespace segment. Empty segments are skipped.
    #[must_use]
    pub fn segment(mut self, segment: &str) -> Self {
        if !segment.is_empty() {
            self.buf.push(':');
            self.buf.push_str(segment);
        }
        self
    }

    /// Appends a `label:value` pair. The value is always written, even when empty.
    #[must_use]
    pub fn param(mut self, label: &str, value: impl Display) -> Self {
        // Writing into a String cannot fail
        let _ = write!(self.buf, ":{}:{}", label, value);
        self
    }

    /// Appends every pair of a parameter set.
    #[must_use]
    pub fn with<P: KeyParams + ?Sized>(self, params: &P) -> Self {
        params.append_to(self)
    }

    #[must_use]
    pub fn build(self) -> CacheKey {
        CacheKey(self.buf)
    }
}

/// A request shape that participates in cache partitioning.
///
/// Implementations must append pairs in a fixed order.
pub trait KeyParams {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder;
}

impl KeyParams for () {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder
    }
}

impl<P: KeyParams + ?Sized> KeyParams for &P {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        (**self).append_to(builder)
    }
}

impl KeyParams for FindAllRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder
            .param("page", self.page)
            .param("pageSize", self.page_size)
            .param("search", &self.search)
    }
}

impl KeyParams for FindAllByMerchantRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("merchant_id", self.merchant_id).with(&self.page)
    }
}

impl KeyParams for FindAllByApiKeyRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("api_key", &self.api_key).with(&self.page)
    }
}

impl KeyParams for FindAllByCardNumberRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("card_number", &self.card_number).with(&self.page)
    }
}

impl KeyParams for YearRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("year", self.year)
    }
}

impl KeyParams for MonthYearRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("year", self.year).param("month", self.month)
    }
}

impl KeyParams for MerchantYearRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder
            .param("merchant_id", self.merchant_id)
            .param("year", self.year)
    }
}

impl KeyParams for ApiKeyYearRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("api_key", &self.api_key).param("year", self.year)
    }
}

impl KeyParams for CardYearRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder
            .param("card_number", &self.card_number)
            .param("year", self.year)
    }
}

impl KeyParams for CardMonthYearRequest {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder
            .param("card_number", &self.card_number)
            .param("year", self.year)
            .param("month", self.month)
    }
}

impl KeyParams for UserId {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("user_id", self)
    }
}

impl KeyParams for MerchantId {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("merchant_id", self)
    }
}

impl KeyParams for ApiKey {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("api_key", self)
    }
}

impl KeyParams for CardNumber {
    fn append_to(&self, builder: KeyBuilder) -> KeyBuilder {
        builder.param("card_number", self)
    }
}
