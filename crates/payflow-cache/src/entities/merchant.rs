//! Merchant and merchant document caches.

use super::Namespace;
use crate::{CacheStore, ItemCache, ListCache, PageCache};
use payflow_core::{
    ApiKey, ApiKeyYearRequest, FindAllByApiKeyRequest, FindAllByMerchantRequest, FindAllRequest,
    MerchantDocumentId, MerchantDocumentResponse, MerchantId, MerchantResponse,
    MerchantTransactionResponse, MerchantYearRequest, MonthlyAmount, MonthlyMethod, SoftDeleted,
    UserId, YearRequest, YearlyAmount, YearlyMethod,
};
use std::sync::Arc;

const MERCHANT: &str = "merchant";
const MERCHANT_DOCUMENT: &str = "merchant_document";

/// Cache facade for the merchant service.
///
/// Merchants are reachable by ID and by API key, so an update path should
/// drop both singleton keys.
#[derive(Debug)]
pub struct MerchantCache {
    all: PageCache<FindAllRequest, MerchantResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<MerchantResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<MerchantResponse>>,
    by_id: ItemCache<MerchantId, MerchantResponse>,
    by_api_key: ItemCache<ApiKey, MerchantResponse>,
    by_user: ListCache<UserId, MerchantResponse>,

    transactions: PageCache<FindAllRequest, MerchantTransactionResponse>,
    transactions_by_merchant: PageCache<FindAllByMerchantRequest, MerchantTransactionResponse>,
    transactions_by_api_key: PageCache<FindAllByApiKeyRequest, MerchantTransactionResponse>,

    monthly_method: ListCache<YearRequest, MonthlyMethod>,
    yearly_method: ListCache<YearRequest, YearlyMethod>,
    monthly_amount: ListCache<YearRequest, MonthlyAmount>,
    yearly_amount: ListCache<YearRequest, YearlyAmount>,
    monthly_total_amount: ListCache<YearRequest, MonthlyAmount>,
    yearly_total_amount: ListCache<YearRequest, YearlyAmount>,

    monthly_method_by_merchant: ListCache<MerchantYearRequest, MonthlyMethod>,
    yearly_method_by_merchant: ListCache<MerchantYearRequest, YearlyMethod>,
    monthly_amount_by_merchant: ListCache<MerchantYearRequest, MonthlyAmount>,
    yearly_amount_by_merchant: ListCache<MerchantYearRequest, YearlyAmount>,
    monthly_total_amount_by_merchant: ListCache<MerchantYearRequest, MonthlyAmount>,
    yearly_total_amount_by_merchant: ListCache<MerchantYearRequest, YearlyAmount>,

    monthly_method_by_api_key: ListCache<ApiKeyYearRequest, MonthlyMethod>,
    yearly_method_by_api_key: ListCache<ApiKeyYearRequest, YearlyMethod>,
    monthly_amount_by_api_key: ListCache<ApiKeyYearRequest, MonthlyAmount>,
    yearly_amount_by_api_key: ListCache<ApiKeyYearRequest, YearlyAmount>,
    monthly_total_amount_by_api_key: ListCache<ApiKeyYearRequest, MonthlyAmount>,
    yearly_total_amount_by_api_key: ListCache<ApiKeyYearRequest, YearlyAmount>,
}

impl MerchantCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, MERCHANT);
        Self {
            all: ns.page("all"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),
            by_api_key: ns.item("api_key"),
            by_user: ns.list(&["user"]),

            transactions: ns.page("transactions"),
            transactions_by_merchant: ns.page("transactions"),
            transactions_by_api_key: ns.page("transactions"),

            monthly_method: ns.monthly("method"),
            yearly_method: ns.yearly("method"),
            monthly_amount: ns.monthly("amount"),
            yearly_amount: ns.yearly("amount"),
            monthly_total_amount: ns.monthly("total_amount"),
            yearly_total_amount: ns.yearly("total_amount"),

            monthly_method_by_merchant: ns.monthly("method"),
            yearly_method_by_merchant: ns.yearly("method"),
            monthly_amount_by_merchant: ns.monthly("amount"),
            yearly_amount_by_merchant: ns.yearly("amount"),
            monthly_total_amount_by_merchant: ns.monthly("total_amount"),
            yearly_total_amount_by_merchant: ns.yearly("total_amount"),

            monthly_method_by_api_key: ns.monthly("method"),
            yearly_method_by_api_key: ns.yearly("method"),
            monthly_amount_by_api_key: ns.monthly("amount"),
            yearly_amount_by_api_key: ns.yearly("amount"),
            monthly_total_amount_by_api_key: ns.monthly("total_amount"),
            yearly_total_amount_by_api_key: ns.yearly("total_amount"),
        }
    }

    page_cache_methods!(all: FindAllRequest => MerchantResponse, get_cached_merchants, set_cached_merchants);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<MerchantResponse>, get_cached_merchant_active, set_cached_merchant_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<MerchantResponse>, get_cached_merchant_trashed, set_cached_merchant_trashed);
    item_cache_methods!(by_id: MerchantId => MerchantResponse, get_cached_merchant, set_cached_merchant, delete_cached_merchant);
    item_cache_methods!(by_api_key: ApiKey => MerchantResponse, get_cached_merchant_by_api_key, set_cached_merchant_by_api_key, delete_cached_merchant_by_api_key);
    list_cache_methods!(by_user: UserId => MerchantResponse, get_cached_merchants_by_user_id, set_cached_merchants_by_user_id);

    page_cache_methods!(transactions: FindAllRequest => MerchantTransactionResponse, get_cached_merchant_transactions, set_cached_merchant_transactions);
    page_cache_methods!(transactions_by_merchant: FindAllByMerchantRequest => MerchantTransactionResponse, get_cached_merchant_transactions_by_merchant, set_cached_merchant_transactions_by_merchant);
    page_cache_methods!(transactions_by_api_key: FindAllByApiKeyRequest => MerchantTransactionResponse, get_cached_merchant_transactions_by_api_key, set_cached_merchant_transactions_by_api_key);

    list_cache_methods!(monthly_method: YearRequest => MonthlyMethod, get_monthly_payment_method_cache, set_monthly_payment_method_cache);
    list_cache_methods!(yearly_method: YearRequest => YearlyMethod, get_yearly_payment_method_cache, set_yearly_payment_method_cache);
    list_cache_methods!(monthly_amount: YearRequest => MonthlyAmount, get_monthly_amount_cache, set_monthly_amount_cache);
    list_cache_methods!(yearly_amount: YearRequest => YearlyAmount, get_yearly_amount_cache, set_yearly_amount_cache);
    list_cache_methods!(monthly_total_amount: YearRequest => MonthlyAmount, get_monthly_total_amount_cache, set_monthly_total_amount_cache);
    list_cache_methods!(yearly_total_amount: YearRequest => YearlyAmount, get_yearly_total_amount_cache, set_yearly_total_amount_cache);

    list_cache_methods!(monthly_method_by_merchant: MerchantYearRequest => MonthlyMethod, get_monthly_payment_method_by_merchants_cache, set_monthly_payment_method_by_merchants_cache);
    list_cache_methods!(yearly_method_by_merchant: MerchantYearRequest => YearlyMethod, get_yearly_payment_method_by_merchants_cache, set_yearly_payment_method_by_merchants_cache);
    list_cache_methods!(monthly_amount_by_merchant: MerchantYearRequest => MonthlyAmount, get_monthly_amount_by_merchants_cache, set_monthly_amount_by_merchants_cache);
    list_cache_methods!(yearly_amount_by_merchant: MerchantYearRequest => YearlyAmount, get_yearly_amount_by_merchants_cache, set_yearly_amount_by_merchants_cache);
    list_cache_methods!(monthly_total_amount_by_merchant: MerchantYearRequest => MonthlyAmount, get_monthly_total_amount_by_merchants_cache, set_monthly_total_amount_by_merchants_cache);
    list_cache_methods!(yearly_total_amount_by_merchant: MerchantYearRequest => YearlyAmount, get_yearly_total_amount_by_merchants_cache, set_yearly_total_amount_by_merchants_cache);

    list_cache_methods!(monthly_method_by_api_key: ApiKeyYearRequest => MonthlyMethod, get_monthly_payment_method_by_api_key_cache, set_monthly_payment_method_by_api_key_cache);
    list_cache_methods!(yearly_method_by_api_key: ApiKeyYearRequest => YearlyMethod, get_yearly_payment_method_by_api_key_cache, set_yearly_payment_method_by_api_key_cache);
    list_cache_methods!(monthly_amount_by_api_key: ApiKeyYearRequest => MonthlyAmount, get_monthly_amount_by_api_key_cache, set_monthly_amount_by_api_key_cache);
    list_cache_methods!(yearly_amount_by_api_key: ApiKeyYearRequest => YearlyAmount, get_yearly_amount_by_api_key_cache, set_yearly_amount_by_api_key_cache);
    list_cache_methods!(monthly_total_amount_by_api_key: ApiKeyYearRequest => MonthlyAmount, get_monthly_total_amount_by_api_key_cache, set_monthly_total_amount_by_api_key_cache);
    list_cache_methods!(yearly_total_amount_by_api_key: ApiKeyYearRequest => YearlyAmount, get_yearly_total_amount_by_api_key_cache, set_yearly_total_amount_by_api_key_cache);
}

/// Cache facade for merchant documents.
#[derive(Debug)]
pub struct MerchantDocumentCache {
    all: PageCache<FindAllRequest, MerchantDocumentResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<MerchantDocumentResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<MerchantDocumentResponse>>,
    by_id: ItemCache<MerchantDocumentId, MerchantDocumentResponse>,
}

impl MerchantDocumentCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, MERCHANT_DOCUMENT);
        Self {
            all: ns.page("all"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),
        }
    }

    page_cache_methods!(all: FindAllRequest => MerchantDocumentResponse, get_cached_merchant_documents, set_cached_merchant_documents);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<MerchantDocumentResponse>, get_cached_merchant_documents_active, set_cached_merchant_documents_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<MerchantDocumentResponse>, get_cached_merchant_documents_trashed, set_cached_merchant_documents_trashed);
    item_cache_methods!(by_id: MerchantDocumentId => MerchantDocumentResponse, get_cached_merchant_document, set_cached_merchant_document, delete_cached_merchant_document);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryCacheBackend;
    use chrono::Utc;
    use payflow_core::CardNumber;

    fn cache() -> MerchantCache {
        MerchantCache::new(Arc::new(CacheStore::new(Arc::new(MemoryCacheBackend::new()))))
    }

    fn merchant(id: i32, api_key: &str) -> MerchantResponse {
        let now = Utc::now();
        MerchantResponse {
            id: MerchantId(id),
            name: format!("merchant-{}", id),
            api_key: ApiKey::new(api_key),
            user_id: UserId(1),
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn merchant_transaction(id: i32, merchant_id: i32) -> MerchantTransactionResponse {
        let now = Utc::now();
        MerchantTransactionResponse {
            id: payflow_core::TransactionId(id),
            card_number: CardNumber::new("4111111111111111"),
            amount: 50_000,
            payment_method: "visa".to_string(),
            merchant_id: MerchantId(merchant_id),
            merchant_name: format!("merchant-{}", merchant_id),
            transaction_time: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_api_key_lookup_and_invalidation() {
        let cache = cache();
        let key = ApiKey::new("pk_live_abc");
        let m = merchant(5, "pk_live_abc");

        cache.set_cached_merchant(&m.id, Some(&m)).await;
        cache.set_cached_merchant_by_api_key(&key, Some(&m)).await;

        cache.delete_cached_merchant_by_api_key(&key).await;
        assert_eq!(cache.get_cached_merchant_by_api_key(&key).await, None);
        assert_eq!(cache.get_cached_merchant(&MerchantId(5)).await, Some(m));
    }

    #[tokio::test]
    async fn test_transaction_scopes_do_not_collide() {
        let cache = cache();
        let page = FindAllRequest::first();
        let by_merchant = FindAllByMerchantRequest {
            merchant_id: MerchantId(7),
            page: page.clone(),
        };
        let by_api_key = FindAllByApiKeyRequest {
            api_key: ApiKey::new("7"),
            page: page.clone(),
        };
        let rows = vec![merchant_transaction(1, 7)];

        cache
            .set_cached_merchant_transactions_by_merchant(&by_merchant, Some(rows.as_slice()), Some(1))
            .await;

        assert!(cache.get_cached_merchant_transactions(&page).await.is_none());
        assert!(cache
            .get_cached_merchant_transactions_by_api_key(&by_api_key)
            .await
            .is_none());
        let cached = cache
            .get_cached_merchant_transactions_by_merchant(&by_merchant)
            .await
            .unwrap();
        assert_eq!(cached.data, rows);
        assert_eq!(cached.total_records, 1);
    }

    #[tokio::test]
    async fn test_statistic_scopes_do_not_collide() {
        let cache = cache();
        let series = vec![MonthlyAmount {
            month: "Jan".to_string(),
            total_amount: 1_000,
        }];

        cache
            .set_monthly_amount_cache(&YearRequest { year: 2024 }, Some(series.as_slice()))
            .await;

        let by_merchant = MerchantYearRequest {
            merchant_id: MerchantId(7),
            year: 2024,
        };
        assert!(cache.get_monthly_amount_by_merchants_cache(&by_merchant).await.is_none());
        assert!(cache
            .get_monthly_total_amount_cache(&YearRequest { year: 2024 })
            .await
            .is_none());
        assert_eq!(
            cache.get_monthly_amount_cache(&YearRequest { year: 2024 }).await,
            Some(series)
        );
    }

    #[tokio::test]
    async fn test_merchants_by_user() {
        let cache = cache();
        cache.set_cached_merchants_by_user_id(&UserId(1), None).await;
        assert_eq!(
            cache.get_cached_merchants_by_user_id(&UserId(1)).await,
            Some(Vec::new())
        );
    }

    #[tokio::test]
    async fn test_document_cache() {
        let documents =
            MerchantDocumentCache::new(Arc::new(CacheStore::new(Arc::new(MemoryCacheBackend::new()))));
        let now = Utc::now();
        let doc = MerchantDocumentResponse {
            id: MerchantDocumentId(2),
            merchant_id: MerchantId(7),
            document_type: "business_license".to_string(),
            document_url: "https://files.example.com/license.pdf".to_string(),
            status: "pending".to_string(),
            note: String::new(),
            uploaded_at: now,
            updated_at: now,
        };

        documents.set_cached_merchant_document(&doc.id, Some(&doc)).await;
        assert_eq!(documents.get_cached_merchant_document(&doc.id).await, Some(doc.clone()));

        documents.delete_cached_merchant_document(&doc.id).await;
        assert_eq!(documents.get_cached_merchant_document(&doc.id).await, None);
    }
}
