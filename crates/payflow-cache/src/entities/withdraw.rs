//! Withdraw cache.

use super::Namespace;
use crate::{CacheStore, ItemCache, ListCache, PageCache};
use payflow_core::{
    CardMonthYearRequest, CardYearRequest, FindAllByCardNumberRequest, FindAllRequest,
    MonthYearRequest, MonthlyAmount, MonthlyStatus, SoftDeleted, WithdrawId, WithdrawResponse,
    YearRequest, YearlyAmount, YearlyStatus,
};
use std::sync::Arc;

const WITHDRAW: &str = "withdraw";

/// Cache facade for the withdraw service.
#[derive(Debug)]
pub struct WithdrawCache {
    all: PageCache<FindAllRequest, WithdrawResponse>,
    by_card: PageCache<FindAllByCardNumberRequest, WithdrawResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<WithdrawResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<WithdrawResponse>>,
    by_id: ItemCache<WithdrawId, WithdrawResponse>,

    monthly_success: ListCache<MonthYearRequest, MonthlyStatus>,
    yearly_success: ListCache<YearRequest, YearlyStatus>,
    monthly_failed: ListCache<MonthYearRequest, MonthlyStatus>,
    yearly_failed: ListCache<YearRequest, YearlyStatus>,
    monthly_amount: ListCache<YearRequest, MonthlyAmount>,
    yearly_amount: ListCache<YearRequest, YearlyAmount>,

    monthly_success_by_card: ListCache<CardMonthYearRequest, MonthlyStatus>,
    yearly_success_by_card: ListCache<CardYearRequest, YearlyStatus>,
    monthly_failed_by_card: ListCache<CardMonthYearRequest, MonthlyStatus>,
    yearly_failed_by_card: ListCache<CardYearRequest, YearlyStatus>,
    monthly_amount_by_card: ListCache<CardYearRequest, MonthlyAmount>,
    yearly_amount_by_card: ListCache<CardYearRequest, YearlyAmount>,
}

impl WithdrawCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, WITHDRAW);
        Self {
            all: ns.page("all"),
            by_card: ns.page("card"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),

            monthly_success: ns.monthly("success"),
            yearly_success: ns.yearly("success"),
            monthly_failed: ns.monthly("failed"),
            yearly_failed: ns.yearly("failed"),
            monthly_amount: ns.monthly("amount"),
            yearly_amount: ns.yearly("amount"),

            monthly_success_by_card: ns.monthly("success"),
            yearly_success_by_card: ns.yearly("success"),
            monthly_failed_by_card: ns.monthly("failed"),
            yearly_failed_by_card: ns.yearly("failed"),
            monthly_amount_by_card: ns.monthly("amount"),
            yearly_amount_by_card: ns.yearly("amount"),
        }
    }

    page_cache_methods!(all: FindAllRequest => WithdrawResponse, get_cached_withdraws, set_cached_withdraws);
    page_cache_methods!(by_card: FindAllByCardNumberRequest => WithdrawResponse, get_cached_withdraws_by_card_number, set_cached_withdraws_by_card_number);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<WithdrawResponse>, get_cached_withdraw_active, set_cached_withdraw_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<WithdrawResponse>, get_cached_withdraw_trashed, set_cached_withdraw_trashed);
    item_cache_methods!(by_id: WithdrawId => WithdrawResponse, get_cached_withdraw, set_cached_withdraw, delete_cached_withdraw);

    list_cache_methods!(monthly_success: MonthYearRequest => MonthlyStatus, get_monthly_withdraw_status_success_cache, set_monthly_withdraw_status_success_cache);
    list_cache_methods!(yearly_success: YearRequest => YearlyStatus, get_yearly_withdraw_status_success_cache, set_yearly_withdraw_status_success_cache);
    list_cache_methods!(monthly_failed: MonthYearRequest => MonthlyStatus, get_monthly_withdraw_status_failed_cache, set_monthly_withdraw_status_failed_cache);
    list_cache_methods!(yearly_failed: YearRequest => YearlyStatus, get_yearly_withdraw_status_failed_cache, set_yearly_withdraw_status_failed_cache);
    list_cache_methods!(monthly_amount: YearRequest => MonthlyAmount, get_monthly_withdraws_cache, set_monthly_withdraws_cache);
    list_cache_methods!(yearly_amount: YearRequest => YearlyAmount, get_yearly_withdraws_cache, set_yearly_withdraws_cache);

    list_cache_methods!(monthly_success_by_card: CardMonthYearRequest => MonthlyStatus, get_monthly_withdraw_status_success_by_card_number_cache, set_monthly_withdraw_status_success_by_card_number_cache);
    list_cache_methods!(yearly_success_by_card: CardYearRequest => YearlyStatus, get_yearly_withdraw_status_success_by_card_number_cache, set_yearly_withdraw_status_success_by_card_number_cache);
    list_cache_methods!(monthly_failed_by_card: CardMonthYearRequest => MonthlyStatus, get_monthly_withdraw_status_failed_by_card_number_cache, set_monthly_withdraw_status_failed_by_card_number_cache);
    list_cache_methods!(yearly_failed_by_card: CardYearRequest => YearlyStatus, get_yearly_withdraw_status_failed_by_card_number_cache, set_yearly_withdraw_status_failed_by_card_number_cache);
    list_cache_methods!(monthly_amount_by_card: CardYearRequest => MonthlyAmount, get_monthly_withdraws_by_card_number_cache, set_monthly_withdraws_by_card_number_cache);
    list_cache_methods!(yearly_amount_by_card: CardYearRequest => YearlyAmount, get_yearly_withdraws_by_card_number_cache, set_yearly_withdraws_by_card_number_cache);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryCacheBackend;
    use chrono::Utc;
    use payflow_core::CardNumber;

    fn cache() -> WithdrawCache {
        WithdrawCache::new(Arc::new(CacheStore::new(Arc::new(MemoryCacheBackend::new()))))
    }

    #[tokio::test]
    async fn test_withdraw_round_trip_and_delete() {
        let cache = cache();
        let now = Utc::now();
        let withdraw = WithdrawResponse {
            id: WithdrawId(11),
            card_number: CardNumber::new("4111"),
            withdraw_amount: 40_000,
            withdraw_time: now,
            created_at: now,
            updated_at: now,
        };

        cache.set_cached_withdraw(&withdraw.id, Some(&withdraw)).await;
        assert_eq!(cache.get_cached_withdraw(&withdraw.id).await, Some(withdraw.clone()));

        cache.set_cached_withdraw(&withdraw.id, None).await;
        assert_eq!(cache.get_cached_withdraw(&withdraw.id).await, Some(withdraw.clone()));

        cache.delete_cached_withdraw(&withdraw.id).await;
        assert_eq!(cache.get_cached_withdraw(&withdraw.id).await, None);
    }

    #[tokio::test]
    async fn test_withdraws_by_card_number_normalize_none() {
        let cache = cache();
        let req = FindAllByCardNumberRequest {
            card_number: CardNumber::new("4111"),
            page: FindAllRequest::new(1, 10, "atm"),
        };

        cache.set_cached_withdraws_by_card_number(&req, None, None).await;

        let page = cache.get_cached_withdraws_by_card_number(&req).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_records, 0);
    }
}
