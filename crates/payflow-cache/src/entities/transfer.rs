//! Transfer cache.

use super::Namespace;
use crate::{CacheStore, ItemCache, ListCache, PageCache};
use payflow_core::{
    CardMonthYearRequest, CardNumber, CardYearRequest, FindAllRequest, MonthYearRequest,
    MonthlyAmount, MonthlyStatus, SoftDeleted, TransferId, TransferResponse, YearRequest,
    YearlyAmount, YearlyStatus,
};
use std::sync::Arc;

const TRANSFER: &str = "transfer";

/// Cache facade for the transfer service.
///
/// A transfer touches two cards, so card-scoped lists come in sender and
/// receiver flavours.
#[derive(Debug)]
pub struct TransferCache {
    all: PageCache<FindAllRequest, TransferResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<TransferResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<TransferResponse>>,
    by_id: ItemCache<TransferId, TransferResponse>,
    by_sender: ListCache<CardNumber, TransferResponse>,
    by_receiver: ListCache<CardNumber, TransferResponse>,

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

impl TransferCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, TRANSFER);
        Self {
            all: ns.page("all"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),
            by_sender: ns.list(&["from"]),
            by_receiver: ns.list(&["to"]),

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

    page_cache_methods!(all: FindAllRequest => TransferResponse, get_cached_transfers, set_cached_transfers);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<TransferResponse>, get_cached_transfer_active, set_cached_transfer_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<TransferResponse>, get_cached_transfer_trashed, set_cached_transfer_trashed);
    item_cache_methods!(by_id: TransferId => TransferResponse, get_cached_transfer, set_cached_transfer, delete_cached_transfer);
    list_cache_methods!(by_sender: CardNumber => TransferResponse, get_cached_transfers_by_transfer_from, set_cached_transfers_by_transfer_from);
    list_cache_methods!(by_receiver: CardNumber => TransferResponse, get_cached_transfers_by_transfer_to, set_cached_transfers_by_transfer_to);

    list_cache_methods!(monthly_success: MonthYearRequest => MonthlyStatus, get_monthly_transfer_status_success_cache, set_monthly_transfer_status_success_cache);
    list_cache_methods!(yearly_success: YearRequest => YearlyStatus, get_yearly_transfer_status_success_cache, set_yearly_transfer_status_success_cache);
    list_cache_methods!(monthly_failed: MonthYearRequest => MonthlyStatus, get_monthly_transfer_status_failed_cache, set_monthly_transfer_status_failed_cache);
    list_cache_methods!(yearly_failed: YearRequest => YearlyStatus, get_yearly_transfer_status_failed_cache, set_yearly_transfer_status_failed_cache);
    list_cache_methods!(monthly_amount: YearRequest => MonthlyAmount, get_monthly_transfer_amounts_cache, set_monthly_transfer_amounts_cache);
    list_cache_methods!(yearly_amount: YearRequest => YearlyAmount, get_yearly_transfer_amounts_cache, set_yearly_transfer_amounts_cache);

    list_cache_methods!(monthly_success_by_card: CardMonthYearRequest => MonthlyStatus, get_monthly_transfer_status_success_by_card_number_cache, set_monthly_transfer_status_success_by_card_number_cache);
    list_cache_methods!(yearly_success_by_card: CardYearRequest => YearlyStatus, get_yearly_transfer_status_success_by_card_number_cache, set_yearly_transfer_status_success_by_card_number_cache);
    list_cache_methods!(monthly_failed_by_card: CardMonthYearRequest => MonthlyStatus, get_monthly_transfer_status_failed_by_card_number_cache, set_monthly_transfer_status_failed_by_card_number_cache);
    list_cache_methods!(yearly_failed_by_card: CardYearRequest => YearlyStatus, get_yearly_transfer_status_failed_by_card_number_cache, set_yearly_transfer_status_failed_by_card_number_cache);
    list_cache_methods!(monthly_amount_by_card: CardYearRequest => MonthlyAmount, get_monthly_transfer_amounts_by_card_number_cache, set_monthly_transfer_amounts_by_card_number_cache);
    list_cache_methods!(yearly_amount_by_card: CardYearRequest => YearlyAmount, get_yearly_transfer_amounts_by_card_number_cache, set_yearly_transfer_amounts_by_card_number_cache);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryCacheBackend;
    use chrono::Utc;

    fn cache() -> TransferCache {
        TransferCache::new(Arc::new(CacheStore::new(Arc::new(MemoryCacheBackend::new()))))
    }

    fn transfer(id: i32, from: &str, to: &str) -> TransferResponse {
        let now = Utc::now();
        TransferResponse {
            id: TransferId(id),
            transfer_from: CardNumber::new(from),
            transfer_to: CardNumber::new(to),
            transfer_amount: 10_000,
            transfer_time: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_sender_and_receiver_lists_are_distinct() {
        let cache = cache();
        let card = CardNumber::new("4111");
        let sent = vec![transfer(1, "4111", "5500")];

        cache
            .set_cached_transfers_by_transfer_from(&card, Some(sent.as_slice()))
            .await;

        assert_eq!(cache.get_cached_transfers_by_transfer_from(&card).await, Some(sent));
        assert_eq!(cache.get_cached_transfers_by_transfer_to(&card).await, None);
    }

    #[tokio::test]
    async fn test_yearly_amounts_by_card() {
        let cache = cache();
        let req = CardYearRequest {
            card_number: CardNumber::new("4111"),
            year: 2023,
        };
        let series = vec![YearlyAmount {
            year: "2023".to_string(),
            total_amount: 90_000,
        }];

        cache
            .set_yearly_transfer_amounts_by_card_number_cache(&req, Some(series.as_slice()))
            .await;

        assert_eq!(
            cache.get_yearly_transfer_amounts_by_card_number_cache(&req).await,
            Some(series)
        );
        let next_year = CardYearRequest { year: 2024, ..req };
        assert_eq!(
            cache
                .get_yearly_transfer_amounts_by_card_number_cache(&next_year)
                .await,
            None
        );
    }
}
