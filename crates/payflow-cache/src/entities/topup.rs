//! Topup cache.

use super::Namespace;
use crate::{CacheStore, ItemCache, ListCache, PageCache};
use payflow_core::{
    CardMonthYearRequest, CardYearRequest, FindAllByCardNumberRequest, FindAllRequest,
    MonthYearRequest, MonthlyAmount, MonthlyMethod, MonthlyStatus, SoftDeleted, TopupId,
    TopupResponse, YearRequest, YearlyAmount, YearlyMethod, YearlyStatus,
};
use std::sync::Arc;

const TOPUP: &str = "topup";

/// Cache facade for the topup service.
///
/// Status series are keyed by month for monthly views and by year for
/// yearly views; method and amount series are keyed by year.
#[derive(Debug)]
pub struct TopupCache {
    all: PageCache<FindAllRequest, TopupResponse>,
    by_card: PageCache<FindAllByCardNumberRequest, TopupResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<TopupResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<TopupResponse>>,
    by_id: ItemCache<TopupId, TopupResponse>,

    monthly_success: ListCache<MonthYearRequest, MonthlyStatus>,
    yearly_success: ListCache<YearRequest, YearlyStatus>,
    monthly_failed: ListCache<MonthYearRequest, MonthlyStatus>,
    yearly_failed: ListCache<YearRequest, YearlyStatus>,
    monthly_method: ListCache<YearRequest, MonthlyMethod>,
    yearly_method: ListCache<YearRequest, YearlyMethod>,
    monthly_amount: ListCache<YearRequest, MonthlyAmount>,
    yearly_amount: ListCache<YearRequest, YearlyAmount>,

    monthly_success_by_card: ListCache<CardMonthYearRequest, MonthlyStatus>,
    yearly_success_by_card: ListCache<CardYearRequest, YearlyStatus>,
    monthly_failed_by_card: ListCache<CardMonthYearRequest, MonthlyStatus>,
    yearly_failed_by_card: ListCache<CardYearRequest, YearlyStatus>,
    monthly_method_by_card: ListCache<CardYearRequest, MonthlyMethod>,
    yearly_method_by_card: ListCache<CardYearRequest, YearlyMethod>,
    monthly_amount_by_card: ListCache<CardYearRequest, MonthlyAmount>,
    yearly_amount_by_card: ListCache<CardYearRequest, YearlyAmount>,
}

impl TopupCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, TOPUP);
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
            monthly_method: ns.monthly("method"),
            yearly_method: ns.yearly("method"),
            monthly_amount: ns.monthly("amount"),
            yearly_amount: ns.yearly("amount"),

            monthly_success_by_card: ns.monthly("success"),
            yearly_success_by_card: ns.yearly("success"),
            monthly_failed_by_card: ns.monthly("failed"),
            yearly_failed_by_card: ns.yearly("failed"),
            monthly_method_by_card: ns.monthly("method"),
            yearly_method_by_card: ns.yearly("method"),
            monthly_amount_by_card: ns.monthly("amount"),
            yearly_amount_by_card: ns.yearly("amount"),
        }
    }

    page_cache_methods!(all: FindAllRequest => TopupResponse, get_cached_topups, set_cached_topups);
    page_cache_methods!(by_card: FindAllByCardNumberRequest => TopupResponse, get_cached_topups_by_card_number, set_cached_topups_by_card_number);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<TopupResponse>, get_cached_topup_active, set_cached_topup_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<TopupResponse>, get_cached_topup_trashed, set_cached_topup_trashed);
    item_cache_methods!(by_id: TopupId => TopupResponse, get_cached_topup, set_cached_topup, delete_cached_topup);

    list_cache_methods!(monthly_success: MonthYearRequest => MonthlyStatus, get_monthly_topup_status_success_cache, set_monthly_topup_status_success_cache);
    list_cache_methods!(yearly_success: YearRequest => YearlyStatus, get_yearly_topup_status_success_cache, set_yearly_topup_status_success_cache);
    list_cache_methods!(monthly_failed: MonthYearRequest => MonthlyStatus, get_monthly_topup_status_failed_cache, set_monthly_topup_status_failed_cache);
    list_cache_methods!(yearly_failed: YearRequest => YearlyStatus, get_yearly_topup_status_failed_cache, set_yearly_topup_status_failed_cache);
    list_cache_methods!(monthly_method: YearRequest => MonthlyMethod, get_monthly_topup_methods_cache, set_monthly_topup_methods_cache);
    list_cache_methods!(yearly_method: YearRequest => YearlyMethod, get_yearly_topup_methods_cache, set_yearly_topup_methods_cache);
    list_cache_methods!(monthly_amount: YearRequest => MonthlyAmount, get_monthly_topup_amounts_cache, set_monthly_topup_amounts_cache);
    list_cache_methods!(yearly_amount: YearRequest => YearlyAmount, get_yearly_topup_amounts_cache, set_yearly_topup_amounts_cache);

    list_cache_methods!(monthly_success_by_card: CardMonthYearRequest => MonthlyStatus, get_monthly_topup_status_success_by_card_number_cache, set_monthly_topup_status_success_by_card_number_cache);
    list_cache_methods!(yearly_success_by_card: CardYearRequest => YearlyStatus, get_yearly_topup_status_success_by_card_number_cache, set_yearly_topup_status_success_by_card_number_cache);
    list_cache_methods!(monthly_failed_by_card: CardMonthYearRequest => MonthlyStatus, get_monthly_topup_status_failed_by_card_number_cache, set_monthly_topup_status_failed_by_card_number_cache);
    list_cache_methods!(yearly_failed_by_card: CardYearRequest => YearlyStatus, get_yearly_topup_status_failed_by_card_number_cache, set_yearly_topup_status_failed_by_card_number_cache);
    list_cache_methods!(monthly_method_by_card: CardYearRequest => MonthlyMethod, get_monthly_topup_methods_by_card_number_cache, set_monthly_topup_methods_by_card_number_cache);
    list_cache_methods!(yearly_method_by_card: CardYearRequest => YearlyMethod, get_yearly_topup_methods_by_card_number_cache, set_yearly_topup_methods_by_card_number_cache);
    list_cache_methods!(monthly_amount_by_card: CardYearRequest => MonthlyAmount, get_monthly_topup_amounts_by_card_number_cache, set_monthly_topup_amounts_by_card_number_cache);
    list_cache_methods!(yearly_amount_by_card: CardYearRequest => YearlyAmount, get_yearly_topup_amounts_by_card_number_cache, set_yearly_topup_amounts_by_card_number_cache);
}
