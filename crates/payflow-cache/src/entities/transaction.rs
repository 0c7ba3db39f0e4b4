//! Transaction cache.

use super::Namespace;
use crate::{CacheStore, ItemCache, ListCache, PageCache};
use payflow_core::{
    CardMonthYearRequest, CardYearRequest, FindAllByCardNumberRequest, FindAllRequest, MerchantId,
    MonthYearRequest, MonthlyAmount, MonthlyMethod, MonthlyStatus, SoftDeleted, TransactionId,
    TransactionResponse, YearRequest, YearlyAmount, YearlyMethod, YearlyStatus,
};
use std::sync::Arc;

const TRANSACTION: &str = "transaction";

/// Cache facade for the transaction service.
#[derive(Debug)]
pub struct TransactionCache {
    all: PageCache<FindAllRequest, TransactionResponse>,
    by_card: PageCache<FindAllByCardNumberRequest, TransactionResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<TransactionResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<TransactionResponse>>,
    by_id: ItemCache<TransactionId, TransactionResponse>,
    by_merchant: ListCache<MerchantId, TransactionResponse>,

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

impl TransactionCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, TRANSACTION);
        Self {
            all: ns.page("all"),
            by_card: ns.page("card"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),
            by_merchant: ns.list(&["merchant"]),

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

    page_cache_methods!(all: FindAllRequest => TransactionResponse, get_cached_transactions, set_cached_transactions);
    page_cache_methods!(by_card: FindAllByCardNumberRequest => TransactionResponse, get_cached_transactions_by_card_number, set_cached_transactions_by_card_number);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<TransactionResponse>, get_cached_transaction_active, set_cached_transaction_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<TransactionResponse>, get_cached_transaction_trashed, set_cached_transaction_trashed);
    item_cache_methods!(by_id: TransactionId => TransactionResponse, get_cached_transaction, set_cached_transaction, delete_cached_transaction);
    list_cache_methods!(by_merchant: MerchantId => TransactionResponse, get_cached_transactions_by_merchant_id, set_cached_transactions_by_merchant_id);

    list_cache_methods!(monthly_success: MonthYearRequest => MonthlyStatus, get_monthly_transaction_status_success_cache, set_monthly_transaction_status_success_cache);
    list_cache_methods!(yearly_success: YearRequest => YearlyStatus, get_yearly_transaction_status_success_cache, set_yearly_transaction_status_success_cache);
    list_cache_methods!(monthly_failed: MonthYearRequest => MonthlyStatus, get_monthly_transaction_status_failed_cache, set_monthly_transaction_status_failed_cache);
    list_cache_methods!(yearly_failed: YearRequest => YearlyStatus, get_yearly_transaction_status_failed_cache, set_yearly_transaction_status_failed_cache);
    list_cache_methods!(monthly_method: YearRequest => MonthlyMethod, get_monthly_payment_methods_cache, set_monthly_payment_methods_cache);
    list_cache_methods!(yearly_method: YearRequest => YearlyMethod, get_yearly_payment_methods_cache, set_yearly_payment_methods_cache);
    list_cache_methods!(monthly_amount: YearRequest => MonthlyAmount, get_monthly_amounts_cache, set_monthly_amounts_cache);
    list_cache_methods!(yearly_amount: YearRequest => YearlyAmount, get_yearly_amounts_cache, set_yearly_amounts_cache);

    list_cache_methods!(monthly_success_by_card: CardMonthYearRequest => MonthlyStatus, get_monthly_transaction_status_success_by_card_number_cache, set_monthly_transaction_status_success_by_card_number_cache);
    list_cache_methods!(yearly_success_by_card: CardYearRequest => YearlyStatus, get_yearly_transaction_status_success_by_card_number_cache, set_yearly_transaction_status_success_by_card_number_cache);
    list_cache_methods!(monthly_failed_by_card: CardMonthYearRequest => MonthlyStatus, get_monthly_transaction_status_failed_by_card_number_cache, set_monthly_transaction_status_failed_by_card_number_cache);
    list_cache_methods!(yearly_failed_by_card: CardYearRequest => YearlyStatus, get_yearly_transaction_status_failed_by_card_number_cache, set_yearly_transaction_status_failed_by_card_number_cache);
    list_cache_methods!(monthly_method_by_card: CardYearRequest => MonthlyMethod, get_monthly_payment_methods_by_card_number_cache, set_monthly_payment_methods_by_card_number_cache);
    list_cache_methods!(yearly_method_by_card: CardYearRequest => YearlyMethod, get_yearly_payment_methods_by_card_number_cache, set_yearly_payment_methods_by_card_number_cache);
    list_cache_methods!(monthly_amount_by_card: CardYearRequest => MonthlyAmount, get_monthly_amounts_by_card_number_cache, set_monthly_amounts_by_card_number_cache);
    list_cache_methods!(yearly_amount_by_card: CardYearRequest => YearlyAmount, get_yearly_amounts_by_card_number_cache, set_yearly_amounts_by_card_number_cache);
}
