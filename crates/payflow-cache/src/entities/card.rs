//! Card and saldo caches.

use super::Namespace;
use crate::{CacheStore, ItemCache, ListCache, PageCache, ValueCache};
use payflow_core::{
    CardId, CardNumber, CardResponse, CardYearRequest, DashboardCard, DashboardCardNumber,
    FindAllRequest, MonthYearRequest, MonthlyBalance, SaldoId, SaldoResponse, SoftDeleted, UserId,
    YearRequest, YearlyBalance,
};
use std::sync::Arc;

const CARD: &str = "card";
const SALDO: &str = "saldo";

/// Cache facade for the card service.
///
/// Cards are reachable by ID, by owning user and by card number.
#[derive(Debug)]
pub struct CardCache {
    all: PageCache<FindAllRequest, CardResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<CardResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<CardResponse>>,
    by_id: ItemCache<CardId, CardResponse>,
    by_user: ItemCache<UserId, CardResponse>,
    by_card_number: ItemCache<CardNumber, CardResponse>,

    dashboard: ValueCache<(), DashboardCard>,
    dashboard_by_card_number: ValueCache<CardNumber, DashboardCardNumber>,

    monthly_balance: ListCache<YearRequest, MonthlyBalance>,
    yearly_balance: ListCache<YearRequest, YearlyBalance>,
    monthly_balance_by_card: ListCache<CardYearRequest, MonthlyBalance>,
    yearly_balance_by_card: ListCache<CardYearRequest, YearlyBalance>,
}

impl CardCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, CARD);
        Self {
            all: ns.page("all"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),
            by_user: ns.item("user_id"),
            by_card_number: ns.item("card_number"),

            dashboard: ns.value(&["dashboard"]),
            dashboard_by_card_number: ns.value(&["dashboard"]),

            monthly_balance: ns.monthly("balance"),
            yearly_balance: ns.yearly("balance"),
            monthly_balance_by_card: ns.monthly("balance"),
            yearly_balance_by_card: ns.yearly("balance"),
        }
    }

    page_cache_methods!(all: FindAllRequest => CardResponse, get_cached_cards, set_cached_cards);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<CardResponse>, get_cached_card_active, set_cached_card_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<CardResponse>, get_cached_card_trashed, set_cached_card_trashed);
    item_cache_methods!(by_id: CardId => CardResponse, get_cached_card, set_cached_card, delete_cached_card);
    item_cache_methods!(by_user: UserId => CardResponse, get_cached_card_by_user_id, set_cached_card_by_user_id);
    item_cache_methods!(by_card_number: CardNumber => CardResponse, get_cached_card_by_card_number, set_cached_card_by_card_number, delete_cached_card_by_card_number);

    value_cache_methods!(dashboard: () => DashboardCard, get_dashboard_card_cache, set_dashboard_card_cache);
    value_cache_methods!(dashboard_by_card_number: CardNumber => DashboardCardNumber, get_dashboard_card_number_cache, set_dashboard_card_number_cache);

    list_cache_methods!(monthly_balance: YearRequest => MonthlyBalance, get_monthly_balance_cache, set_monthly_balance_cache);
    list_cache_methods!(yearly_balance: YearRequest => YearlyBalance, get_yearly_balance_cache, set_yearly_balance_cache);
    list_cache_methods!(monthly_balance_by_card: CardYearRequest => MonthlyBalance, get_monthly_balance_by_card_number_cache, set_monthly_balance_by_card_number_cache);
    list_cache_methods!(yearly_balance_by_card: CardYearRequest => YearlyBalance, get_yearly_balance_by_card_number_cache, set_yearly_balance_by_card_number_cache);
}

/// Cache facade for the saldo service.
#[derive(Debug)]
pub struct SaldoCache {
    all: PageCache<FindAllRequest, SaldoResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<SaldoResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<SaldoResponse>>,
    by_id: ItemCache<SaldoId, SaldoResponse>,
    by_card_number: ItemCache<CardNumber, SaldoResponse>,

    monthly_total_balance: ListCache<MonthYearRequest, MonthlyBalance>,
    yearly_total_balance: ListCache<YearRequest, YearlyBalance>,
    monthly_balances: ListCache<YearRequest, MonthlyBalance>,
    yearly_balances: ListCache<YearRequest, YearlyBalance>,
}

impl SaldoCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, SALDO);
        Self {
            all: ns.page("all"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),
            by_card_number: ns.item("card_number"),

            monthly_total_balance: ns.monthly("total_balance"),
            yearly_total_balance: ns.yearly("total_balance"),
            monthly_balances: ns.monthly("balance"),
            yearly_balances: ns.yearly("balance"),
        }
    }

    page_cache_methods!(all: FindAllRequest => SaldoResponse, get_cached_saldos, set_cached_saldos);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<SaldoResponse>, get_cached_saldo_active, set_cached_saldo_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<SaldoResponse>, get_cached_saldo_trashed, set_cached_saldo_trashed);
    item_cache_methods!(by_id: SaldoId => SaldoResponse, get_cached_saldo, set_cached_saldo, delete_cached_saldo);
    item_cache_methods!(by_card_number: CardNumber => SaldoResponse, get_cached_saldo_by_card_number, set_cached_saldo_by_card_number);

    list_cache_methods!(monthly_total_balance: MonthYearRequest => MonthlyBalance, get_monthly_total_balance_cache, set_monthly_total_balance_cache);
    list_cache_methods!(yearly_total_balance: YearRequest => YearlyBalance, get_yearly_total_balance_cache, set_yearly_total_balance_cache);
    list_cache_methods!(monthly_balances: YearRequest => MonthlyBalance, get_monthly_balances_cache, set_monthly_balances_cache);
    list_cache_methods!(yearly_balances: YearRequest => YearlyBalance, get_yearly_balances_cache, set_yearly_balances_cache);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryCacheBackend;
    use chrono::{NaiveDate, Utc};

    fn store() -> Arc<CacheStore> {
        Arc::new(CacheStore::new(Arc::new(MemoryCacheBackend::new())))
    }

    fn card(id: i32, user_id: i32, number: &str) -> CardResponse {
        let now = Utc::now();
        CardResponse {
            id: CardId(id),
            user_id: UserId(user_id),
            card_number: CardNumber::new(number),
            card_type: "debit".to_string(),
            expire_date: NaiveDate::from_ymd_opt(2029, 12, 31).unwrap(),
            cvv: "123".to_string(),
            card_provider: "visa".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_card_singletons_are_independent() {
        let cards = CardCache::new(store());
        let c = card(1, 3, "4111111111111111");

        cards.set_cached_card(&c.id, Some(&c)).await;
        cards.set_cached_card_by_user_id(&c.user_id, Some(&c)).await;
        cards
            .set_cached_card_by_card_number(&c.card_number, Some(&c))
            .await;

        cards.delete_cached_card_by_card_number(&c.card_number).await;

        assert_eq!(cards.get_cached_card(&CardId(1)).await, Some(c.clone()));
        assert_eq!(cards.get_cached_card_by_user_id(&UserId(3)).await, Some(c.clone()));
        assert_eq!(cards.get_cached_card_by_card_number(&c.card_number).await, None);
    }

    #[tokio::test]
    async fn test_dashboards() {
        let cards = CardCache::new(store());
        let number = CardNumber::new("4111111111111111");
        let global = DashboardCard {
            total_balance: 1_000,
            ..DashboardCard::default()
        };

        cards.set_dashboard_card_cache(&(), Some(&global)).await;
        assert_eq!(cards.get_dashboard_card_cache(&()).await, Some(global));
        assert_eq!(cards.get_dashboard_card_number_cache(&number).await, None);

        cards.set_dashboard_card_number_cache(&number, None).await;
        assert_eq!(cards.get_dashboard_card_number_cache(&number).await, None);

        let scoped = DashboardCardNumber {
            total_transfer_send: 5,
            ..DashboardCardNumber::default()
        };
        cards.set_dashboard_card_number_cache(&number, Some(&scoped)).await;
        assert_eq!(cards.get_dashboard_card_number_cache(&number).await, Some(scoped));
    }

    #[tokio::test]
    async fn test_balance_series_by_card() {
        let cards = CardCache::new(store());
        let req = CardYearRequest {
            card_number: CardNumber::new("4111"),
            year: 2024,
        };
        let series = vec![MonthlyBalance {
            month: "Feb".to_string(),
            total_balance: 250,
        }];

        cards
            .set_monthly_balance_by_card_number_cache(&req, Some(series.as_slice()))
            .await;

        assert_eq!(
            cards.get_monthly_balance_by_card_number_cache(&req).await,
            Some(series)
        );
        assert_eq!(
            cards.get_monthly_balance_cache(&YearRequest { year: 2024 }).await,
            None
        );
    }

    #[tokio::test]
    async fn test_saldo_by_card_number() {
        let saldos = SaldoCache::new(store());
        let now = Utc::now();
        let saldo = SaldoResponse {
            id: SaldoId(4),
            card_number: CardNumber::new("4111"),
            total_balance: 75_000,
            withdraw_amount: 0,
            withdraw_time: None,
            created_at: now,
            updated_at: now,
        };

        saldos
            .set_cached_saldo_by_card_number(&saldo.card_number, Some(&saldo))
            .await;
        assert_eq!(
            saldos.get_cached_saldo_by_card_number(&saldo.card_number).await,
            Some(saldo.clone())
        );
        assert_eq!(saldos.get_cached_saldo(&saldo.id).await, None);
    }

    #[tokio::test]
    async fn test_saldo_total_balance_is_month_scoped() {
        let saldos = SaldoCache::new(store());
        let march = MonthYearRequest {
            year: 2024,
            month: 3,
        };
        let april = MonthYearRequest {
            year: 2024,
            month: 4,
        };

        saldos.set_monthly_total_balance_cache(&march, None).await;
        assert_eq!(
            saldos.get_monthly_total_balance_cache(&march).await,
            Some(Vec::new())
        );
        assert_eq!(saldos.get_monthly_total_balance_cache(&april).await, None);
    }
}
