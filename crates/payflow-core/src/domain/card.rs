//! Card, saldo, and card dashboard records.

use crate::{CardId, CardNumber, SaldoId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A payment card as returned by the card service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardResponse {
    pub id: CardId,
    pub user_id: UserId,
    pub card_number: CardNumber,
    pub card_type: String,
    pub expire_date: NaiveDate,
    pub cvv: String,
    pub card_provider: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The balance held on one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaldoResponse {
    pub id: SaldoId,
    pub card_number: CardNumber,
    pub total_balance: i64,
    pub withdraw_amount: i64,
    pub withdraw_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// System-wide card totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCard {
    pub total_balance: i64,
    pub total_topup: i64,
    pub total_withdraw: i64,
    pub total_transaction: i64,
    pub total_transfer: i64,
}

/// Card totals for a single card number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCardNumber {
    pub total_balance: i64,
    pub total_topup: i64,
    pub total_withdraw: i64,
    pub total_transaction: i64,
    pub total_transfer_send: i64,
    pub total_transfer_receiver: i64,
}
