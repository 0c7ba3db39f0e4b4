//! Money-movement records: topups, transactions, transfers, withdrawals.

use crate::{CardNumber, MerchantId, TopupId, TransactionId, TransferId, WithdrawId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A balance topup onto a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopupResponse {
    pub id: TopupId,
    pub card_number: CardNumber,
    pub topup_no: String,
    pub topup_amount: i64,
    pub topup_method: String,
    pub topup_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A card payment to a merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: TransactionId,
    pub card_number: CardNumber,
    pub amount: i64,
    pub payment_method: String,
    pub merchant_id: MerchantId,
    pub transaction_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A card-to-card transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub id: TransferId,
    pub transfer_from: CardNumber,
    pub transfer_to: CardNumber,
    pub transfer_amount: i64,
    pub transfer_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A withdrawal from a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawResponse {
    pub id: WithdrawId,
    pub card_number: CardNumber,
    pub withdraw_amount: i64,
    pub withdraw_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
