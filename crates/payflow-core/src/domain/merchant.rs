//! Merchant, merchant document, and merchant transaction records.

use crate::{ApiKey, CardNumber, MerchantDocumentId, MerchantId, TransactionId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merchant as returned by the merchant service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantResponse {
    pub id: MerchantId,
    pub name: String,
    pub api_key: ApiKey,
    pub user_id: UserId,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A document a merchant uploaded for verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantDocumentResponse {
    pub id: MerchantDocumentId,
    pub merchant_id: MerchantId,
    pub document_type: String,
    pub document_url: String,
    pub status: String,
    pub note: String,
    pub uploaded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A payment received by a merchant, joined with the merchant's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantTransactionResponse {
    pub id: TransactionId,
    pub card_number: CardNumber,
    pub amount: i64,
    pub payment_method: String,
    pub merchant_id: MerchantId,
    pub merchant_name: String,
    pub transaction_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
