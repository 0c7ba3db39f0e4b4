//! Aggregate series returned by the statistics endpoints.
//!
//! One series type per aggregate shape; each entity reuses them with its own
//! cache namespace.

use serde::{Deserialize, Serialize};

/// Total amount moved in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub total_amount: i64,
}

/// Total amount moved in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyAmount {
    pub year: String,
    pub total_amount: i64,
}

/// Volume for one payment method in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyMethod {
    pub month: String,
    pub payment_method: String,
    pub total_transactions: i64,
    pub total_amount: i64,
}

/// Volume for one payment method in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyMethod {
    pub year: String,
    pub payment_method: String,
    pub total_transactions: i64,
    pub total_amount: i64,
}

/// Count and amount of operations with a given outcome in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatus {
    pub year: String,
    pub month: String,
    pub total: i64,
    pub total_amount: i64,
}

/// Count and amount of operations with a given outcome in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyStatus {
    pub year: String,
    pub total: i64,
    pub total_amount: i64,
}

/// Aggregate card balance for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBalance {
    pub month: String,
    pub total_balance: i64,
}

/// Aggregate card balance for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyBalance {
    pub year: String,
    pub total_balance: i64,
}
