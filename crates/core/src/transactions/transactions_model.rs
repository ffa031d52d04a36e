//! Transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of a recorded money flow.
///
/// The classification is deliberately binary: any unrecognized type
/// coming off the wire lands on `Expense`, matching how the aggregator
/// treats every non-income entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[serde(other)]
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// Domain model for a single recorded income or expense event.
///
/// `amount` is the UAH equivalent and is non-negative; the original
/// foreign-currency amount and the rate used to convert it are kept
/// alongside when the entry was not recorded in UAH.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub category_id: Option<String>,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub currency: String,
    pub is_foreign_currency: bool,
    pub amount_original: Option<Decimal>,
    pub exchange_rate: Option<Decimal>,
    pub created_at: Option<NaiveDateTime>,
}

/// Input model for recording a new transaction.
///
/// When `currency` is not UAH and `manual_rate` is absent, the remote
/// service resolves the official NBU rate for `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: String,
    pub category_id: Option<String>,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub currency: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub manual_rate: Option<Decimal>,
}

/// Partial update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_rate: Option<Decimal>,
}

/// Listing filters applied server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub transaction_type: Option<TransactionType>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// What the service reports back after a create, including the rate it
/// settled on for foreign-currency entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub used_rate: Decimal,
    pub amount_uah: Decimal,
}

/// Derived totals over the cached transaction list. Never persisted;
/// recomputed whenever the list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_profit: Decimal,
}

/// Aggregate payload of the `/transactions/summary` sub-resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub months_count: u32,
}

/// Sums a transaction list into income/expense/net totals.
///
/// Every non-income entry contributes to the expense total. The sum is
/// commutative, so the result is independent of list order.
pub fn calculate_summary(transactions: &[Transaction]) -> TransactionSummary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for tx in transactions {
        match tx.transaction_type {
            TransactionType::Income => total_income += tx.amount,
            TransactionType::Expense => total_expense += tx.amount,
        }
    }

    TransactionSummary {
        total_income,
        total_expense,
        net_profit: total_income - total_expense,
    }
}
