//! API trait for transaction resources.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::transactions_model::{
    NewTransaction, RemoteSummary, Transaction, TransactionFilters, TransactionReceipt,
    TransactionUpdate,
};
use crate::errors::Result;

/// Remote transaction endpoints, one call per logical operation.
///
/// Stateless: no retries, no caching, no timeout policy beyond the
/// transport's own. Every call is scoped by `user_id`.
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    /// List transactions, newest first, honoring the given filters.
    async fn list_transactions(
        &self,
        user_id: &str,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>>;

    /// Fetch the aggregate summary sub-resource, optionally bounded by
    /// `end_date`.
    async fn get_summary(
        &self,
        user_id: &str,
        end_date: Option<NaiveDate>,
    ) -> Result<RemoteSummary>;

    async fn create_transaction(&self, new_transaction: &NewTransaction)
        -> Result<TransactionReceipt>;

    async fn update_transaction(
        &self,
        transaction_id: &str,
        user_id: &str,
        update: &TransactionUpdate,
    ) -> Result<()>;

    async fn delete_transaction(&self, transaction_id: &str, user_id: &str) -> Result<()>;
}
