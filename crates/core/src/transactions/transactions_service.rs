//! Transaction state container.
//!
//! Owns the UI-facing transaction cache: the fetched list, the grouped
//! categories, active filters, and the derived summary. Mutations call
//! the remote service and then refresh, except delete which prunes the
//! local cache directly to avoid a redundant round trip.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::join;
use log::{debug, error};

use super::transactions_model::{
    calculate_summary, NewTransaction, RemoteSummary, Transaction, TransactionFilters,
    TransactionSummary, TransactionUpdate,
};
use super::transactions_traits::TransactionsApi;
use crate::auth::SessionProvider;
use crate::categories::{CategoriesApi, CategoryGroups, NewCategory};
use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::errors::Result;

pub struct TransactionStore {
    transactions_api: Arc<dyn TransactionsApi>,
    categories_api: Arc<dyn CategoriesApi>,
    session_provider: Arc<dyn SessionProvider>,

    pub transactions: Vec<Transaction>,
    pub categories: CategoryGroups,
    pub filters: TransactionFilters,
    pub summary: TransactionSummary,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl TransactionStore {
    pub fn new(
        transactions_api: Arc<dyn TransactionsApi>,
        categories_api: Arc<dyn CategoriesApi>,
        session_provider: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            transactions_api,
            categories_api,
            session_provider,
            transactions: Vec::new(),
            categories: CategoryGroups::default(),
            filters: TransactionFilters::default(),
            summary: TransactionSummary::default(),
            is_loading: false,
            error: None,
        }
    }

    /// Active filters with the base page limit applied.
    fn effective_filters(&self) -> TransactionFilters {
        let mut filters = self.filters.clone();
        if filters.limit.is_none() {
            filters.limit = Some(DEFAULT_PAGE_LIMIT);
        }
        filters
    }

    /// Fetches the transaction list and recomputes the summary.
    ///
    /// With no signed-in user this is a no-op. On failure the previous
    /// cache is left untouched and the error surfaces through `error`.
    pub async fn fetch_transactions(&mut self) {
        self.is_loading = true;
        self.error = None;

        if let Some(session) = self.resolve_session().await {
            match self
                .transactions_api
                .list_transactions(&session.user_id, &self.effective_filters())
                .await
            {
                Ok(transactions) => {
                    debug!("[TransactionStore] Loaded {} transactions", transactions.len());
                    self.transactions = transactions;
                    self.summary = calculate_summary(&self.transactions);
                }
                Err(e) => {
                    error!("[TransactionStore] Failed to load transactions: {}", e);
                    self.error = Some("Не вдалося завантажити транзакції".to_string());
                }
            }
        }

        self.is_loading = false;
    }

    /// Fetches the grouped category list, overwriting the cached one.
    pub async fn fetch_categories(&mut self) {
        if let Some(session) = self.resolve_session().await {
            match self.categories_api.list_categories(&session.user_id).await {
                Ok(categories) => self.categories = categories,
                Err(e) => {
                    error!("[TransactionStore] Failed to load categories: {}", e);
                    self.error = Some("Не вдалося завантажити категорії".to_string());
                }
            }
        }
    }

    /// Loads transactions and categories together. The two requests run
    /// concurrently; the load is done when both have completed.
    pub async fn fetch_initial_data(&mut self) {
        self.is_loading = true;
        self.error = None;

        if let Some(session) = self.resolve_session().await {
            let user_id = session.user_id;
            let filters = self.effective_filters();
            let (tx_result, cat_result) = join!(
                self.transactions_api.list_transactions(&user_id, &filters),
                self.categories_api.list_categories(&user_id),
            );

            match tx_result {
                Ok(transactions) => {
                    self.transactions = transactions;
                    self.summary = calculate_summary(&self.transactions);
                }
                Err(e) => {
                    error!("[TransactionStore] Failed to load transactions: {}", e);
                    self.error = Some("Не вдалося завантажити транзакції".to_string());
                }
            }

            match cat_result {
                Ok(categories) => self.categories = categories,
                Err(e) => {
                    error!("[TransactionStore] Failed to load categories: {}", e);
                    self.error = Some("Не вдалося завантажити категорії".to_string());
                }
            }
        }

        self.is_loading = false;
    }

    /// Recomputes the derived summary over the cached list.
    pub fn recalculate_summary(&mut self) {
        self.summary = calculate_summary(&self.transactions);
    }

    /// Records a transaction remotely, then reloads the list.
    pub async fn add_transaction(&mut self, new_transaction: NewTransaction) -> Result<()> {
        self.transactions_api
            .create_transaction(&new_transaction)
            .await?;
        self.fetch_transactions().await;
        Ok(())
    }

    /// Patches a transaction remotely, then reloads the list.
    pub async fn edit_transaction(
        &mut self,
        transaction_id: &str,
        user_id: &str,
        update: TransactionUpdate,
    ) -> Result<()> {
        self.transactions_api
            .update_transaction(transaction_id, user_id, &update)
            .await?;
        self.fetch_transactions().await;
        Ok(())
    }

    /// Deletes remotely, then prunes the local cache and recomputes the
    /// summary instead of refetching.
    pub async fn delete_transaction(&mut self, transaction_id: &str, user_id: &str) -> Result<()> {
        self.transactions_api
            .delete_transaction(transaction_id, user_id)
            .await?;
        self.transactions.retain(|t| t.id != transaction_id);
        self.recalculate_summary();
        Ok(())
    }

    /// Fetches the service-side aggregate for the signed-in user.
    pub async fn remote_summary(&self, end_date: Option<NaiveDate>) -> Result<Option<RemoteSummary>> {
        match self.resolve_session().await {
            Some(session) => {
                let summary = self
                    .transactions_api
                    .get_summary(&session.user_id, end_date)
                    .await?;
                Ok(Some(summary))
            }
            None => Ok(None),
        }
    }

    /// Creates a category remotely, then reloads the category list.
    pub async fn create_category(&mut self, new_category: NewCategory) -> Result<()> {
        self.categories_api.create_category(&new_category).await?;
        self.fetch_categories().await;
        Ok(())
    }

    /// Deletes a category remotely, then reloads the category list.
    pub async fn remove_category(&mut self, category_id: &str, user_id: &str) -> Result<()> {
        self.categories_api
            .delete_category(category_id, user_id)
            .await?;
        self.fetch_categories().await;
        Ok(())
    }

    /// Missing session short-circuits the dependent operation; a
    /// provider failure is recorded like any other load failure.
    async fn resolve_session(&self) -> Option<crate::auth::Session> {
        match self.session_provider.get_session().await {
            Ok(session) => session,
            Err(e) => {
                error!("[TransactionStore] Session lookup failed: {}", e);
                None
            }
        }
    }
}
