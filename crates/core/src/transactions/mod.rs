//! Transactions module - domain models, the summary aggregator, and the
//! transaction state container.

mod transactions_model;
mod transactions_service;
mod transactions_traits;



pub use transactions_model::{
    calculate_summary, NewTransaction, RemoteSummary, Transaction, TransactionFilters,
    TransactionReceipt, TransactionSummary, TransactionType, TransactionUpdate,
};
pub use transactions_service::TransactionStore;
pub use transactions_traits::TransactionsApi;
