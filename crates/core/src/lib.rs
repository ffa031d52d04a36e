//! FOP Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the FOP assistant:
//! tax group rules, transaction aggregation, and the state containers
//! that drive the UI layer. It is transport-agnostic and defines API
//! traits that are implemented by the `gateway` crate.

pub mod auth;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod navigation;
pub mod onboarding;
pub mod profiles;
pub mod tax;
pub mod transactions;

// Re-export common types from the transactions module
pub use transactions::TransactionType;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
