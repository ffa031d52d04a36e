//! FOP Gateway - HTTP access to the remote FOP assistant service.
//!
//! This crate implements the API traits defined in `fop-core` over
//! reqwest: the resource endpoints of the FOP assistant backend, the
//! Supabase session provider, and the NBU exchange-rate lookup.

pub mod auth;
pub mod client;
pub mod config;
pub mod rates;

// Re-export commonly used types
pub use auth::SupabaseSession;
pub use client::{FopApiClient, DEFAULT_API_URL};
pub use config::GatewayConfig;
pub use rates::NbuRateClient;
