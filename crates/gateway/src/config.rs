//! Environment-driven gateway configuration.

use log::warn;

use crate::client::DEFAULT_API_URL;

/// External endpoints and credentials read from the process environment.
///
/// Missing auth values only log a diagnostic here; the session provider
/// fails on first use instead of halting startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the FOP assistant service (`FOP_API_URL`).
    pub api_url: String,
    /// Supabase project URL (`SUPABASE_URL`).
    pub supabase_url: Option<String>,
    /// Supabase anon key (`SUPABASE_ANON_KEY`).
    pub supabase_anon_key: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("FOP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let supabase_url = std::env::var("SUPABASE_URL").ok();
        let supabase_anon_key = std::env::var("SUPABASE_ANON_KEY").ok();

        if supabase_url.is_none() || supabase_anon_key.is_none() {
            warn!("[Gateway] SUPABASE_URL / SUPABASE_ANON_KEY not set; session lookups will fail");
        }

        Self {
            api_url,
            supabase_url,
            supabase_anon_key,
        }
    }
}
