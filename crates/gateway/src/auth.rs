//! Supabase-backed session provider.
//!
//! Implements the core `SessionProvider` trait over the Supabase auth
//! endpoints. No local session caching: every `get_session` call
//! re-validates the held access token against the auth service.

use std::sync::RwLock;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use fop_core::auth::{Session, SessionProvider};
use fop_core::errors::{ApiError, Error, Result};

use crate::config::GatewayConfig;

#[derive(Debug, Deserialize)]
struct ApiAuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiTokenResponse {
    access_token: String,
    user: ApiAuthUser,
}

pub struct SupabaseSession {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
}

impl SupabaseSession {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: RwLock::new(None),
        })
    }

    /// Builds the provider from env-derived configuration. Missing
    /// values fail here, on first use, not at startup.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let base_url = config
            .supabase_url
            .as_deref()
            .ok_or_else(|| Error::MissingConfigKey("SUPABASE_URL".to_string()))?;
        let anon_key = config
            .supabase_anon_key
            .as_deref()
            .ok_or_else(|| Error::MissingConfigKey("SUPABASE_ANON_KEY".to_string()))?;
        Self::new(base_url, anon_key)
    }

    /// Signs in with email and password, keeping the access token for
    /// subsequent session checks.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        debug!("[SupabaseSession] POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Auth(format!(
                "sign-in rejected with status {}",
                status.as_u16()
            )));
        }

        let token: ApiTokenResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("{} - {}", e, body)))?;

        *self.access_token.write().unwrap() = Some(token.access_token.clone());

        Ok(Session {
            user_id: token.user.id,
            email: token.user.email,
            access_token: token.access_token,
        })
    }

    /// Drops the held token. The remote session expires on its own.
    pub fn sign_out(&self) {
        *self.access_token.write().unwrap() = None;
    }
}

#[async_trait]
impl SessionProvider for SupabaseSession {
    async fn get_session(&self) -> Result<Option<Session>> {
        let token = match self.access_token.read().unwrap().clone() {
            Some(token) => token,
            None => return Ok(None),
        };

        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            // Expired or revoked token reads as "no user".
            warn!("[SupabaseSession] Held token rejected ({}), treating as signed out", status);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: "session lookup failed".to_string(),
            }
            .into());
        }

        let user: ApiAuthUser = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(Some(Session {
            user_id: user.id,
            email: user.email,
            access_token: token,
        }))
    }
}
