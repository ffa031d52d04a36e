//! Session domain model.

use serde::{Deserialize, Serialize};

/// A live authenticated session as reported by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Identifier of the signed-in user; threads through every
    /// user-scoped API call.
    pub user_id: String,
    pub email: Option<String>,
    pub access_token: String,
}
