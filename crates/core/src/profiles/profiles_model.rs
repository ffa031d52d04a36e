//! Profile domain models.

use serde::{Deserialize, Serialize};

/// A user profile. `id` equals the auth provider's user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub is_fop: bool,
    pub full_name: Option<String>,
}

/// Input model for explicit profile creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub user_id: String,
    pub is_fop: bool,
    pub full_name: Option<String>,
}

/// Partial profile update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}
