//! Category domain models.

use serde::{Deserialize, Serialize};

use crate::transactions::TransactionType;

/// A user-defined or system-seeded transaction category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    /// `None` marks a system category shared by every user.
    pub user_id: Option<String>,
    pub name: String,
    pub category_type: TransactionType,
    /// System categories that only make sense for registered FOPs.
    #[serde(default)]
    pub is_fop_only: bool,
}

/// Input model for creating a user category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub category_type: TransactionType,
    pub user_id: String,
}

/// Categories as the remote service groups them for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroups {
    pub income: Vec<Category>,
    pub expense: Vec<Category>,
    pub all: Vec<Category>,
    /// Whether the service resolved the requesting user as a FOP.
    #[serde(default)]
    pub user_is_fop: bool,
}
