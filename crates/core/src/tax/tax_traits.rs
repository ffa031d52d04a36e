//! API trait for tax settings.

use async_trait::async_trait;

use super::tax_model::{FopSettings, FopSettingsUpdate};
use crate::errors::Result;

/// Remote tax settings endpoints, scoped by user.
#[async_trait]
pub trait TaxSettingsApi: Send + Sync {
    /// Fetch the user's tax settings. The service creates defaults on
    /// first access, so this does not fail with "not found" for a
    /// known user.
    async fn get_settings(&self, user_id: &str) -> Result<FopSettings>;

    /// Patch the user's tax settings with the set fields.
    async fn update_settings(
        &self,
        user_id: &str,
        update: &FopSettingsUpdate,
    ) -> Result<FopSettings>;
}
