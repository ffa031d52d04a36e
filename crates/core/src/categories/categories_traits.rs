//! API trait for category resources.

use async_trait::async_trait;

use super::categories_model::{Category, CategoryGroups, NewCategory};
use crate::errors::Result;

/// Remote category endpoints. System categories are included in list
/// results; only the user's own categories can be created or deleted.
#[async_trait]
pub trait CategoriesApi: Send + Sync {
    async fn list_categories(&self, user_id: &str) -> Result<CategoryGroups>;

    async fn create_category(&self, new_category: &NewCategory) -> Result<Category>;

    async fn delete_category(&self, category_id: &str, user_id: &str) -> Result<()>;
}
