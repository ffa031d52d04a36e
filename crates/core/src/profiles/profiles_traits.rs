//! API trait for profile resources.

use async_trait::async_trait;

use super::profiles_model::{NewProfile, Profile, ProfileUpdate};
use crate::errors::Result;

/// Remote profile endpoints, addressed by user id path segment.
#[async_trait]
pub trait ProfilesApi: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Profile>;

    async fn create_profile(&self, new_profile: &NewProfile) -> Result<Profile>;

    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile>;

    async fn delete_profile(&self, user_id: &str) -> Result<()>;
}
