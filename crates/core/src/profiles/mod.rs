//! Profiles module - domain models and the API trait.

mod profiles_model;
mod profiles_traits;

pub use profiles_model::{NewProfile, Profile, ProfileUpdate};
pub use profiles_traits::ProfilesApi;
