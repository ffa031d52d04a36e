//! Auth module - session model and the provider trait.

mod auth_model;
mod auth_traits;

pub use auth_model::Session;
pub use auth_traits::SessionProvider;
