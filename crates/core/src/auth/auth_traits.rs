//! Provider trait for session retrieval.

use async_trait::async_trait;

use super::Session;
use crate::errors::Result;

/// Contract for the external auth provider.
///
/// There is no local caching: callers re-query on every use. A missing
/// session is `Ok(None)` ("no user"), not an error, so dependent
/// operations can short-circuit without raising.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn get_session(&self) -> Result<Option<Session>>;
}
