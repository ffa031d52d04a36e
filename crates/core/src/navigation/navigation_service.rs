//! Session guard executed before every navigation commit.

use std::sync::Arc;

use log::debug;

use super::navigation_model::{decide, NavigationDecision, Route};
use crate::auth::SessionProvider;
use crate::errors::Result;

/// Guards navigations by re-querying the auth provider on every check.
///
/// Navigation is held pending the session query; there is no
/// cancellation path, a slow query simply delays the commit.
pub struct RouteGuard {
    session_provider: Arc<dyn SessionProvider>,
}

impl RouteGuard {
    pub fn new(session_provider: Arc<dyn SessionProvider>) -> Self {
        Self { session_provider }
    }

    /// Resolves the session and returns the navigation decision for
    /// `target`. A provider failure propagates to the caller.
    pub async fn check(&self, target: Route) -> Result<NavigationDecision> {
        let session = self.session_provider.get_session().await?;
        let decision = decide(target, session.is_some());
        debug!(
            "[RouteGuard] target={} session_present={} -> {:?}",
            target.path(),
            session.is_some(),
            decision
        );
        Ok(decision)
    }
}
