//! Route table and the pure navigation decision.

use serde::{Deserialize, Serialize};

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Entry/login route (`/`).
    Auth,
    /// Onboarding wizard (`/onboarding`).
    Onboarding,
    /// Primary authenticated landing route (`/settings`).
    Settings,
}

/// Access level a route demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    RequiresAuth,
}

impl Route {
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Auth => RouteAccess::Public,
            Route::Onboarding | Route::Settings => RouteAccess::RequiresAuth,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Auth => "/",
            Route::Onboarding => "/onboarding",
            Route::Settings => "/settings",
        }
    }
}

/// Outcome of a navigation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed to the requested target unchanged.
    Proceed,
    /// Commit to a different route instead.
    Redirect(Route),
}

/// Decides where a navigation to `target` should land given whether a
/// live session exists. Pure: the guard resolves the session separately.
pub fn decide(target: Route, session_present: bool) -> NavigationDecision {
    if target.access() == RouteAccess::RequiresAuth && !session_present {
        NavigationDecision::Redirect(Route::Auth)
    } else if target == Route::Auth && session_present {
        NavigationDecision::Redirect(Route::Settings)
    } else {
        NavigationDecision::Proceed
    }
}
