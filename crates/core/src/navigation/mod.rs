//! Navigation module - routes, access levels, and the session guard.

mod navigation_model;
mod navigation_service;

pub use navigation_model::{decide, NavigationDecision, Route, RouteAccess};
pub use navigation_service::RouteGuard;
