//! Tax module - FOP group rules, tax estimation, and settings.

mod tax_constants;
mod tax_model;
mod tax_service;
mod tax_traits;

#[cfg(test)]
mod tax_service_tests;

pub use tax_constants::*;
pub use tax_model::{
    FopGroup, FopSettings, FopSettingsUpdate, GroupViolation, KvedActivity, PaymentCalendarEntry,
    ReportingPeriod, TaxEstimate, TaxWarning,
};
pub use tax_service::{
    estimate_taxes, limit_warnings, payment_calendar, recommend_group, verify_group_restrictions,
};
pub use tax_traits::TaxSettingsApi;
