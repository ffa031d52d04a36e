//! Onboarding module - wizard state and the submission flow.

mod onboarding_model;
mod onboarding_service;

#[cfg(test)]
mod onboarding_service_tests;

pub use onboarding_model::{OnboardingAnswers, TOTAL_ONBOARDING_STEPS};
pub use onboarding_service::OnboardingStore;
