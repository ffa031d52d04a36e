//! Onboarding state container.
//!
//! Drives the wizard through its steps, derives the recommended tax
//! group from the collected answers, and submits the result: the
//! profile's FOP flag first, then the tax settings when the user is a
//! FOP. Submission errors propagate to the caller after the loading
//! flag resets.

use std::sync::Arc;

use log::error;
use rust_decimal::Decimal;

use super::onboarding_model::{OnboardingAnswers, TOTAL_ONBOARDING_STEPS};
use crate::auth::SessionProvider;
use crate::constants::{
    DEFAULT_ESV_VALUE, DEFAULT_GROUP_3_TAX_PERCENT, DEFAULT_MILITARY_TAX_PERCENT,
};
use crate::errors::{Error, Result};
use crate::profiles::{ProfileUpdate, ProfilesApi};
use crate::tax::{recommend_group, FopGroup, FopSettingsUpdate, TaxSettingsApi};

pub struct OnboardingStore {
    profiles_api: Arc<dyn ProfilesApi>,
    settings_api: Arc<dyn TaxSettingsApi>,
    session_provider: Arc<dyn SessionProvider>,

    pub current_step: u8,
    pub answers: OnboardingAnswers,
    pub is_loading: bool,
}

impl OnboardingStore {
    pub fn new(
        profiles_api: Arc<dyn ProfilesApi>,
        settings_api: Arc<dyn TaxSettingsApi>,
        session_provider: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            profiles_api,
            settings_api,
            session_provider,
            current_step: 1,
            answers: OnboardingAnswers::default(),
            is_loading: false,
        }
    }

    pub fn next_step(&mut self) {
        if self.current_step < TOTAL_ONBOARDING_STEPS {
            self.current_step += 1;
        }
    }

    pub fn prev_step(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Re-derives the recommended group from the current answers.
    pub fn calculate_recommendation(&mut self) {
        self.answers.recommended_group = recommend_group(
            self.answers.has_zed,
            self.answers.annual_income.unwrap_or(Decimal::ZERO),
            self.answers.employees_count,
            &self.answers.selected_kveds,
        );
    }

    /// Persists the collected answers for the signed-in user.
    pub async fn submit(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.submit_inner().await;
        self.is_loading = false;

        if let Err(e) = &result {
            error!("[Onboarding] Save failed: {}", e);
        }
        result
    }

    async fn submit_inner(&self) -> Result<()> {
        let session = self
            .session_provider
            .get_session()
            .await?
            .ok_or_else(|| Error::Auth("no signed-in user".to_string()))?;

        self.profiles_api
            .update_profile(
                &session.user_id,
                &ProfileUpdate {
                    is_fop: Some(self.answers.is_fop),
                    ..Default::default()
                },
            )
            .await?;

        if self.answers.is_fop {
            let group = self.answers.recommended_group;
            let income_tax_percent = if group == FopGroup::Three {
                DEFAULT_GROUP_3_TAX_PERCENT
            } else {
                Decimal::ZERO
            };

            self.settings_api
                .update_settings(
                    &session.user_id,
                    &FopSettingsUpdate {
                        fop_group: Some(group),
                        is_zed: Some(self.answers.has_zed),
                        income_tax_percent: Some(income_tax_percent),
                        military_tax_percent: Some(DEFAULT_MILITARY_TAX_PERCENT),
                        esv_value: Some(DEFAULT_ESV_VALUE),
                    },
                )
                .await?;
        }

        Ok(())
    }
}
