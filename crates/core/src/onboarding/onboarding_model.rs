//! Onboarding wizard state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tax::{FopGroup, KvedActivity};

/// Number of screens in the onboarding wizard.
pub const TOTAL_ONBOARDING_STEPS: u8 = 4;

/// What the user reports about their business during onboarding.
/// Transient: discarded once the flow is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnswers {
    pub is_fop: bool,
    /// Foreign economic activity (ZED).
    pub has_zed: bool,
    pub annual_income: Option<Decimal>,
    pub employees_count: u32,
    pub selected_kveds: Vec<KvedActivity>,
    pub recommended_group: FopGroup,
}

impl Default for OnboardingAnswers {
    fn default() -> Self {
        Self {
            is_fop: true,
            has_zed: false,
            annual_income: None,
            employees_count: 0,
            selected_kveds: Vec::new(),
            recommended_group: FopGroup::Three,
        }
    }
}
