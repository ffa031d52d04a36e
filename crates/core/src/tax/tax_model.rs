//! Tax domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax_constants::{GROUP_1_INCOME_LIMIT, GROUP_2_INCOME_LIMIT, GROUP_3_INCOME_LIMIT};

/// Simplified-taxation group a sole proprietor registers under.
///
/// Serialized as its registry number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FopGroup {
    One,
    Two,
    Three,
    Four,
}

impl FopGroup {
    /// Annual income limit for the group, if the group has one that
    /// keeps it on the simplified system.
    pub fn income_limit(&self) -> Option<Decimal> {
        match self {
            FopGroup::One => Some(GROUP_1_INCOME_LIMIT),
            FopGroup::Two => Some(GROUP_2_INCOME_LIMIT),
            FopGroup::Three => Some(GROUP_3_INCOME_LIMIT),
            FopGroup::Four => None,
        }
    }
}

impl From<FopGroup> for u8 {
    fn from(group: FopGroup) -> u8 {
        match group {
            FopGroup::One => 1,
            FopGroup::Two => 2,
            FopGroup::Three => 3,
            FopGroup::Four => 4,
        }
    }
}

impl TryFrom<u8> for FopGroup {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(FopGroup::One),
            2 => Ok(FopGroup::Two),
            3 => Ok(FopGroup::Three),
            4 => Ok(FopGroup::Four),
            other => Err(format!("unknown FOP group: {}", other)),
        }
    }
}

impl std::fmt::Display for FopGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A KVED business-activity code with the groups it is eligible for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KvedActivity {
    pub code: String,
    pub name: String,
    pub allowed_groups: Vec<FopGroup>,
}

/// A user's tax settings as held by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FopSettings {
    pub fop_group: FopGroup,
    pub is_zed: bool,
    pub income_tax_percent: Option<Decimal>,
    pub military_tax_percent: Option<Decimal>,
    pub esv_value: Option<Decimal>,
    #[serde(default)]
    pub is_vat_payer: bool,
    #[serde(default)]
    pub has_employees: bool,
    #[serde(default)]
    pub employees_count: u32,
}

/// Partial tax settings update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FopSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fop_group: Option<FopGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_zed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_tax_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub military_tax_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esv_value: Option<Decimal>,
}

/// Period the tax estimate is scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    Month,
    Quarter,
    Year,
}

impl ReportingPeriod {
    pub fn months(&self) -> u32 {
        match self {
            ReportingPeriod::Month => 1,
            ReportingPeriod::Quarter => 3,
            ReportingPeriod::Year => 12,
        }
    }
}

/// Hard violation of the rules a group imposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupViolation {
    /// Annual income exceeds the group's limit.
    IncomeLimitExceeded { group: FopGroup, limit: Decimal },
    /// The group prohibits employees entirely.
    EmployeesProhibited(FopGroup),
    /// Head count exceeds the group's cap.
    TooManyEmployees { group: FopGroup, max: u32 },
    /// Income is past the group-3 limit; the general system applies.
    GeneralSystemRequired { limit: Decimal },
}

impl std::fmt::Display for GroupViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupViolation::IncomeLimitExceeded { group, limit } => {
                write!(f, "group {} income limit of UAH {} exceeded", group, limit)
            }
            GroupViolation::EmployeesProhibited(group) => {
                write!(f, "group {} prohibits employees", group)
            }
            GroupViolation::TooManyEmployees { group, max } => {
                write!(f, "group {} allows at most {} employees", group, max)
            }
            GroupViolation::GeneralSystemRequired { limit } => {
                write!(
                    f,
                    "income exceeds UAH {}; transition to the general system required",
                    limit
                )
            }
        }
    }
}

/// Soft warning about an approaching obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxWarning {
    /// Annual income has reached 90% of the group limit.
    LimitApproaching,
    /// Income requires VAT registration.
    VatRegistrationRequired,
}

/// Tax amounts estimated for a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxEstimate {
    pub single_tax: Decimal,
    pub esv: Decimal,
    pub military_tax: Decimal,
    pub total_monthly_tax: Decimal,
    pub total_quarterly_tax: Decimal,
    pub total_annual_tax: Decimal,
}

/// A deadline in the payment calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCalendarEntry {
    pub event: String,
    pub deadline: String,
    pub groups: Vec<FopGroup>,
}
