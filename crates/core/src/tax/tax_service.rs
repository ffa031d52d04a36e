//! Pure tax rules: group recommendation, restriction checks, and
//! period estimates. No I/O; everything here is total over its inputs.

use rust_decimal::Decimal;

use super::tax_constants::{
    FIXED_MILITARY_TAX, GROUP_1_SINGLE_TAX, GROUP_2_INCOME_LIMIT, GROUP_2_MAX_EMPLOYEES,
    GROUP_2_SINGLE_TAX, GROUP_3_MILITARY_RATE, GROUP_3_NON_VAT_RATE, GROUP_3_VAT_RATE,
    LIMIT_WARNING_RATIO, MIN_ESV, VAT_REGISTRATION_THRESHOLD,
};
use super::tax_model::{
    FopGroup, FopSettings, GroupViolation, KvedActivity, PaymentCalendarEntry, ReportingPeriod,
    TaxEstimate, TaxWarning,
};

/// Recommends a simplified-taxation group for the answers collected
/// during onboarding. First matching rule wins:
///
/// 1. Foreign economic activity (ZED) forces group 3.
/// 2. Annual income above the group-2 limit forces group 3.
/// 3. More than 10 employees forces group 3.
/// 4. Any selected KVED eligible for group 3 only forces group 3.
/// 5. Otherwise group 2.
pub fn recommend_group(
    has_zed: bool,
    annual_income: Decimal,
    employees_count: u32,
    selected_kveds: &[KvedActivity],
) -> FopGroup {
    if has_zed {
        return FopGroup::Three;
    }
    if annual_income > GROUP_2_INCOME_LIMIT {
        return FopGroup::Three;
    }
    if employees_count > GROUP_2_MAX_EMPLOYEES {
        return FopGroup::Three;
    }
    let needs_group_3 = selected_kveds
        .iter()
        .any(|k| k.allowed_groups.len() == 1 && k.allowed_groups.contains(&FopGroup::Three));
    if needs_group_3 {
        return FopGroup::Three;
    }
    FopGroup::Two
}

/// Checks the hard restrictions the registered group imposes against
/// the reported annual income and head count.
pub fn verify_group_restrictions(
    settings: &FopSettings,
    annual_income: Decimal,
) -> Vec<GroupViolation> {
    let mut violations = Vec::new();

    match settings.fop_group {
        FopGroup::One => {
            if let Some(limit) = settings.fop_group.income_limit() {
                if annual_income > limit {
                    violations.push(GroupViolation::IncomeLimitExceeded {
                        group: FopGroup::One,
                        limit,
                    });
                }
            }
            if settings.has_employees {
                violations.push(GroupViolation::EmployeesProhibited(FopGroup::One));
            }
        }
        FopGroup::Two => {
            if annual_income > GROUP_2_INCOME_LIMIT {
                violations.push(GroupViolation::IncomeLimitExceeded {
                    group: FopGroup::Two,
                    limit: GROUP_2_INCOME_LIMIT,
                });
            }
            if settings.employees_count > GROUP_2_MAX_EMPLOYEES {
                violations.push(GroupViolation::TooManyEmployees {
                    group: FopGroup::Two,
                    max: GROUP_2_MAX_EMPLOYEES,
                });
            }
        }
        FopGroup::Three => {
            if let Some(limit) = settings.fop_group.income_limit() {
                if annual_income > limit {
                    violations.push(GroupViolation::GeneralSystemRequired { limit });
                }
            }
        }
        FopGroup::Four => {
            if settings.has_employees {
                violations.push(GroupViolation::EmployeesProhibited(FopGroup::Four));
            }
        }
    }

    violations
}

/// Soft warnings: approaching the group limit or crossing the VAT
/// registration threshold.
pub fn limit_warnings(settings: &FopSettings, annual_income: Decimal) -> Vec<TaxWarning> {
    let mut warnings = Vec::new();

    if let Some(limit) = settings.fop_group.income_limit() {
        if annual_income >= limit * LIMIT_WARNING_RATIO {
            warnings.push(TaxWarning::LimitApproaching);
        }
    }

    if !settings.is_vat_payer && annual_income > VAT_REGISTRATION_THRESHOLD {
        warnings.push(TaxWarning::VatRegistrationRequired);
    }

    warnings
}

/// Estimates taxes for one month of `monthly_income`, scaled to
/// `period`. The minimum ESV is charged even on zero income.
///
/// Group 4's single tax depends on land valuation held by the tax
/// office, so only the fixed levies are estimated for it.
pub fn estimate_taxes(
    settings: &FopSettings,
    monthly_income: Decimal,
    period: ReportingPeriod,
) -> TaxEstimate {
    let esv = settings.esv_value.unwrap_or(MIN_ESV);

    let (single_tax, military_tax) = match settings.fop_group {
        FopGroup::One => (GROUP_1_SINGLE_TAX, FIXED_MILITARY_TAX),
        FopGroup::Two => (GROUP_2_SINGLE_TAX, FIXED_MILITARY_TAX),
        FopGroup::Three => {
            let rate = settings
                .income_tax_percent
                .map(|p| p / Decimal::ONE_HUNDRED)
                .unwrap_or(if settings.is_vat_payer {
                    GROUP_3_VAT_RATE
                } else {
                    GROUP_3_NON_VAT_RATE
                });
            let military_rate = settings
                .military_tax_percent
                .map(|p| p / Decimal::ONE_HUNDRED)
                .unwrap_or(GROUP_3_MILITARY_RATE);
            (monthly_income * rate, monthly_income * military_rate)
        }
        FopGroup::Four => (Decimal::ZERO, FIXED_MILITARY_TAX),
    };

    let monthly_total = single_tax + esv + military_tax;
    let months = Decimal::from(period.months());

    TaxEstimate {
        single_tax: (single_tax * months).round_dp(2),
        esv: (esv * months).round_dp(2),
        military_tax: (military_tax * months).round_dp(2),
        total_monthly_tax: monthly_total.round_dp(2),
        total_quarterly_tax: (monthly_total * Decimal::from(3u32)).round_dp(2),
        total_annual_tax: (monthly_total * Decimal::from(12u32)).round_dp(2),
    }
}

/// Static payment deadlines per group.
pub fn payment_calendar() -> Vec<PaymentCalendarEntry> {
    use FopGroup::{Four, One, Three, Two};

    vec![
        PaymentCalendarEntry {
            event: "ЄСВ (Єдиний соціальний внесок)".to_string(),
            deadline: "Щомісяця, до 20-го числа".to_string(),
            groups: vec![One, Two, Three, Four],
        },
        PaymentCalendarEntry {
            event: "Єдиний податок".to_string(),
            deadline: "Щомісяця, до 20-го числа".to_string(),
            groups: vec![One, Two],
        },
        PaymentCalendarEntry {
            event: "Єдиний податок".to_string(),
            deadline: "Щокварталу, до 20-го числа".to_string(),
            groups: vec![Three],
        },
        PaymentCalendarEntry {
            event: "Єдиний податок (нарахована частка)".to_string(),
            deadline: "Раз на рік".to_string(),
            groups: vec![Four],
        },
        PaymentCalendarEntry {
            event: "Військовий збір (фіксований)".to_string(),
            deadline: "Щомісяця, до 20-го числа".to_string(),
            groups: vec![One, Two, Four],
        },
        PaymentCalendarEntry {
            event: "Військовий збір (1% від доходу)".to_string(),
            deadline: "Щокварталу, до 20-го числа".to_string(),
            groups: vec![Three],
        },
    ]
}
