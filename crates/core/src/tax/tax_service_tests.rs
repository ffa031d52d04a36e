#[cfg(test)]
mod tests {
    use crate::tax::{
        estimate_taxes, limit_warnings, payment_calendar, recommend_group,
        verify_group_restrictions, FopGroup, FopSettings, GroupViolation, KvedActivity,
        ReportingPeriod, TaxWarning, FIXED_MILITARY_TAX, GROUP_2_INCOME_LIMIT,
        GROUP_2_SINGLE_TAX, MIN_ESV,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn kved(code: &str, allowed_groups: Vec<FopGroup>) -> KvedActivity {
        KvedActivity {
            code: code.to_string(),
            name: format!("Activity {}", code),
            allowed_groups,
        }
    }

    fn settings(group: FopGroup) -> FopSettings {
        FopSettings {
            fop_group: group,
            is_zed: false,
            income_tax_percent: None,
            military_tax_percent: None,
            esv_value: None,
            is_vat_payer: false,
            has_employees: false,
            employees_count: 0,
        }
    }

    // ==================== recommend_group ====================

    #[test]
    fn zed_forces_group_three_regardless_of_other_fields() {
        assert_eq!(
            recommend_group(true, Decimal::ZERO, 0, &[]),
            FopGroup::Three
        );
        assert_eq!(
            recommend_group(true, dec!(100), 2, &[kved("62.01", vec![FopGroup::Two])]),
            FopGroup::Three
        );
    }

    #[test]
    fn income_over_limit_forces_group_three() {
        assert_eq!(
            recommend_group(false, dec!(6_000_000), 2, &[]),
            FopGroup::Three
        );
    }

    #[test]
    fn income_at_limit_stays_group_two() {
        assert_eq!(
            recommend_group(false, GROUP_2_INCOME_LIMIT, 2, &[]),
            FopGroup::Two
        );
    }

    #[test]
    fn more_than_ten_employees_forces_group_three() {
        assert_eq!(recommend_group(false, dec!(100_000), 11, &[]), FopGroup::Three);
        assert_eq!(recommend_group(false, dec!(100_000), 10, &[]), FopGroup::Two);
    }

    #[test]
    fn kved_restricted_to_group_three_forces_group_three() {
        let kveds = vec![
            kved("62.01", vec![FopGroup::Two, FopGroup::Three]),
            kved("64.19", vec![FopGroup::Three]),
        ];
        assert_eq!(
            recommend_group(false, dec!(100_000), 2, &kveds),
            FopGroup::Three
        );
    }

    #[test]
    fn kved_allowing_both_groups_does_not_fire() {
        let kveds = vec![kved("62.01", vec![FopGroup::Two, FopGroup::Three])];
        assert_eq!(recommend_group(false, dec!(100_000), 2, &kveds), FopGroup::Two);
    }

    #[test]
    fn quiet_inputs_recommend_group_two() {
        assert_eq!(recommend_group(false, dec!(100_000), 2, &[]), FopGroup::Two);
        // Empty KVED list can never trigger the singleton rule.
        assert_eq!(recommend_group(false, Decimal::ZERO, 0, &[]), FopGroup::Two);
    }

    // ==================== verify_group_restrictions ====================

    #[test]
    fn group_one_rejects_employees_and_excess_income() {
        let mut s = settings(FopGroup::One);
        s.has_employees = true;
        let violations = verify_group_restrictions(&s, dec!(2_000_000));
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|v| matches!(v, GroupViolation::EmployeesProhibited(FopGroup::One))));
        assert!(violations
            .iter()
            .any(|v| matches!(v, GroupViolation::IncomeLimitExceeded { .. })));
    }

    #[test]
    fn group_two_caps_employees_at_ten() {
        let mut s = settings(FopGroup::Two);
        s.employees_count = 11;
        let violations = verify_group_restrictions(&s, dec!(100_000));
        assert_eq!(
            violations,
            vec![GroupViolation::TooManyEmployees {
                group: FopGroup::Two,
                max: 10
            }]
        );
    }

    #[test]
    fn group_three_over_limit_requires_general_system() {
        let s = settings(FopGroup::Three);
        let violations = verify_group_restrictions(&s, dec!(10_000_000));
        assert!(matches!(
            violations.as_slice(),
            [GroupViolation::GeneralSystemRequired { .. }]
        ));
    }

    #[test]
    fn compliant_settings_produce_no_violations() {
        let s = settings(FopGroup::Two);
        assert!(verify_group_restrictions(&s, dec!(500_000)).is_empty());
    }

    // ==================== limit_warnings ====================

    #[test]
    fn warns_when_approaching_group_limit() {
        let s = settings(FopGroup::Two);
        let near_limit = GROUP_2_INCOME_LIMIT * dec!(0.95);
        let warnings = limit_warnings(&s, near_limit);
        assert!(warnings.contains(&TaxWarning::LimitApproaching));
    }

    #[test]
    fn warns_about_vat_registration_above_threshold() {
        let s = settings(FopGroup::Two);
        let warnings = limit_warnings(&s, dec!(1_200_000));
        assert!(warnings.contains(&TaxWarning::VatRegistrationRequired));
    }

    #[test]
    fn vat_payers_get_no_vat_warning() {
        let mut s = settings(FopGroup::Two);
        s.is_vat_payer = true;
        let warnings = limit_warnings(&s, dec!(1_200_000));
        assert!(!warnings.contains(&TaxWarning::VatRegistrationRequired));
    }

    // ==================== estimate_taxes ====================

    #[test]
    fn group_two_pays_fixed_amounts() {
        let s = settings(FopGroup::Two);
        let estimate = estimate_taxes(&s, dec!(50_000), ReportingPeriod::Month);
        assert_eq!(estimate.single_tax, GROUP_2_SINGLE_TAX.round_dp(2));
        assert_eq!(estimate.military_tax, FIXED_MILITARY_TAX.round_dp(2));
        assert_eq!(estimate.esv, MIN_ESV.round_dp(2));
        assert_eq!(
            estimate.total_monthly_tax,
            (GROUP_2_SINGLE_TAX + MIN_ESV + FIXED_MILITARY_TAX).round_dp(2)
        );
    }

    #[test]
    fn group_three_uses_configured_percent() {
        let mut s = settings(FopGroup::Three);
        s.income_tax_percent = Some(dec!(5.0));
        s.military_tax_percent = Some(dec!(1.0));
        let estimate = estimate_taxes(&s, dec!(100_000), ReportingPeriod::Month);
        assert_eq!(estimate.single_tax, dec!(5000.00));
        assert_eq!(estimate.military_tax, dec!(1000.00));
    }

    #[test]
    fn group_three_falls_back_to_default_rates() {
        let s = settings(FopGroup::Three);
        let estimate = estimate_taxes(&s, dec!(100_000), ReportingPeriod::Month);
        // 5% for non-VAT payers, 1% military
        assert_eq!(estimate.single_tax, dec!(5000.00));
        assert_eq!(estimate.military_tax, dec!(1000.00));

        let mut vat = settings(FopGroup::Three);
        vat.is_vat_payer = true;
        let estimate = estimate_taxes(&vat, dec!(100_000), ReportingPeriod::Month);
        assert_eq!(estimate.single_tax, dec!(3000.00));
    }

    #[test]
    fn period_scales_the_line_items() {
        let s = settings(FopGroup::Two);
        let quarterly = estimate_taxes(&s, dec!(50_000), ReportingPeriod::Quarter);
        let yearly = estimate_taxes(&s, dec!(50_000), ReportingPeriod::Year);
        assert_eq!(quarterly.esv, (MIN_ESV * dec!(3)).round_dp(2));
        assert_eq!(yearly.esv, (MIN_ESV * dec!(12)).round_dp(2));
        // Totals are period-independent.
        assert_eq!(quarterly.total_monthly_tax, yearly.total_monthly_tax);
    }

    #[test]
    fn esv_charged_on_zero_income() {
        let s = settings(FopGroup::Three);
        let estimate = estimate_taxes(&s, Decimal::ZERO, ReportingPeriod::Month);
        assert_eq!(estimate.esv, MIN_ESV.round_dp(2));
        assert_eq!(estimate.single_tax, dec!(0.00));
    }

    // ==================== payment_calendar ====================

    #[test]
    fn calendar_covers_every_group() {
        let calendar = payment_calendar();
        assert!(!calendar.is_empty());
        for group in [FopGroup::One, FopGroup::Two, FopGroup::Three, FopGroup::Four] {
            assert!(calendar.iter().any(|e| e.groups.contains(&group)));
        }
    }

    // ==================== serialization ====================

    #[test]
    fn fop_group_serializes_as_registry_number() {
        assert_eq!(serde_json::to_string(&FopGroup::Three).unwrap(), "3");
        assert_eq!(serde_json::from_str::<FopGroup>("2").unwrap(), FopGroup::Two);
        assert!(serde_json::from_str::<FopGroup>("5").is_err());
    }
}
