use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Annual income limit for group 1, UAH
pub const GROUP_1_INCOME_LIMIT: Decimal = dec!(1_336_000);

/// Annual income limit for group 2, UAH
pub const GROUP_2_INCOME_LIMIT: Decimal = dec!(5_921_400);

/// Annual income limit for group 3, UAH
pub const GROUP_3_INCOME_LIMIT: Decimal = dec!(9_336_000);

/// Most employees a group-2 FOP may have
pub const GROUP_2_MAX_EMPLOYEES: u32 = 10;

/// Fixed monthly single tax for group 1, UAH
pub const GROUP_1_SINGLE_TAX: Decimal = dec!(302.80);

/// Fixed monthly single tax for group 2, UAH
pub const GROUP_2_SINGLE_TAX: Decimal = dec!(1600);

/// Minimum monthly unified social contribution (ESV), UAH
pub const MIN_ESV: Decimal = dec!(1760);

/// Fixed monthly military levy for groups 1, 2 and 4, UAH
pub const FIXED_MILITARY_TAX: Decimal = dec!(800);

/// Annual income above which VAT registration is required, UAH
pub const VAT_REGISTRATION_THRESHOLD: Decimal = dec!(1_000_000);

/// Share of the group limit at which a warning is raised
pub const LIMIT_WARNING_RATIO: Decimal = dec!(0.9);

/// Group 3 single tax fallback rates when settings carry no percent
pub const GROUP_3_VAT_RATE: Decimal = dec!(0.03);
pub const GROUP_3_NON_VAT_RATE: Decimal = dec!(0.05);

/// Group 3 military levy fallback rate
pub const GROUP_3_MILITARY_RATE: Decimal = dec!(0.01);
