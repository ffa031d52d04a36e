use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Currency every stored amount is normalized to
pub const DEFAULT_CURRENCY: &str = "UAH";

/// Base page size when listing transactions
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Smallest accepted transaction amount
pub const MIN_TRANSACTION_AMOUNT: Decimal = dec!(0.01);

/// Longest accepted free-text description
pub const MAX_DESCRIPTION_LENGTH: usize = 150;

/// Default single tax percent for group 3 (non-VAT payers)
pub const DEFAULT_GROUP_3_TAX_PERCENT: Decimal = dec!(5.0);

/// Default military levy percent applied at onboarding
pub const DEFAULT_MILITARY_TAX_PERCENT: Decimal = dec!(1.5);

/// Default monthly unified social contribution (ESV), UAH
pub const DEFAULT_ESV_VALUE: Decimal = dec!(1760.0);
