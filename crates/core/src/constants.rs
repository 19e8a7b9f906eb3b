use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for monetary amounts.
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for percentages.
pub const PERCENT_DECIMAL_PRECISION: u32 = 2;

/// Smallest accepted monetary amount.
pub const MIN_MONETARY_AMOUNT: Decimal = dec!(0.01);

/// Percentage of budget used that triggers alerts, unless overridden.
pub const DEFAULT_ALERT_THRESHOLD: Decimal = dec!(80.00);

/// A budget period counts as "ending" when this many days or fewer remain.
pub const PERIOD_ENDING_LOOKAHEAD_DAYS: i64 = 3;

/// Default savings goal as a fraction of monthly income.
pub const DEFAULT_SAVINGS_RATE: Decimal = dec!(0.20);

/// Default emergency fund goal in months of income.
pub const EMERGENCY_FUND_MONTHS: Decimal = dec!(3);

/// Fallback currency for new profiles.
pub const DEFAULT_CURRENCY: &str = "USD";
