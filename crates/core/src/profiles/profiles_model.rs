use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY, DEFAULT_SAVINGS_RATE, EMERGENCY_FUND_MONTHS, MONEY_DECIMAL_PRECISION,
};
use crate::periods::BudgetType;

/// Budget-relevant slice of a user's profile.
///
/// Category budget amounts are derived from `monthly_income`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub currency: String,
    pub monthly_income: Decimal,
    pub savings_goal: Decimal,
    pub emergency_fund_goal: Decimal,
    pub default_budget_period: BudgetType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Builds a profile with the documented goal defaults: a savings goal of
    /// 20% of monthly income and an emergency fund of three months of
    /// income.
    pub fn with_defaults(user_id: &str, monthly_income: Decimal, now: DateTime<Utc>) -> Self {
        UserProfile {
            user_id: user_id.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            monthly_income,
            savings_goal: (monthly_income * DEFAULT_SAVINGS_RATE)
                .round_dp(MONEY_DECIMAL_PRECISION),
            emergency_fund_goal: (monthly_income * EMERGENCY_FUND_MONTHS)
                .round_dp(MONEY_DECIMAL_PRECISION),
            default_budget_period: BudgetType::Monthly,
            created_at: now,
            updated_at: now,
        }
    }
}
