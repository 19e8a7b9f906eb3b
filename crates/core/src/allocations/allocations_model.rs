use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_MONETARY_AMOUNT, PERCENT_DECIMAL_PRECISION};
use crate::errors::{Error, Result};

/// The portion of one budget's amount assigned to one category.
///
/// Unique per `(budget, category)`; repeated allocations replace the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAllocation {
    pub id: String,
    pub budget_id: String,
    pub category_id: String,
    pub allocated_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating or replacing an allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAllocation {
    pub budget_id: String,
    pub category_id: String,
    pub amount: Decimal,
}

impl NewAllocation {
    pub fn validate(&self) -> Result<()> {
        if self.amount < MIN_MONETARY_AMOUNT {
            return Err(Error::InvalidAmount(format!(
                "allocation amount must be at least {}, got {}",
                MIN_MONETARY_AMOUNT, self.amount
            )));
        }
        Ok(())
    }
}

/// Derived spending state of one allocation, mirroring the budget ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub allocated_amount: Decimal,
    pub total_expenses: Decimal,
    pub remaining: Decimal,
    pub usage_percentage: Decimal,
}

impl AllocationSummary {
    /// A zero allocated amount yields a usage of 0, never a division error.
    pub fn compute(allocated_amount: Decimal, total_expenses: Decimal) -> Self {
        let usage_percentage = if allocated_amount > Decimal::ZERO {
            (total_expenses / allocated_amount * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };
        AllocationSummary {
            allocated_amount,
            total_expenses,
            remaining: allocated_amount - total_expenses,
            usage_percentage,
        }
    }
}
