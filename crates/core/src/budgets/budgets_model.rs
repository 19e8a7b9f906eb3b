use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_MONETARY_AMOUNT, PERCENT_DECIMAL_PRECISION};
use crate::errors::{Error, Result, ValidationError};
use crate::periods::{BudgetType, Period};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    #[default]
    Active,
    Paused,
    Completed,
    Overdue,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Active => "active",
            BudgetStatus::Paused => "paused",
            BudgetStatus::Completed => "completed",
            BudgetStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spending budget over one period.
///
/// `end_date` is derived once at creation for non-custom types and never
/// recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub budget_type: BudgetType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BudgetStatus,
    pub is_active: bool,
    pub alert_threshold: Decimal,
    pub send_notifications: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// The window this budget covers.
    pub fn period(&self) -> Period {
        Period {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    pub fn has_ended(&self, today: NaiveDate) -> bool {
        today > self.end_date
    }
}

/// Input model for creating a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub budget_type: BudgetType,
    /// Defaults to today when absent.
    pub start_date: Option<NaiveDate>,
    /// Required for custom budgets; derived from the type otherwise.
    pub end_date: Option<NaiveDate>,
    pub alert_threshold: Option<Decimal>,
}

impl NewBudget {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget name cannot be empty".to_string(),
            )));
        }
        if self.amount < MIN_MONETARY_AMOUNT {
            return Err(Error::InvalidAmount(format!(
                "budget amount must be at least {}, got {}",
                MIN_MONETARY_AMOUNT, self.amount
            )));
        }
        if let Some(threshold) = self.alert_threshold {
            if threshold < Decimal::ZERO || threshold > dec!(100) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "alert threshold must be between 0 and 100, got {}",
                    threshold
                ))));
            }
        }
        Ok(())
    }
}

/// Derived state of a budget against its aggregated expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLedger {
    pub total_expenses: Decimal,
    pub remaining: Decimal,
    pub usage_percentage: Decimal,
    pub is_over_budget: bool,
    pub is_near_limit: bool,
    pub days_remaining: i64,
    pub progress_percentage: Decimal,
}

impl BudgetLedger {
    /// Derives the ledger from a budget and its expense total for the
    /// period.
    ///
    /// A zero budget amount yields a usage of 0 rather than a division
    /// error. Spending exactly the budgeted amount is not over budget.
    pub fn compute(budget: &Budget, total_expenses: Decimal, today: NaiveDate) -> Self {
        let remaining = budget.amount - total_expenses;
        let usage_percentage = if budget.amount > Decimal::ZERO {
            (total_expenses / budget.amount * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };
        let period = budget.period();

        BudgetLedger {
            total_expenses,
            remaining,
            usage_percentage,
            is_over_budget: total_expenses > budget.amount,
            is_near_limit: usage_percentage >= budget.alert_threshold,
            days_remaining: period.days_remaining(today),
            progress_percentage: period.progress_percentage(today),
        }
    }
}
