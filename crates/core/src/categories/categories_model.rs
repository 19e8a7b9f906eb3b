use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{MONEY_DECIMAL_PRECISION, PERCENT_DECIMAL_PRECISION};
use crate::errors::{Error, Result, ValidationError};

/// Categories every new user starts with: `(name, description, color)`.
pub const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Food", "Food & Dining", "#d97706"),
    ("Transport", "Transportation", "#f97316"),
    ("Entertainment", "Entertainment", "#be123c"),
    ("Utilities", "Utilities", "#4b5563"),
    ("Housing", "Housing", "#059669"),
    ("Healthcare", "Healthcare", "#dc2626"),
    ("Shopping", "Shopping", "#7c3aed"),
    ("Education", "Education", "#0891b2"),
    ("Travel", "Travel", "#ea580c"),
    ("Savings", "Savings", "#16a34a"),
    ("Income", "Income", "#059669"),
    ("Other", "Other", "#6b7280"),
];

const DEFAULT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    Income,
    #[default]
    Expense,
    Transfer,
}

/// An expense category. Names are unique per owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: Option<String>,
    pub category_type: CategoryType,
    /// Percentage of the owner's monthly income earmarked for this
    /// category, 0-100.
    pub budget_percentage: Decimal,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// The monetary budget this category's percentage implies for the given
    /// monthly income.
    pub fn budget_amount(&self, monthly_income: Decimal) -> Decimal {
        if self.budget_percentage > Decimal::ZERO {
            (monthly_income * self.budget_percentage / dec!(100))
                .round_dp(MONEY_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        }
    }
}

/// Input model for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub category_type: CategoryType,
    pub budget_percentage: Option<Decimal>,
}

impl NewCategory {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category name cannot be empty".to_string(),
            )));
        }
        if let Some(percentage) = self.budget_percentage {
            validate_percentage(percentage)?;
        }
        Ok(())
    }

    /// Falls back to the default palette, matching well-known names first.
    pub fn resolved_color(&self) -> String {
        if let Some(color) = &self.color {
            return color.clone();
        }
        let lowered = self.name.to_lowercase();
        DEFAULT_CATEGORIES
            .iter()
            .find(|(name, _, _)| lowered.contains(&name.to_lowercase()))
            .map(|(_, _, color)| color.to_string())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string())
    }
}

pub(crate) fn validate_percentage(percentage: Decimal) -> Result<()> {
    if percentage < Decimal::ZERO || percentage > dec!(100) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "budget percentage must be between 0 and 100, got {}",
            percentage
        ))));
    }
    Ok(())
}

/// Derived monthly spending state of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub budget_amount: Decimal,
    pub total_expenses: Decimal,
    pub remaining: Decimal,
    pub usage_percentage: Decimal,
}

impl CategorySummary {
    /// A zero budget amount yields a usage of 0, never a division error.
    pub fn compute(budget_amount: Decimal, total_expenses: Decimal) -> Self {
        let usage_percentage = if budget_amount > Decimal::ZERO {
            (total_expenses / budget_amount * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };
        CategorySummary {
            budget_amount,
            total_expenses,
            remaining: budget_amount - total_expenses,
            usage_percentage,
        }
    }
}
