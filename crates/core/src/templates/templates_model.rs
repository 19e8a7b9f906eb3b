use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::periods::BudgetType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    Student,
    Family,
    Travel,
    Emergency,
    Business,
    Retirement,
    Wedding,
    HomeRenovation,
    #[default]
    Custom,
}

/// One line of a template's allocation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateAllocation {
    pub category_name: String,
    pub percentage: Decimal,
}

/// A reusable plan for creating budgets with predefined category
/// allocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTemplate {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub template_type: TemplateType,
    pub budget_type: BudgetType,
    pub is_default: bool,
    pub is_public: bool,
    pub is_featured: bool,
    pub created_by: Option<String>,
    pub allocations: Vec<TemplateAllocation>,
    pub usage_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BudgetTemplate {
    /// Parses the `{"category name": percentage}` object form templates were
    /// historically stored in. Entries come back sorted by name.
    pub fn allocations_from_json(json: &str) -> Result<Vec<TemplateAllocation>> {
        let parsed: HashMap<String, Decimal> = serde_json::from_str(json)?;
        let mut allocations: Vec<TemplateAllocation> = parsed
            .into_iter()
            .map(|(category_name, percentage)| TemplateAllocation {
                category_name,
                percentage,
            })
            .collect();
        allocations.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(allocations)
    }
}

/// Input model for creating a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub template_type: TemplateType,
    pub budget_type: BudgetType,
    pub is_public: bool,
    pub created_by: Option<String>,
    pub allocations: Vec<TemplateAllocation>,
}

impl NewBudgetTemplate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Template name cannot be empty".to_string(),
            )));
        }
        for allocation in &self.allocations {
            if allocation.percentage < Decimal::ZERO || allocation.percentage > dec!(100) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "allocation percentage for '{}' must be between 0 and 100, got {}",
                    allocation.category_name, allocation.percentage
                ))));
            }
        }
        Ok(())
    }
}
