use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::templates_model::{BudgetTemplate, NewBudgetTemplate};
use crate::allocations::CategoryAllocation;
use crate::budgets::Budget;
use crate::errors::Result;

/// Trait for template repository operations.
pub trait TemplateRepositoryTrait: Send + Sync {
    fn get_template(&self, template_id: &str) -> Result<BudgetTemplate>;
    /// Public templates plus the user's own.
    fn list_templates(&self, user_id: &str) -> Result<Vec<BudgetTemplate>>;
    fn insert_template(&self, template: BudgetTemplate) -> Result<BudgetTemplate>;
    fn update_template(&self, template: BudgetTemplate) -> Result<BudgetTemplate>;
}

/// Trait for template service operations.
pub trait TemplateServiceTrait: Send + Sync {
    fn create_template(&self, new_template: NewBudgetTemplate) -> Result<BudgetTemplate>;

    fn list_templates(&self, user_id: &str) -> Result<Vec<BudgetTemplate>>;

    /// Instantiates a budget from the template, allocating
    /// `amount x percentage / 100` to each named category. Names the user
    /// does not have are skipped.
    fn create_budget_from_template(
        &self,
        template_id: &str,
        user_id: &str,
        amount: Decimal,
        start_date: Option<NaiveDate>,
    ) -> Result<(Budget, Vec<CategoryAllocation>)>;
}
