use chrono::NaiveDate;

use super::budgets_model::{Budget, BudgetLedger, NewBudget};
use crate::errors::Result;

/// Trait for budget repository operations.
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget(&self, budget_id: &str) -> Result<Budget>;
    fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    /// Budgets whose `is_active` flag is set and whose period contains
    /// `today`.
    fn list_active_budgets(&self, user_id: &str, today: NaiveDate) -> Result<Vec<Budget>>;
    fn insert_budget(&self, budget: Budget) -> Result<Budget>;
    fn update_budget(&self, budget: Budget) -> Result<Budget>;
    fn delete_budget(&self, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations.
pub trait BudgetServiceTrait: Send + Sync {
    /// Creates a budget, deriving the period end once if it was not
    /// supplied.
    fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    fn get_budget(&self, budget_id: &str) -> Result<Budget>;
    fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    fn list_active_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    /// Aggregates the budget's expenses and derives its ledger.
    fn ledger(&self, budget_id: &str) -> Result<BudgetLedger>;
    /// Deletes a budget and its category allocations.
    fn delete_budget(&self, budget_id: &str) -> Result<usize>;
}
