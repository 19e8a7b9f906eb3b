use super::allocations_model::{AllocationSummary, CategoryAllocation, NewAllocation};
use crate::errors::Result;

/// Trait for allocation repository operations.
pub trait AllocationRepositoryTrait: Send + Sync {
    fn get_allocation(&self, budget_id: &str, category_id: &str) -> Result<CategoryAllocation>;
    fn list_for_budget(&self, budget_id: &str) -> Result<Vec<CategoryAllocation>>;
    fn list_for_category(&self, category_id: &str) -> Result<Vec<CategoryAllocation>>;
    /// Inserts the row or replaces the existing `(budget, category)` row.
    fn upsert_allocation(&self, allocation: CategoryAllocation) -> Result<CategoryAllocation>;
    /// Removes every allocation belonging to a budget, returning the count.
    fn delete_for_budget(&self, budget_id: &str) -> Result<usize>;
}

/// Trait for allocation service operations.
pub trait AllocationServiceTrait: Send + Sync {
    /// Creates or replaces the `(budget, category)` allocation, enforcing the
    /// category's 100% ceiling across the owner's active budgets.
    fn allocate(&self, new_allocation: NewAllocation) -> Result<CategoryAllocation>;

    /// Expenses, remaining amount, and usage for one allocation, scoped to
    /// the category within the budget's period.
    fn allocation_summary(&self, budget_id: &str, category_id: &str) -> Result<AllocationSummary>;
}
