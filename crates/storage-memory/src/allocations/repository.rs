use budgetly_core::allocations::{AllocationRepositoryTrait, CategoryAllocation};
use budgetly_core::errors::{Error, Result};
use dashmap::DashMap;

/// Allocation table keyed by `(budget id, category id)`, which enforces the
/// one-row-per-pair uniqueness at the storage level.
#[derive(Default)]
pub struct InMemoryAllocationRepository {
    allocations: DashMap<(String, String), CategoryAllocation>,
}

impl InMemoryAllocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AllocationRepositoryTrait for InMemoryAllocationRepository {
    fn get_allocation(&self, budget_id: &str, category_id: &str) -> Result<CategoryAllocation> {
        self.allocations
            .get(&(budget_id.to_string(), category_id.to_string()))
            .map(|entry| entry.clone())
            .ok_or_else(|| Error::NotFound(format!("allocation {}/{}", budget_id, category_id)))
    }

    fn list_for_budget(&self, budget_id: &str) -> Result<Vec<CategoryAllocation>> {
        Ok(self
            .allocations
            .iter()
            .filter(|entry| entry.budget_id == budget_id)
            .map(|entry| entry.clone())
            .collect())
    }

    fn list_for_category(&self, category_id: &str) -> Result<Vec<CategoryAllocation>> {
        Ok(self
            .allocations
            .iter()
            .filter(|entry| entry.category_id == category_id)
            .map(|entry| entry.clone())
            .collect())
    }

    fn upsert_allocation(&self, allocation: CategoryAllocation) -> Result<CategoryAllocation> {
        self.allocations.insert(
            (allocation.budget_id.clone(), allocation.category_id.clone()),
            allocation.clone(),
        );
        Ok(allocation)
    }

    fn delete_for_budget(&self, budget_id: &str) -> Result<usize> {
        let before = self.allocations.len();
        self.allocations
            .retain(|(owner, _), _| owner.as_str() != budget_id);
        Ok(before - self.allocations.len())
    }
}
