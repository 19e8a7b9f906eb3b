use budgetly_core::budgets::{Budget, BudgetRepositoryTrait};
use budgetly_core::errors::{Error, Result};
use chrono::NaiveDate;
use dashmap::DashMap;

/// Budget table keyed by budget id.
#[derive(Default)]
pub struct InMemoryBudgetRepository {
    budgets: DashMap<String, Budget>,
}

impl InMemoryBudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetRepositoryTrait for InMemoryBudgetRepository {
    fn get_budget(&self, budget_id: &str) -> Result<Budget> {
        self.budgets
            .get(budget_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| Error::NotFound(format!("budget {}", budget_id)))
    }

    fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        Ok(self
            .budgets
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.clone())
            .collect())
    }

    fn list_active_budgets(&self, user_id: &str, today: NaiveDate) -> Result<Vec<Budget>> {
        Ok(self
            .budgets
            .iter()
            .filter(|entry| {
                entry.user_id == user_id && entry.is_active && entry.period().contains(today)
            })
            .map(|entry| entry.clone())
            .collect())
    }

    fn insert_budget(&self, budget: Budget) -> Result<Budget> {
        self.budgets.insert(budget.id.clone(), budget.clone());
        Ok(budget)
    }

    fn update_budget(&self, budget: Budget) -> Result<Budget> {
        if !self.budgets.contains_key(&budget.id) {
            return Err(Error::NotFound(format!("budget {}", budget.id)));
        }
        self.budgets.insert(budget.id.clone(), budget.clone());
        Ok(budget)
    }

    fn delete_budget(&self, budget_id: &str) -> Result<usize> {
        Ok(self.budgets.remove(budget_id).map_or(0, |_| 1))
    }
}
