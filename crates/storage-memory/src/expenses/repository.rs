use budgetly_core::errors::Result;
use budgetly_core::expenses::{Expense, ExpenseRepositoryTrait};
use chrono::NaiveDate;
use dashmap::DashMap;

/// Expense table keyed by expense id.
///
/// The engine only reads expenses; inserts and removals are inherent methods
/// for the CRUD layer and tests to populate the table.
#[derive(Default)]
pub struct InMemoryExpenseRepository {
    expenses: DashMap<String, Expense>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_expense(&self, expense: Expense) -> Expense {
        self.expenses.insert(expense.id.clone(), expense.clone());
        expense
    }

    pub fn remove_expense(&self, expense_id: &str) -> Option<Expense> {
        self.expenses.remove(expense_id).map(|(_, expense)| expense)
    }
}

impl ExpenseRepositoryTrait for InMemoryExpenseRepository {
    fn expenses_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        category_id: Option<&str>,
    ) -> Result<Vec<Expense>> {
        Ok(self
            .expenses
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .filter(|entry| start <= entry.date && entry.date <= end)
            .filter(|entry| category_id.map_or(true, |c| entry.category_id == c))
            .map(|entry| entry.clone())
            .collect())
    }
}
