use chrono::NaiveDate;

use super::expenses_model::{Expense, ExpenseSummary};
use crate::errors::Result;

/// Read interface over the expense store.
///
/// The aggregator never mutates expense records, so only range reads are
/// required of a backend.
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Expenses for one owner with `start <= date <= end`, optionally
    /// restricted to a category.
    fn expenses_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        category_id: Option<&str>,
    ) -> Result<Vec<Expense>>;
}

/// Trait for expense aggregation operations.
pub trait ExpenseServiceTrait: Send + Sync {
    /// Sums matching expense amounts over an inclusive date range.
    fn aggregate(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        category_id: Option<&str>,
    ) -> Result<ExpenseSummary>;

    /// Aggregate over one calendar month.
    fn monthly_summary(&self, user_id: &str, year: i32, month: u32) -> Result<ExpenseSummary>;
}
