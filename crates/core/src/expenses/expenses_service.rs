use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::expenses_model::ExpenseSummary;
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::Result;
use crate::periods::Period;

/// Pure read-aggregation over the expense store.
pub struct ExpenseService {
    expense_repo: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(expense_repo: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { expense_repo }
    }
}

impl ExpenseServiceTrait for ExpenseService {
    fn aggregate(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        category_id: Option<&str>,
    ) -> Result<ExpenseSummary> {
        if end < start {
            debug!(
                "empty expense window for user {}: {} > {}",
                user_id, start, end
            );
            return Ok(ExpenseSummary::empty());
        }

        let expenses = self
            .expense_repo
            .expenses_in_range(user_id, start, end, category_id)?;

        let mut total = Decimal::ZERO;
        for expense in &expenses {
            total += expense.amount;
        }

        Ok(ExpenseSummary {
            total,
            count: expenses.len(),
        })
    }

    fn monthly_summary(&self, user_id: &str, year: i32, month: u32) -> Result<ExpenseSummary> {
        let period = Period::for_month(year, month)?;
        self.aggregate(user_id, period.start_date, period.end_date, None)
    }
}
