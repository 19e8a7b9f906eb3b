use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an expense was incurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    #[default]
    OneTime,
    Recurring,
    Subscription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    CreditCard,
    DebitCard,
    BankTransfer,
    MobilePayment,
    Check,
    Other,
}

/// Cadence of a recurring expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringFrequency {
    /// The due date following `from`, using calendar arithmetic: monthly and
    /// yearly steps clamp to the target month's last day rather than adding
    /// fixed day counts.
    pub fn next_occurrence(&self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            RecurringFrequency::Daily => from.checked_add_signed(Duration::days(1)),
            RecurringFrequency::Weekly => from.checked_add_signed(Duration::days(7)),
            RecurringFrequency::Monthly => from.checked_add_months(Months::new(1)),
            RecurringFrequency::Yearly => from.checked_add_months(Months::new(12)),
        }
    }
}

/// A recorded expense. Rows are owned by the record store; the engine only
/// reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub category_id: String,
    pub date: NaiveDate,
    pub expense_type: ExpenseType,
    pub payment_method: PaymentMethod,
    pub is_recurring: bool,
    pub recurring_frequency: Option<RecurringFrequency>,
    pub recurring_end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Next due date of a recurring expense, or `None` once the recurrence
    /// has ended (or for one-off expenses).
    pub fn next_due_date(&self) -> Option<NaiveDate> {
        if !self.is_recurring {
            return None;
        }
        let next = self.recurring_frequency?.next_occurrence(self.date)?;
        match self.recurring_end_date {
            Some(end) if next > end => None,
            _ => Some(next),
        }
    }

    /// Whether a recurring expense has slipped past its next due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_due_date().map_or(false, |due| today > due)
    }
}

/// Aggregated view over a set of expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total: Decimal,
    pub count: usize,
}

impl ExpenseSummary {
    pub fn empty() -> Self {
        ExpenseSummary {
            total: Decimal::ZERO,
            count: 0,
        }
    }
}
