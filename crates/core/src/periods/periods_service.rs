use chrono::{Datelike, Duration, Months, NaiveDate};

use super::periods_model::BudgetType;
use crate::errors::{Error, Result};

/// Computes the canonical end date for a budget period.
///
/// - `weekly`: seven-day inclusive window (`start + 6 days`)
/// - `monthly`: last calendar day of the start date's month
/// - `yearly`: one year minus a day, month-clamped
/// - `custom`: the caller-supplied end date, which must be present and must
///   not precede the start date
pub fn resolve_period(
    start_date: NaiveDate,
    budget_type: BudgetType,
    custom_end: Option<NaiveDate>,
) -> Result<NaiveDate> {
    match budget_type {
        BudgetType::Weekly => Ok(start_date + Duration::days(6)),
        BudgetType::Monthly => last_day_of_month(start_date),
        BudgetType::Yearly => start_date
            .checked_add_months(Months::new(12))
            .map(|next_year| next_year - Duration::days(1))
            .ok_or_else(|| {
                Error::InvalidPeriod(format!("{} cannot roll forward one year", start_date))
            }),
        BudgetType::Custom => {
            let end = custom_end.ok_or_else(|| {
                Error::InvalidPeriod("custom budgets require an end date".to_string())
            })?;
            if end < start_date {
                return Err(Error::InvalidPeriod(format!(
                    "end date {} precedes start date {}",
                    end, start_date
                )));
            }
            Ok(end)
        }
    }
}

pub(crate) fn last_day_of_month(date: NaiveDate) -> Result<NaiveDate> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .map(|next_month| next_month - Duration::days(1))
        .ok_or_else(|| Error::InvalidPeriod(format!("{} has no month end", date)))
}
