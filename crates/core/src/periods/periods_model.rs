use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};

/// Kind of window a budget covers.
///
/// For everything except `Custom` the end date is fully determined by the
/// start date, see [`resolve_period`](super::resolve_period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Custom,
}

impl BudgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetType::Weekly => "weekly",
            BudgetType::Monthly => "monthly",
            BudgetType::Yearly => "yearly",
            BudgetType::Custom => "custom",
        }
    }
}

impl fmt::Display for BudgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "weekly" => Ok(BudgetType::Weekly),
            "monthly" => Ok(BudgetType::Monthly),
            "yearly" => Ok(BudgetType::Yearly),
            "custom" => Ok(BudgetType::Custom),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown budget type: {}",
                other
            )))),
        }
    }
}

/// The inclusive `[start_date, end_date]` window a budget covers.
///
/// All date math the ledger needs lives here so that budgets, allocations,
/// and summaries measure time the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Period {
    /// Builds a period, rejecting windows that end before they start.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if end_date < start_date {
            return Err(Error::InvalidPeriod(format!(
                "end date {} precedes start date {}",
                end_date, start_date
            )));
        }
        Ok(Period {
            start_date,
            end_date,
        })
    }

    /// The calendar month `[first day, last day]` window.
    pub fn for_month(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            Error::InvalidPeriod(format!("{}-{:02} is not a calendar month", year, month))
        })?;
        let last = super::periods_service::last_day_of_month(first)?;
        Period::new(first, last)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Span of the period in days (`end - start`).
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Days left until the period ends; 0 once today is past the end.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days().max(0)
    }

    /// How far through the period today is, as a percentage clamped to
    /// `[0, 100]`. A degenerate zero-day period counts as complete.
    pub fn progress_percentage(&self, today: NaiveDate) -> Decimal {
        let total = self.total_days();
        if total <= 0 {
            return dec!(100);
        }
        let elapsed = (today - self.start_date).num_days().clamp(0, total);
        (Decimal::from(elapsed) / Decimal::from(total) * dec!(100))
            .round_dp(PERCENT_DECIMAL_PRECISION)
    }
}
