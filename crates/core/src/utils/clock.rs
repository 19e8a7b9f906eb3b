//! Injected time source.
//!
//! Period progress, days-remaining, and overdue checks all depend on "today".
//! Services take a `Clock` rather than reading process time, so tests can pin
//! the date.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current date and time.
pub trait Clock: Send + Sync {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;

    /// The current instant, used for record timestamps.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed date, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }

    fn now(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(
            self.0.and_hms_opt(12, 0, 0).unwrap_or_default(),
            Utc,
        )
    }
}
