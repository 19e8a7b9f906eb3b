use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condition an alert reports.
///
/// `threshold` is carried for compatibility with historically stored rows;
/// the evaluator emits the other three (crossing the configured threshold is
/// the `near_limit` condition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Threshold,
    OverBudget,
    NearLimit,
    PeriodEnding,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Threshold => "threshold",
            AlertType::OverBudget => "over_budget",
            AlertType::NearLimit => "near_limit",
            AlertType::PeriodEnding => "period_ending",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An emitted alert. Append-only: nothing mutates after creation except the
/// read and dismissed flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub budget_id: String,
    pub user_id: String,
    pub alert_type: AlertType,
    pub message: String,
    pub is_read: bool,
    pub is_dismissed: bool,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Marks the alert read; `read_at` keeps the first read's timestamp.
    pub fn mark_as_read(&mut self, now: DateTime<Utc>) {
        self.is_read = true;
        self.read_at.get_or_insert(now);
    }

    pub fn dismiss(&mut self) {
        self.is_dismissed = true;
    }
}

/// A condition the evaluator found newly satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub budget_id: String,
    pub user_id: String,
    pub alert_type: AlertType,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn read_at_is_set_only_once() {
        let mut alert = Alert {
            id: "a1".to_string(),
            budget_id: "b1".to_string(),
            user_id: "u1".to_string(),
            alert_type: AlertType::OverBudget,
            message: "over".to_string(),
            is_read: false,
            is_dismissed: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            read_at: None,
        };

        let first = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();

        alert.mark_as_read(first);
        alert.mark_as_read(later);

        assert!(alert.is_read);
        assert_eq!(alert.read_at, Some(first));
    }
}
