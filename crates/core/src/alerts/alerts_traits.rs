use super::alerts_model::{Alert, AlertType};
use crate::errors::Result;

/// Trait for alert repository operations.
pub trait AlertRepositoryTrait: Send + Sync {
    fn get_alert(&self, alert_id: &str) -> Result<Alert>;
    fn list_for_budget(&self, budget_id: &str) -> Result<Vec<Alert>>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Alert>>;
    /// Alert types with at least one non-dismissed row for the budget.
    /// These suppress re-emission; dismissing an alert re-arms its type.
    fn unresolved_alert_types(&self, budget_id: &str) -> Result<Vec<AlertType>>;
    fn insert_alert(&self, alert: Alert) -> Result<Alert>;
    fn update_alert(&self, alert: Alert) -> Result<Alert>;
}

/// Trait for alert service operations.
pub trait AlertServiceTrait: Send + Sync {
    /// Re-derives the budget's ledger and emits alerts for conditions newly
    /// entered since the last evaluation. Idempotent: evaluating an
    /// unchanged budget emits nothing.
    fn evaluate_budget(&self, budget_id: &str) -> Result<Vec<Alert>>;

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Alert>>;
    fn mark_as_read(&self, alert_id: &str) -> Result<Alert>;
    fn dismiss(&self, alert_id: &str) -> Result<Alert>;
}
