use budgetly_core::alerts::{Alert, AlertRepositoryTrait, AlertType};
use budgetly_core::errors::{Error, Result};
use dashmap::DashMap;

/// Alert table keyed by alert id.
#[derive(Default)]
pub struct InMemoryAlertRepository {
    alerts: DashMap<String, Alert>,
}

impl InMemoryAlertRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertRepositoryTrait for InMemoryAlertRepository {
    fn get_alert(&self, alert_id: &str) -> Result<Alert> {
        self.alerts
            .get(alert_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| Error::NotFound(format!("alert {}", alert_id)))
    }

    fn list_for_budget(&self, budget_id: &str) -> Result<Vec<Alert>> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|entry| entry.budget_id == budget_id)
            .map(|entry| entry.clone())
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(alerts)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Alert>> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.clone())
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(alerts)
    }

    fn unresolved_alert_types(&self, budget_id: &str) -> Result<Vec<AlertType>> {
        let mut types: Vec<AlertType> = self
            .alerts
            .iter()
            .filter(|entry| entry.budget_id == budget_id && !entry.is_dismissed)
            .map(|entry| entry.alert_type)
            .collect();
        types.sort_by_key(|t| t.as_str());
        types.dedup();
        Ok(types)
    }

    fn insert_alert(&self, alert: Alert) -> Result<Alert> {
        self.alerts.insert(alert.id.clone(), alert.clone());
        Ok(alert)
    }

    fn update_alert(&self, alert: Alert) -> Result<Alert> {
        if !self.alerts.contains_key(&alert.id) {
            return Err(Error::NotFound(format!("alert {}", alert.id)));
        }
        self.alerts.insert(alert.id.clone(), alert.clone());
        Ok(alert)
    }
}
