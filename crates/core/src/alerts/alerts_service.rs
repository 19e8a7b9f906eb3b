use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use log::debug;
use uuid::Uuid;

use super::alerts_model::{Alert, AlertType, NewAlert};
use super::alerts_traits::{AlertRepositoryTrait, AlertServiceTrait};
use crate::budgets::{Budget, BudgetLedger, BudgetServiceTrait, BudgetStatus};
use crate::constants::PERIOD_ENDING_LOOKAHEAD_DAYS;
use crate::errors::{Error, Result};
use crate::utils::Clock;

/// Derives the alerts a ledger state newly triggers.
///
/// The spending state is `over_budget`, `near_limit`, or normal, in that
/// precedence; `period_ending` is tracked independently. A condition whose
/// type is already in `unresolved` emits nothing, which makes repeated
/// evaluation of an unchanged budget a no-op. Leaving a state never emits or
/// removes anything.
pub fn evaluate(budget: &Budget, ledger: &BudgetLedger, unresolved: &[AlertType]) -> Vec<NewAlert> {
    let mut alerts = Vec::new();

    let spending_state = if ledger.is_over_budget {
        Some(AlertType::OverBudget)
    } else if ledger.is_near_limit {
        Some(AlertType::NearLimit)
    } else {
        None
    };

    if let Some(alert_type) = spending_state {
        if !unresolved.contains(&alert_type) {
            let message = match alert_type {
                AlertType::OverBudget => format!(
                    "Budget '{}' is over budget: {} spent of {}",
                    budget.name, ledger.total_expenses, budget.amount
                ),
                _ => format!(
                    "Budget '{}' has used {}% of its amount, past the {}% alert threshold",
                    budget.name, ledger.usage_percentage, budget.alert_threshold
                ),
            };
            alerts.push(NewAlert {
                budget_id: budget.id.clone(),
                user_id: budget.user_id.clone(),
                alert_type,
                message,
            });
        }
    }

    if budget.status == BudgetStatus::Active
        && ledger.days_remaining <= PERIOD_ENDING_LOOKAHEAD_DAYS
        && !unresolved.contains(&AlertType::PeriodEnding)
    {
        alerts.push(NewAlert {
            budget_id: budget.id.clone(),
            user_id: budget.user_id.clone(),
            alert_type: AlertType::PeriodEnding,
            message: format!(
                "Budget '{}' ends in {} days",
                budget.name, ledger.days_remaining
            ),
        });
    }

    alerts
}

pub struct AlertService {
    alert_repo: Arc<dyn AlertRepositoryTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    clock: Arc<dyn Clock>,
    /// Serializes check-then-emit per budget so concurrent evaluation
    /// triggers cannot both insert the same alert type.
    budget_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl AlertService {
    pub fn new(
        alert_repo: Arc<dyn AlertRepositoryTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        AlertService {
            alert_repo,
            budget_service,
            clock,
            budget_locks: DashMap::new(),
        }
    }

    fn budget_lock(&self, budget_id: &str) -> Arc<Mutex<()>> {
        self.budget_locks
            .entry(budget_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl AlertServiceTrait for AlertService {
    fn evaluate_budget(&self, budget_id: &str) -> Result<Vec<Alert>> {
        let budget = self.budget_service.get_budget(budget_id)?;
        if !budget.send_notifications {
            debug!("notifications disabled for budget {}", budget_id);
            return Ok(Vec::new());
        }

        let lock = self.budget_lock(budget_id);
        let _guard = lock
            .lock()
            .map_err(|_| Error::Unexpected("alert lock poisoned".to_string()))?;

        let ledger = self.budget_service.ledger(budget_id)?;
        let unresolved = self.alert_repo.unresolved_alert_types(budget_id)?;
        let now = self.clock.now();

        let mut inserted = Vec::new();
        for new_alert in evaluate(&budget, &ledger, &unresolved) {
            debug!(
                "emitting {} alert for budget {}",
                new_alert.alert_type, budget_id
            );
            let alert = self.alert_repo.insert_alert(Alert {
                id: Uuid::new_v4().to_string(),
                budget_id: new_alert.budget_id,
                user_id: new_alert.user_id,
                alert_type: new_alert.alert_type,
                message: new_alert.message,
                is_read: false,
                is_dismissed: false,
                created_at: now,
                read_at: None,
            })?;
            inserted.push(alert);
        }
        Ok(inserted)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Alert>> {
        self.alert_repo.list_for_user(user_id)
    }

    fn mark_as_read(&self, alert_id: &str) -> Result<Alert> {
        let mut alert = self.alert_repo.get_alert(alert_id)?;
        alert.mark_as_read(self.clock.now());
        self.alert_repo.update_alert(alert)
    }

    fn dismiss(&self, alert_id: &str) -> Result<Alert> {
        let mut alert = self.alert_repo.get_alert(alert_id)?;
        alert.dismiss();
        self.alert_repo.update_alert(alert)
    }
}
