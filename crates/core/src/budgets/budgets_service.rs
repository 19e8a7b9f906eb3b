use std::sync::Arc;

use log::debug;
use uuid::Uuid;

use super::budgets_model::{Budget, BudgetLedger, BudgetStatus, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::allocations::AllocationRepositoryTrait;
use crate::constants::DEFAULT_ALERT_THRESHOLD;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseServiceTrait;
use crate::periods::resolve_period;
use crate::utils::Clock;

pub struct BudgetService {
    budget_repo: Arc<dyn BudgetRepositoryTrait>,
    allocation_repo: Arc<dyn AllocationRepositoryTrait>,
    expense_service: Arc<dyn ExpenseServiceTrait>,
    clock: Arc<dyn Clock>,
}

impl BudgetService {
    pub fn new(
        budget_repo: Arc<dyn BudgetRepositoryTrait>,
        allocation_repo: Arc<dyn AllocationRepositoryTrait>,
        expense_service: Arc<dyn ExpenseServiceTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        BudgetService {
            budget_repo,
            allocation_repo,
            expense_service,
            clock,
        }
    }
}

impl BudgetServiceTrait for BudgetService {
    fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;

        let start_date = new_budget.start_date.unwrap_or_else(|| self.clock.today());
        let end_date = match new_budget.end_date {
            Some(end) if end < start_date => {
                return Err(Error::InvalidPeriod(format!(
                    "end date {} precedes start date {}",
                    end, start_date
                )));
            }
            Some(end) => end,
            None => resolve_period(start_date, new_budget.budget_type, None)?,
        };

        let now = self.clock.now();
        let budget = Budget {
            id: new_budget
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: new_budget.user_id,
            name: new_budget.name,
            description: new_budget.description,
            amount: new_budget.amount,
            budget_type: new_budget.budget_type,
            start_date,
            end_date,
            status: BudgetStatus::Active,
            is_active: true,
            alert_threshold: new_budget
                .alert_threshold
                .unwrap_or(DEFAULT_ALERT_THRESHOLD),
            send_notifications: true,
            created_at: now,
            updated_at: now,
        };

        self.budget_repo.insert_budget(budget)
    }

    fn get_budget(&self, budget_id: &str) -> Result<Budget> {
        self.budget_repo.get_budget(budget_id)
    }

    fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.budget_repo.list_budgets(user_id)
    }

    fn list_active_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.budget_repo
            .list_active_budgets(user_id, self.clock.today())
    }

    fn ledger(&self, budget_id: &str) -> Result<BudgetLedger> {
        let budget = self.budget_repo.get_budget(budget_id)?;
        let summary = self.expense_service.aggregate(
            &budget.user_id,
            budget.start_date,
            budget.end_date,
            None,
        )?;
        Ok(BudgetLedger::compute(
            &budget,
            summary.total,
            self.clock.today(),
        ))
    }

    fn delete_budget(&self, budget_id: &str) -> Result<usize> {
        let removed_allocations = self.allocation_repo.delete_for_budget(budget_id)?;
        if removed_allocations > 0 {
            debug!(
                "removed {} allocations with budget {}",
                removed_allocations, budget_id
            );
        }
        self.budget_repo.delete_budget(budget_id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::allocations::CategoryAllocation;
    use crate::expenses::ExpenseSummary;
    use crate::periods::BudgetType;
    use crate::utils::FixedClock;

    #[derive(Default)]
    struct MockBudgetRepository {
        budgets: RwLock<HashMap<String, Budget>>,
    }

    impl BudgetRepositoryTrait for MockBudgetRepository {
        fn get_budget(&self, budget_id: &str) -> Result<Budget> {
            self.budgets
                .read()
                .unwrap()
                .get(budget_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("budget {}", budget_id)))
        }

        fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
            Ok(self
                .budgets
                .read()
                .unwrap()
                .values()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect())
        }

        fn list_active_budgets(&self, user_id: &str, today: NaiveDate) -> Result<Vec<Budget>> {
            Ok(self
                .budgets
                .read()
                .unwrap()
                .values()
                .filter(|b| b.user_id == user_id && b.is_active && b.period().contains(today))
                .cloned()
                .collect())
        }

        fn insert_budget(&self, budget: Budget) -> Result<Budget> {
            self.budgets
                .write()
                .unwrap()
                .insert(budget.id.clone(), budget.clone());
            Ok(budget)
        }

        fn update_budget(&self, budget: Budget) -> Result<Budget> {
            self.insert_budget(budget)
        }

        fn delete_budget(&self, budget_id: &str) -> Result<usize> {
            Ok(self
                .budgets
                .write()
                .unwrap()
                .remove(budget_id)
                .map_or(0, |_| 1))
        }
    }

    #[derive(Default)]
    struct MockAllocationRepository {
        deleted_for: RwLock<Vec<String>>,
    }

    impl AllocationRepositoryTrait for MockAllocationRepository {
        fn get_allocation(
            &self,
            budget_id: &str,
            _category_id: &str,
        ) -> Result<CategoryAllocation> {
            Err(Error::NotFound(format!("allocation in {}", budget_id)))
        }

        fn list_for_budget(&self, _budget_id: &str) -> Result<Vec<CategoryAllocation>> {
            Ok(Vec::new())
        }

        fn list_for_category(&self, _category_id: &str) -> Result<Vec<CategoryAllocation>> {
            Ok(Vec::new())
        }

        fn upsert_allocation(&self, allocation: CategoryAllocation) -> Result<CategoryAllocation> {
            Ok(allocation)
        }

        fn delete_for_budget(&self, budget_id: &str) -> Result<usize> {
            self.deleted_for
                .write()
                .unwrap()
                .push(budget_id.to_string());
            Ok(2)
        }
    }

    struct FixedExpenseService {
        total: Decimal,
    }

    impl ExpenseServiceTrait for FixedExpenseService {
        fn aggregate(
            &self,
            _user_id: &str,
            _start: NaiveDate,
            _end: NaiveDate,
            _category_id: Option<&str>,
        ) -> Result<ExpenseSummary> {
            Ok(ExpenseSummary {
                total: self.total,
                count: 1,
            })
        }

        fn monthly_summary(&self, _user_id: &str, _year: i32, _month: u32) -> Result<ExpenseSummary> {
            self.aggregate(
                "",
                NaiveDate::MIN,
                NaiveDate::MAX,
                None,
            )
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(total_expenses: Decimal, today: NaiveDate) -> BudgetService {
        BudgetService::new(
            Arc::new(MockBudgetRepository::default()),
            Arc::new(MockAllocationRepository::default()),
            Arc::new(FixedExpenseService {
                total: total_expenses,
            }),
            Arc::new(FixedClock(today)),
        )
    }

    fn new_budget(budget_type: BudgetType, start: Option<NaiveDate>) -> NewBudget {
        NewBudget {
            id: None,
            user_id: "u1".to_string(),
            name: "Monthly spend".to_string(),
            description: None,
            amount: dec!(500.00),
            budget_type,
            start_date: start,
            end_date: None,
            alert_threshold: None,
        }
    }

    #[test]
    fn create_derives_end_date_once() {
        let service = service(Decimal::ZERO, date(2024, 1, 16));
        let budget = service
            .create_budget(new_budget(BudgetType::Monthly, Some(date(2024, 1, 1))))
            .unwrap();
        assert_eq!(budget.end_date, date(2024, 1, 31));
        assert_eq!(budget.alert_threshold, dec!(80.00));
        assert_eq!(budget.status, BudgetStatus::Active);
    }

    #[test]
    fn create_defaults_start_to_today() {
        let service = service(Decimal::ZERO, date(2024, 3, 5));
        let budget = service
            .create_budget(new_budget(BudgetType::Weekly, None))
            .unwrap();
        assert_eq!(budget.start_date, date(2024, 3, 5));
        assert_eq!(budget.end_date, date(2024, 3, 11));
    }

    #[test]
    fn custom_budget_without_end_is_rejected() {
        let service = service(Decimal::ZERO, date(2024, 1, 1));
        let err = service
            .create_budget(new_budget(BudgetType::Custom, Some(date(2024, 1, 1))))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod(_)));
    }

    #[test]
    fn explicit_end_before_start_is_rejected() {
        let service = service(Decimal::ZERO, date(2024, 1, 1));
        let mut input = new_budget(BudgetType::Custom, Some(date(2024, 5, 10)));
        input.end_date = Some(date(2024, 5, 9));
        let err = service.create_budget(input).unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod(_)));
    }

    #[test]
    fn ledger_uses_aggregated_total_and_pinned_today() {
        let service = service(dec!(450.00), date(2024, 1, 16));
        let budget = service
            .create_budget(new_budget(BudgetType::Monthly, Some(date(2024, 1, 1))))
            .unwrap();

        let ledger = service.ledger(&budget.id).unwrap();
        assert_eq!(ledger.remaining, dec!(50.00));
        assert_eq!(ledger.usage_percentage, dec!(90.00));
        assert!(ledger.is_near_limit);
        assert!(!ledger.is_over_budget);
        assert_eq!(ledger.days_remaining, 15);
    }

    #[test]
    fn delete_cascades_allocations() {
        let allocation_repo = Arc::new(MockAllocationRepository::default());
        let service = BudgetService::new(
            Arc::new(MockBudgetRepository::default()),
            allocation_repo.clone(),
            Arc::new(FixedExpenseService {
                total: Decimal::ZERO,
            }),
            Arc::new(FixedClock(date(2024, 1, 1))),
        );

        let budget = service
            .create_budget(new_budget(BudgetType::Monthly, Some(date(2024, 1, 1))))
            .unwrap();
        service.delete_budget(&budget.id).unwrap();

        assert_eq!(
            allocation_repo.deleted_for.read().unwrap().as_slice(),
            &[budget.id]
        );
    }

    #[test]
    fn active_list_excludes_ended_periods() {
        let service = service(Decimal::ZERO, date(2024, 3, 5));
        let current = service
            .create_budget(new_budget(BudgetType::Monthly, Some(date(2024, 3, 1))))
            .unwrap();
        let _ended = service
            .create_budget(new_budget(BudgetType::Monthly, Some(date(2024, 1, 1))))
            .unwrap();

        let active = service.list_active_budgets("u1").unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, current.id);
    }
}
