use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::allocations_model::{AllocationSummary, CategoryAllocation, NewAllocation};
use super::allocations_traits::{AllocationRepositoryTrait, AllocationServiceTrait};
use crate::budgets::BudgetRepositoryTrait;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseServiceTrait;
use crate::utils::Clock;

/// Percentage ceiling for one category across a user's active budgets.
const ALLOCATION_CEILING: Decimal = dec!(100);

pub struct AllocationService {
    allocation_repo: Arc<dyn AllocationRepositoryTrait>,
    budget_repo: Arc<dyn BudgetRepositoryTrait>,
    expense_service: Arc<dyn ExpenseServiceTrait>,
    clock: Arc<dyn Clock>,
    /// Serializes ceiling check + write per user so two concurrent requests
    /// cannot both pass the check against a stale sum.
    user_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl AllocationService {
    pub fn new(
        allocation_repo: Arc<dyn AllocationRepositoryTrait>,
        budget_repo: Arc<dyn BudgetRepositoryTrait>,
        expense_service: Arc<dyn ExpenseServiceTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        AllocationService {
            allocation_repo,
            budget_repo,
            expense_service,
            clock,
            user_locks: DashMap::new(),
        }
    }

    fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.user_locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// The category's allocation percentage already committed across the
    /// user's active budgets, excluding the row being replaced.
    fn committed_percentage(
        &self,
        user_id: &str,
        category_id: &str,
        replacing_budget_id: &str,
    ) -> Result<Decimal> {
        let today = self.clock.today();
        let active_budgets = self.budget_repo.list_active_budgets(user_id, today)?;
        let allocations = self.allocation_repo.list_for_category(category_id)?;

        let mut committed = Decimal::ZERO;
        for allocation in &allocations {
            if allocation.budget_id == replacing_budget_id {
                continue;
            }
            let Some(budget) = active_budgets.iter().find(|b| b.id == allocation.budget_id)
            else {
                continue;
            };
            if budget.amount > Decimal::ZERO {
                committed += allocation.allocated_amount / budget.amount * dec!(100);
            }
        }
        Ok(committed)
    }
}

impl AllocationServiceTrait for AllocationService {
    fn allocate(&self, new_allocation: NewAllocation) -> Result<CategoryAllocation> {
        new_allocation.validate()?;

        let budget = self.budget_repo.get_budget(&new_allocation.budget_id)?;
        if budget.amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "budget {} has no allocatable amount",
                budget.id
            )));
        }

        let lock = self.user_lock(&budget.user_id);
        let _guard = lock
            .lock()
            .map_err(|_| Error::Unexpected("allocation lock poisoned".to_string()))?;

        let committed = self.committed_percentage(
            &budget.user_id,
            &new_allocation.category_id,
            &new_allocation.budget_id,
        )?;
        let requested = new_allocation.amount / budget.amount * dec!(100);

        if committed + requested > ALLOCATION_CEILING {
            warn!(
                "allocation rejected for category {}: {}% committed + {}% requested",
                new_allocation.category_id,
                committed.round_dp(2),
                requested.round_dp(2)
            );
            return Err(Error::AllocationExceeded(format!(
                "category {} would be allocated {}%, above the {}% ceiling",
                new_allocation.category_id,
                (committed + requested).round_dp(2),
                ALLOCATION_CEILING
            )));
        }

        let now = self.clock.now();
        let allocation = match self
            .allocation_repo
            .get_allocation(&new_allocation.budget_id, &new_allocation.category_id)
        {
            Ok(existing) => CategoryAllocation {
                allocated_amount: new_allocation.amount,
                updated_at: now,
                ..existing
            },
            Err(Error::NotFound(_)) => CategoryAllocation {
                id: Uuid::new_v4().to_string(),
                budget_id: new_allocation.budget_id,
                category_id: new_allocation.category_id,
                allocated_amount: new_allocation.amount,
                created_at: now,
                updated_at: now,
            },
            Err(err) => return Err(err),
        };

        self.allocation_repo.upsert_allocation(allocation)
    }

    fn allocation_summary(&self, budget_id: &str, category_id: &str) -> Result<AllocationSummary> {
        let budget = self.budget_repo.get_budget(budget_id)?;
        let allocation = self.allocation_repo.get_allocation(budget_id, category_id)?;
        let summary = self.expense_service.aggregate(
            &budget.user_id,
            budget.start_date,
            budget.end_date,
            Some(category_id),
        )?;
        Ok(AllocationSummary::compute(
            allocation.allocated_amount,
            summary.total,
        ))
    }
}
