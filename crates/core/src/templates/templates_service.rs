use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::templates_model::{BudgetTemplate, NewBudgetTemplate};
use super::templates_traits::{TemplateRepositoryTrait, TemplateServiceTrait};
use crate::allocations::{AllocationRepositoryTrait, CategoryAllocation};
use crate::budgets::{Budget, BudgetServiceTrait, NewBudget};
use crate::categories::CategoryRepositoryTrait;
use crate::constants::{MIN_MONETARY_AMOUNT, MONEY_DECIMAL_PRECISION};
use crate::errors::Result;
use crate::utils::Clock;

pub struct TemplateService {
    template_repo: Arc<dyn TemplateRepositoryTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    category_repo: Arc<dyn CategoryRepositoryTrait>,
    allocation_repo: Arc<dyn AllocationRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl TemplateService {
    pub fn new(
        template_repo: Arc<dyn TemplateRepositoryTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        category_repo: Arc<dyn CategoryRepositoryTrait>,
        allocation_repo: Arc<dyn AllocationRepositoryTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        TemplateService {
            template_repo,
            budget_service,
            category_repo,
            allocation_repo,
            clock,
        }
    }
}

impl TemplateServiceTrait for TemplateService {
    fn create_template(&self, new_template: NewBudgetTemplate) -> Result<BudgetTemplate> {
        new_template.validate()?;

        let now = self.clock.now();
        self.template_repo.insert_template(BudgetTemplate {
            id: new_template
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_template.name,
            description: new_template.description,
            template_type: new_template.template_type,
            budget_type: new_template.budget_type,
            is_default: false,
            is_public: new_template.is_public,
            is_featured: false,
            created_by: new_template.created_by,
            allocations: new_template.allocations,
            usage_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    fn list_templates(&self, user_id: &str) -> Result<Vec<BudgetTemplate>> {
        self.template_repo.list_templates(user_id)
    }

    fn create_budget_from_template(
        &self,
        template_id: &str,
        user_id: &str,
        amount: Decimal,
        start_date: Option<NaiveDate>,
    ) -> Result<(Budget, Vec<CategoryAllocation>)> {
        let mut template = self.template_repo.get_template(template_id)?;

        let budget = self.budget_service.create_budget(NewBudget {
            id: None,
            user_id: user_id.to_string(),
            name: template.name.clone(),
            description: template.description.clone(),
            amount,
            budget_type: template.budget_type,
            start_date,
            end_date: None,
            alert_threshold: None,
        })?;

        let now = self.clock.now();
        let mut created = Vec::new();
        for line in &template.allocations {
            let Some(category) = self
                .category_repo
                .find_by_name(user_id, &line.category_name)?
            else {
                debug!(
                    "template {}: user {} has no category '{}', skipping",
                    template_id, user_id, line.category_name
                );
                continue;
            };

            let allocated =
                (amount * line.percentage / dec!(100)).round_dp(MONEY_DECIMAL_PRECISION);
            if allocated < MIN_MONETARY_AMOUNT {
                debug!(
                    "template {}: allocation for '{}' rounds to {}, skipping",
                    template_id, line.category_name, allocated
                );
                continue;
            }

            let allocation = self.allocation_repo.upsert_allocation(CategoryAllocation {
                id: Uuid::new_v4().to_string(),
                budget_id: budget.id.clone(),
                category_id: category.id,
                allocated_amount: allocated,
                created_at: now,
                updated_at: now,
            })?;
            created.push(allocation);
        }

        template.usage_count += 1;
        template.updated_at = now;
        self.template_repo.update_template(template)?;

        Ok((budget, created))
    }
}
