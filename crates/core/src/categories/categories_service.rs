use std::sync::{Arc, Mutex};

use chrono::Datelike;
use dashmap::DashMap;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::categories_model::{
    validate_percentage, Category, CategorySummary, CategoryType, NewCategory,
    DEFAULT_CATEGORIES,
};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::expenses::ExpenseServiceTrait;
use crate::periods::Period;
use crate::profiles::ProfileRepositoryTrait;
use crate::utils::Clock;

pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepositoryTrait>,
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
    expense_service: Arc<dyn ExpenseServiceTrait>,
    clock: Arc<dyn Clock>,
    /// Serializes percentage updates per user so concurrent edits cannot
    /// overshoot the 100% sum.
    user_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl CategoryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryTrait>,
        profile_repo: Arc<dyn ProfileRepositoryTrait>,
        expense_service: Arc<dyn ExpenseServiceTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        CategoryService {
            category_repo,
            profile_repo,
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

    fn monthly_income(&self, user_id: &str) -> Result<Decimal> {
        match self.profile_repo.get_profile(user_id) {
            Ok(profile) => Ok(profile.monthly_income),
            // No profile on record behaves like zero income.
            Err(Error::NotFound(_)) => Ok(Decimal::ZERO),
            Err(err) => Err(err),
        }
    }
}

impl CategoryServiceTrait for CategoryService {
    fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;

        if self
            .category_repo
            .find_by_name(&new_category.user_id, &new_category.name)?
            .is_some()
        {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "category '{}' already exists",
                new_category.name
            ))));
        }

        let now = self.clock.now();
        let category = Category {
            id: new_category
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            color: new_category.resolved_color(),
            user_id: new_category.user_id,
            name: new_category.name,
            description: new_category.description,
            icon: new_category.icon,
            category_type: new_category.category_type,
            budget_percentage: new_category.budget_percentage.unwrap_or(Decimal::ZERO),
            is_default: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.category_repo.insert_category(category)
    }

    fn create_default_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        let now = self.clock.now();
        let mut created = Vec::new();

        for (name, description, color) in DEFAULT_CATEGORIES {
            if self.category_repo.find_by_name(user_id, name)?.is_some() {
                continue;
            }
            let category_type = if *name == "Income" {
                CategoryType::Income
            } else {
                CategoryType::Expense
            };
            let category = self.category_repo.insert_category(Category {
                id: Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                color: color.to_string(),
                icon: None,
                category_type,
                budget_percentage: Decimal::ZERO,
                is_default: true,
                is_active: true,
                created_at: now,
                updated_at: now,
            })?;
            created.push(category);
        }

        debug!("seeded {} default categories for {}", created.len(), user_id);
        Ok(created)
    }

    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        self.category_repo.list_categories(user_id)
    }

    fn set_budget_percentage(&self, category_id: &str, percentage: Decimal) -> Result<Category> {
        validate_percentage(percentage)?;

        let mut category = self.category_repo.get_category(category_id)?;
        let lock = self.user_lock(&category.user_id);
        let _guard = lock
            .lock()
            .map_err(|_| Error::Unexpected("category lock poisoned".to_string()))?;

        let committed: Decimal = self
            .category_repo
            .list_categories(&category.user_id)?
            .iter()
            .filter(|c| c.is_active && c.id != category_id)
            .map(|c| c.budget_percentage)
            .sum();

        if committed + percentage > dec!(100) {
            warn!(
                "percentage update rejected for category {}: {}% committed + {}% requested",
                category_id, committed, percentage
            );
            return Err(Error::AllocationExceeded(format!(
                "budget percentages would sum to {}%, above the 100% ceiling",
                committed + percentage
            )));
        }

        category.budget_percentage = percentage;
        category.updated_at = self.clock.now();
        self.category_repo.update_category(category)
    }

    fn category_summary(&self, category_id: &str) -> Result<CategorySummary> {
        let category = self.category_repo.get_category(category_id)?;
        let income = self.monthly_income(&category.user_id)?;
        let budget_amount = category.budget_amount(income);

        let today = self.clock.today();
        let month = Period::for_month(today.year(), today.month())?;
        let expenses = self.expense_service.aggregate(
            &category.user_id,
            month.start_date,
            month.end_date,
            Some(category_id),
        )?;

        Ok(CategorySummary::compute(budget_amount, expenses.total))
    }
}
