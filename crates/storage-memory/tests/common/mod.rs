use std::sync::Arc;

use budgetly_core::alerts::AlertService;
use budgetly_core::allocations::AllocationService;
use budgetly_core::budgets::BudgetService;
use budgetly_core::categories::CategoryService;
use budgetly_core::expenses::{Expense, ExpenseService, ExpenseType, PaymentMethod};
use budgetly_core::templates::TemplateService;
use budgetly_core::utils::{Clock, FixedClock};
use budgetly_storage_memory::{
    InMemoryAlertRepository, InMemoryAllocationRepository, InMemoryBudgetRepository,
    InMemoryCategoryRepository, InMemoryExpenseRepository, InMemoryProfileRepository,
    InMemoryTemplateRepository,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// The full engine wired to in-memory storage with a pinned clock.
pub struct Engine {
    pub clock: FixedClock,
    pub expense_repo: Arc<InMemoryExpenseRepository>,
    pub budget_repo: Arc<InMemoryBudgetRepository>,
    pub category_repo: Arc<InMemoryCategoryRepository>,
    pub allocation_repo: Arc<InMemoryAllocationRepository>,
    pub alert_repo: Arc<InMemoryAlertRepository>,
    pub profile_repo: Arc<InMemoryProfileRepository>,
    pub template_repo: Arc<InMemoryTemplateRepository>,
    pub expense_service: Arc<ExpenseService>,
    pub budget_service: Arc<BudgetService>,
    pub allocation_service: Arc<AllocationService>,
    pub category_service: Arc<CategoryService>,
    pub alert_service: Arc<AlertService>,
    pub template_service: Arc<TemplateService>,
}

pub fn engine(today: NaiveDate) -> Engine {
    let clock = FixedClock(today);
    let clock_handle: Arc<dyn Clock> = Arc::new(clock);

    let expense_repo = Arc::new(InMemoryExpenseRepository::new());
    let budget_repo = Arc::new(InMemoryBudgetRepository::new());
    let category_repo = Arc::new(InMemoryCategoryRepository::new());
    let allocation_repo = Arc::new(InMemoryAllocationRepository::new());
    let alert_repo = Arc::new(InMemoryAlertRepository::new());
    let profile_repo = Arc::new(InMemoryProfileRepository::new());
    let template_repo = Arc::new(InMemoryTemplateRepository::new());

    let expense_service = Arc::new(ExpenseService::new(expense_repo.clone()));
    let budget_service = Arc::new(BudgetService::new(
        budget_repo.clone(),
        allocation_repo.clone(),
        expense_service.clone(),
        clock_handle.clone(),
    ));
    let allocation_service = Arc::new(AllocationService::new(
        allocation_repo.clone(),
        budget_repo.clone(),
        expense_service.clone(),
        clock_handle.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(
        category_repo.clone(),
        profile_repo.clone(),
        expense_service.clone(),
        clock_handle.clone(),
    ));
    let alert_service = Arc::new(AlertService::new(
        alert_repo.clone(),
        budget_service.clone(),
        clock_handle.clone(),
    ));
    let template_service = Arc::new(TemplateService::new(
        template_repo.clone(),
        budget_service.clone(),
        category_repo.clone(),
        allocation_repo.clone(),
        clock_handle,
    ));

    Engine {
        clock,
        expense_repo,
        budget_repo,
        category_repo,
        allocation_repo,
        alert_repo,
        profile_repo,
        template_repo,
        expense_service,
        budget_service,
        allocation_service,
        category_service,
        alert_service,
        template_service,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn seed_expense(
    engine: &Engine,
    user_id: &str,
    amount: Decimal,
    on: NaiveDate,
    category_id: &str,
) -> Expense {
    let now = engine.clock.now();
    engine.expense_repo.insert_expense(Expense {
        id: format!("exp-{}-{}-{}-{}", user_id, category_id, on, amount),
        user_id: user_id.to_string(),
        title: format!("{} purchase", category_id),
        description: None,
        amount,
        category_id: category_id.to_string(),
        date: on,
        expense_type: ExpenseType::OneTime,
        payment_method: PaymentMethod::Cash,
        is_recurring: false,
        recurring_frequency: None,
        recurring_end_date: None,
        created_at: now,
        updated_at: now,
    })
}
