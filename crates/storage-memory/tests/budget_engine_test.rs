use budgetly_core::alerts::{AlertServiceTrait, AlertType};
use budgetly_core::allocations::{AllocationServiceTrait, NewAllocation};
use budgetly_core::budgets::{BudgetServiceTrait, NewBudget};
use budgetly_core::categories::{CategoryServiceTrait, NewCategory};
use budgetly_core::errors::Error;
use budgetly_core::expenses::ExpenseServiceTrait;
use budgetly_core::periods::BudgetType;
use budgetly_core::profiles::{ProfileRepositoryTrait, UserProfile};
use budgetly_core::templates::{
    NewBudgetTemplate, TemplateAllocation, TemplateServiceTrait, TemplateType,
};
use budgetly_core::utils::Clock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod common;
use common::{date, engine, seed_expense};

fn monthly_budget(engine: &common::Engine, amount: Decimal) -> budgetly_core::budgets::Budget {
    engine
        .budget_service
        .create_budget(NewBudget {
            id: None,
            user_id: "u1".to_string(),
            name: "Monthly spend".to_string(),
            description: None,
            amount,
            budget_type: BudgetType::Monthly,
            start_date: Some(date(2024, 1, 1)),
            end_date: None,
            alert_threshold: None,
        })
        .unwrap()
}

#[test]
fn monthly_budget_ledger_scenario() {
    let engine = engine(date(2024, 1, 20));
    let budget = monthly_budget(&engine, dec!(500.00));
    assert_eq!(budget.end_date, date(2024, 1, 31));

    seed_expense(&engine, "u1", dec!(200.00), date(2024, 1, 5), "food");
    seed_expense(&engine, "u1", dec!(150.00), date(2024, 1, 12), "transport");
    seed_expense(&engine, "u1", dec!(100.00), date(2024, 1, 18), "food");
    // Outside the period, must not count.
    seed_expense(&engine, "u1", dec!(75.00), date(2024, 2, 2), "food");

    let ledger = engine.budget_service.ledger(&budget.id).unwrap();
    assert_eq!(ledger.total_expenses, dec!(450.00));
    assert_eq!(ledger.remaining, dec!(50.00));
    assert_eq!(ledger.usage_percentage, dec!(90.00));
    assert!(ledger.is_near_limit);
    assert!(!ledger.is_over_budget);
    assert_eq!(ledger.days_remaining, 11);
}

#[test]
fn aggregation_includes_both_period_boundaries() {
    let engine = engine(date(2024, 1, 20));

    seed_expense(&engine, "u1", dec!(10.00), date(2024, 1, 1), "food");
    seed_expense(&engine, "u1", dec!(20.00), date(2024, 1, 31), "food");
    seed_expense(&engine, "u1", dec!(99.00), date(2023, 12, 31), "food");
    seed_expense(&engine, "u2", dec!(99.00), date(2024, 1, 15), "food");

    let summary = engine
        .expense_service
        .aggregate("u1", date(2024, 1, 1), date(2024, 1, 31), None)
        .unwrap();
    assert_eq!(summary.total, dec!(30.00));
    assert_eq!(summary.count, 2);
}

#[test]
fn category_income_share_scenario() {
    let engine = engine(date(2024, 1, 20));
    engine
        .profile_repo
        .upsert_profile(UserProfile::with_defaults(
            "u1",
            dec!(1000.00),
            engine.clock.now(),
        ))
        .unwrap();

    let category = engine
        .category_service
        .create_category(NewCategory {
            id: None,
            user_id: "u1".to_string(),
            name: "Food".to_string(),
            description: None,
            color: None,
            icon: None,
            category_type: Default::default(),
            budget_percentage: Some(dec!(30)),
        })
        .unwrap();

    seed_expense(&engine, "u1", dec!(320.00), date(2024, 1, 10), &category.id);

    let summary = engine
        .category_service
        .category_summary(&category.id)
        .unwrap();
    assert_eq!(summary.budget_amount, dec!(300.00));
    assert_eq!(summary.total_expenses, dec!(320.00));
    assert_eq!(summary.usage_percentage, dec!(106.67));
    assert_eq!(summary.remaining, dec!(-20.00));
}

#[test]
fn allocation_ceiling_scenario() {
    let engine = engine(date(2024, 1, 20));
    let first = monthly_budget(&engine, dec!(1000.00));
    let second = engine
        .budget_service
        .create_budget(NewBudget {
            id: None,
            user_id: "u1".to_string(),
            name: "Second budget".to_string(),
            description: None,
            amount: dec!(1000.00),
            budget_type: BudgetType::Monthly,
            start_date: Some(date(2024, 1, 1)),
            end_date: None,
            alert_threshold: None,
        })
        .unwrap();

    engine
        .allocation_service
        .allocate(NewAllocation {
            budget_id: first.id.clone(),
            category_id: "food".to_string(),
            amount: dec!(900.00),
        })
        .unwrap();

    // 90% committed: another 15% breaks the ceiling, 10% does not.
    let err = engine
        .allocation_service
        .allocate(NewAllocation {
            budget_id: second.id.clone(),
            category_id: "food".to_string(),
            amount: dec!(150.00),
        })
        .unwrap_err();
    assert!(matches!(err, Error::AllocationExceeded(_)));

    let allocation = engine
        .allocation_service
        .allocate(NewAllocation {
            budget_id: second.id.clone(),
            category_id: "food".to_string(),
            amount: dec!(100.00),
        })
        .unwrap();
    assert_eq!(allocation.allocated_amount, dec!(100.00));
}

#[test]
fn alert_lifecycle_scenario() {
    let engine = engine(date(2024, 1, 10));
    let budget = monthly_budget(&engine, dec!(100.00));
    seed_expense(&engine, "u1", dec!(120.00), date(2024, 1, 5), "food");

    let first = engine.alert_service.evaluate_budget(&budget.id).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].alert_type, AlertType::OverBudget);

    // Unchanged state: nothing new.
    assert!(engine
        .alert_service
        .evaluate_budget(&budget.id)
        .unwrap()
        .is_empty());

    let read = engine.alert_service.mark_as_read(&first[0].id).unwrap();
    assert!(read.is_read);
    assert!(read.read_at.is_some());

    // Dismissal re-arms the type.
    engine.alert_service.dismiss(&first[0].id).unwrap();
    let again = engine.alert_service.evaluate_budget(&budget.id).unwrap();
    assert_eq!(again.len(), 1);
    assert_eq!(again[0].alert_type, AlertType::OverBudget);
}

#[test]
fn period_ending_alert_scenario() {
    let engine = engine(date(2024, 1, 29));
    let budget = monthly_budget(&engine, dec!(500.00));

    let alerts = engine.alert_service.evaluate_budget(&budget.id).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::PeriodEnding);
}

#[test]
fn template_instantiation_scenario() {
    let engine = engine(date(2024, 1, 1));
    engine
        .category_service
        .create_default_categories("u1")
        .unwrap();

    let template = engine
        .template_service
        .create_template(NewBudgetTemplate {
            id: None,
            name: "Family".to_string(),
            description: Some("Family monthly plan".to_string()),
            template_type: TemplateType::Family,
            budget_type: BudgetType::Monthly,
            is_public: true,
            created_by: None,
            allocations: vec![
                TemplateAllocation {
                    category_name: "Food".to_string(),
                    percentage: dec!(30),
                },
                TemplateAllocation {
                    category_name: "Transport".to_string(),
                    percentage: dec!(20),
                },
                TemplateAllocation {
                    category_name: "Yachts".to_string(),
                    percentage: dec!(50),
                },
            ],
        })
        .unwrap();

    let (budget, allocations) = engine
        .template_service
        .create_budget_from_template(&template.id, "u1", dec!(1000.00), Some(date(2024, 1, 1)))
        .unwrap();

    assert_eq!(budget.end_date, date(2024, 1, 31));
    // The unknown category is skipped without failing the instantiation.
    assert_eq!(allocations.len(), 2);
    let mut amounts: Vec<Decimal> = allocations.iter().map(|a| a.allocated_amount).collect();
    amounts.sort();
    assert_eq!(amounts, vec![dec!(200.00), dec!(300.00)]);

    let stored = engine
        .template_service
        .list_templates("u1")
        .unwrap()
        .into_iter()
        .find(|t| t.id == template.id)
        .unwrap();
    assert_eq!(stored.usage_count, 1);
}

#[test]
fn deleting_a_budget_cascades_its_allocations() {
    use budgetly_core::allocations::AllocationRepositoryTrait;

    let engine = engine(date(2024, 1, 10));
    let budget = monthly_budget(&engine, dec!(1000.00));

    engine
        .allocation_service
        .allocate(NewAllocation {
            budget_id: budget.id.clone(),
            category_id: "food".to_string(),
            amount: dec!(400.00),
        })
        .unwrap();
    engine
        .allocation_service
        .allocate(NewAllocation {
            budget_id: budget.id.clone(),
            category_id: "transport".to_string(),
            amount: dec!(300.00),
        })
        .unwrap();

    engine.budget_service.delete_budget(&budget.id).unwrap();

    assert!(engine
        .allocation_repo
        .list_for_budget(&budget.id)
        .unwrap()
        .is_empty());
    assert!(matches!(
        engine.budget_service.get_budget(&budget.id),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn allocation_summary_scenario() {
    let engine = engine(date(2024, 1, 20));
    let budget = monthly_budget(&engine, dec!(1000.00));

    engine
        .allocation_service
        .allocate(NewAllocation {
            budget_id: budget.id.clone(),
            category_id: "food".to_string(),
            amount: dec!(300.00),
        })
        .unwrap();

    seed_expense(&engine, "u1", dec!(320.00), date(2024, 1, 10), "food");
    // Other categories do not leak into the allocation's usage.
    seed_expense(&engine, "u1", dec!(500.00), date(2024, 1, 10), "transport");

    let summary = engine
        .allocation_service
        .allocation_summary(&budget.id, "food")
        .unwrap();
    assert_eq!(summary.total_expenses, dec!(320.00));
    assert_eq!(summary.remaining, dec!(-20.00));
    assert_eq!(summary.usage_percentage, dec!(106.67));
}
