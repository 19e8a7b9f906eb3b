//! Budget templates - reusable category allocation plans.

mod templates_model;
mod templates_service;
mod templates_traits;

pub use templates_model::{BudgetTemplate, NewBudgetTemplate, TemplateAllocation, TemplateType};
pub use templates_service::TemplateService;
pub use templates_traits::{TemplateRepositoryTrait, TemplateServiceTrait};
