//! Budget periods - types and calendar resolution.

mod periods_model;
mod periods_service;

pub use periods_model::{BudgetType, Period};
pub use periods_service::resolve_period;
