//! Categories - domain models, summaries, and traits.

mod categories_model;
mod categories_service;
mod categories_traits;

pub use categories_model::{Category, CategorySummary, CategoryType, NewCategory, DEFAULT_CATEGORIES};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
