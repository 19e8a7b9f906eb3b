use super::categories_model::{Category, CategorySummary, NewCategory};
use crate::errors::Result;

/// Trait for category repository operations.
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_category(&self, category_id: &str) -> Result<Category>;
    fn find_by_name(&self, user_id: &str, name: &str) -> Result<Option<Category>>;
    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>>;
    fn insert_category(&self, category: Category) -> Result<Category>;
    fn update_category(&self, category: Category) -> Result<Category>;
}

/// Trait for category service operations.
pub trait CategoryServiceTrait: Send + Sync {
    /// Creates a category; names are unique per owner.
    fn create_category(&self, new_category: NewCategory) -> Result<Category>;

    /// Seeds the standard category set, skipping names the user already has.
    fn create_default_categories(&self, user_id: &str) -> Result<Vec<Category>>;

    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>>;

    /// Updates the category's income share, holding the user's active
    /// categories to a combined 100%.
    fn set_budget_percentage(
        &self,
        category_id: &str,
        percentage: rust_decimal::Decimal,
    ) -> Result<Category>;

    /// Current-month spending against the category's income-derived budget.
    fn category_summary(&self, category_id: &str) -> Result<CategorySummary>;
}
