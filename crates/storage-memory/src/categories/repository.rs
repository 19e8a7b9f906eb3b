use budgetly_core::categories::{Category, CategoryRepositoryTrait};
use budgetly_core::errors::{Error, Result};
use dashmap::DashMap;

/// Category table keyed by category id.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: DashMap<String, Category>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepositoryTrait for InMemoryCategoryRepository {
    fn get_category(&self, category_id: &str) -> Result<Category> {
        self.categories
            .get(category_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| Error::NotFound(format!("category {}", category_id)))
    }

    fn find_by_name(&self, user_id: &str, name: &str) -> Result<Option<Category>> {
        Ok(self
            .categories
            .iter()
            .find(|entry| entry.user_id == user_id && entry.name == name)
            .map(|entry| entry.clone()))
    }

    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.clone())
            .collect())
    }

    fn insert_category(&self, category: Category) -> Result<Category> {
        self.categories
            .insert(category.id.clone(), category.clone());
        Ok(category)
    }

    fn update_category(&self, category: Category) -> Result<Category> {
        if !self.categories.contains_key(&category.id) {
            return Err(Error::NotFound(format!("category {}", category.id)));
        }
        self.categories
            .insert(category.id.clone(), category.clone());
        Ok(category)
    }
}
