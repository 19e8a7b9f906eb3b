use budgetly_core::errors::{Error, Result};
use budgetly_core::templates::{BudgetTemplate, TemplateRepositoryTrait};
use dashmap::DashMap;

/// Template table keyed by template id.
#[derive(Default)]
pub struct InMemoryTemplateRepository {
    templates: DashMap<String, BudgetTemplate>,
}

impl InMemoryTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateRepositoryTrait for InMemoryTemplateRepository {
    fn get_template(&self, template_id: &str) -> Result<BudgetTemplate> {
        self.templates
            .get(template_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| Error::NotFound(format!("template {}", template_id)))
    }

    fn list_templates(&self, user_id: &str) -> Result<Vec<BudgetTemplate>> {
        Ok(self
            .templates
            .iter()
            .filter(|entry| entry.is_public || entry.created_by.as_deref() == Some(user_id))
            .map(|entry| entry.clone())
            .collect())
    }

    fn insert_template(&self, template: BudgetTemplate) -> Result<BudgetTemplate> {
        self.templates
            .insert(template.id.clone(), template.clone());
        Ok(template)
    }

    fn update_template(&self, template: BudgetTemplate) -> Result<BudgetTemplate> {
        if !self.templates.contains_key(&template.id) {
            return Err(Error::NotFound(format!("template {}", template.id)));
        }
        self.templates
            .insert(template.id.clone(), template.clone());
        Ok(template)
    }
}
