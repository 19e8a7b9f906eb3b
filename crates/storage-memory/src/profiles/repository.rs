use budgetly_core::errors::{Error, Result};
use budgetly_core::profiles::{ProfileRepositoryTrait, UserProfile};
use dashmap::DashMap;

/// Profile table keyed by user id.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: DashMap<String, UserProfile>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepositoryTrait for InMemoryProfileRepository {
    fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.profiles
            .get(user_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| Error::NotFound(format!("profile {}", user_id)))
    }

    fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        self.profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile)
    }
}
