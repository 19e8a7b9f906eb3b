use super::profiles_model::UserProfile;
use crate::errors::Result;

/// Trait for profile repository operations.
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<UserProfile>;
    fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile>;
}
