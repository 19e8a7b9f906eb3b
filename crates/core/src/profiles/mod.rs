//! User financial profiles - income and goal defaults.

mod profiles_model;
mod profiles_traits;

pub use profiles_model::UserProfile;
pub use profiles_traits::ProfileRepositoryTrait;
