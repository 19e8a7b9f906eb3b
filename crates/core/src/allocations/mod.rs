//! Category allocations - distributing a budget's amount across categories.

mod allocations_model;
mod allocations_service;
mod allocations_traits;

pub use allocations_model::{AllocationSummary, CategoryAllocation, NewAllocation};
pub use allocations_service::AllocationService;
pub use allocations_traits::{AllocationRepositoryTrait, AllocationServiceTrait};
