//! Budget alerts - records, evaluation state machine, and traits.

mod alerts_model;
mod alerts_service;
mod alerts_traits;

pub use alerts_model::{Alert, AlertType, NewAlert};
pub use alerts_service::{evaluate, AlertService};
pub use alerts_traits::{AlertRepositoryTrait, AlertServiceTrait};
