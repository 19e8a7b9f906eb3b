//! Core error types for the Budgetly engine.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted into these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the budget engine.
///
/// Every variant is recoverable: callers turn these into user-facing
/// validation messages. Arithmetic in the engine never produces
/// division-by-zero errors; zero-amount cases are defined to yield zero.
#[derive(Error, Debug)]
pub enum Error {
    /// A custom period end date was missing or earlier than the start date.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// A monetary amount was below the accepted minimum.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// An allocation would push a category past the 100% ceiling.
    #[error("Allocation exceeded: {0}")]
    AllocationExceeded(String),

    /// A referenced budget, category, or other record is absent from the
    /// store.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Failure reported by the underlying record store.
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation failures on caller-supplied input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
