//! Core error types for Streakboard.
//!
//! These errors are storage-agnostic. Storage implementations report failures
//! through [`StorageError`] so the engine and the HTTP layer can tell a missing
//! record apart from an unavailable store.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the habit tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Failed to load seed data: {0}")]
    SeedData(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Shorthand for a missing entity of the given kind.
    pub fn not_found(kind: &str, id: i64) -> Self {
        Error::Storage(StorageError::NotFound(format!("{kind} with id {id} not found")))
    }

    /// Returns true when the error reports an absent entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Storage(StorageError::NotFound(_)))
    }
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The store could not serve the request (simulated I/O failure).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Internal/unexpected store error, e.g. a poisoned lock.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SeedData(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
