//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more field rules were violated. Each entry is a full sentence.
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
}

impl DomainError {
    /// All violated rules joined into one human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
