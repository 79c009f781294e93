//! Database error types for docket-db.

use docket_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A uniqueness, NOT NULL, or CHECK constraint rejected the write,
    /// or a required field was blank.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A dependent record referenced a case that does not exist.
    #[error("Referential error: {0}")]
    ReferentialError(String),

    /// Lookup by key found nothing.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Case number and access code did not match a stored case.
    #[error("Invalid case number or access code")]
    AccessDenied,

    /// A SQL query failed or returned unparseable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad fixture data).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error that is not a constraint failure.
    #[error("libSQL error: {0}")]
    LibSql(libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<libsql::Error> for DatabaseError {
    /// Classify `SQLite` constraint failures by their message.
    fn from(error: libsql::Error) -> Self {
        let msg = error.to_string();
        if msg.contains("FOREIGN KEY constraint failed") {
            Self::ReferentialError(msg)
        } else if msg.contains("constraint failed") {
            Self::ConstraintViolation(msg)
        } else {
            Self::LibSql(error)
        }
    }
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::ConstraintViolation(msg),
            CoreError::InvalidStatus { .. } => Self::Query(error.to_string()),
            CoreError::Other(inner) => Self::Other(inner),
        }
    }
}
