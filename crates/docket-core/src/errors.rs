//! Cross-cutting error types for Docket.
//!
//! Storage errors (`DatabaseError`) live in `docket-db`; configuration errors
//! live in `docket-config`. Everything converges into `anyhow` in `docket-cli`.

use thiserror::Error;

/// Errors that can be raised by any Docket crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (e.g., a required field is blank).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A status literal did not match any known variant.
    #[error("Invalid {kind} status: '{value}'")]
    InvalidStatus { kind: &'static str, value: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
