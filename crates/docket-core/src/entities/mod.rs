//! Entity structs for all Docket domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `docket-db/migrations/001_initial.sql`). Persisted entities derive
//! `Serialize` and `JsonSchema`; their serialized form is the client-visible
//! representation, so storage-only fields are skipped.
//!
//! The `New*` structs are the construction contracts: required fields go
//! through `new`, everything else starts at its documented default.

mod case;
mod document;
mod timeline;

pub use case::{Case, NewCase};
pub use document::{Document, NewDocument};
pub use timeline::{NewTimelineEvent, TimelineEvent};

use crate::errors::CoreError;

/// Reject blank values for required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
