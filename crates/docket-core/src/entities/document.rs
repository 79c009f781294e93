use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use super::require_text;
use crate::enums::DocumentStatus;
use crate::errors::CoreError;

/// Metadata for a file associated with a case.
///
/// `file_path` points at storage outside the record and is not exposed to
/// clients.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Document {
    pub id: i64,
    #[serde(skip_serializing)]
    #[schemars(skip)]
    pub case_id: i64,
    pub name: String,
    pub document_type: String,
    #[serde(skip_serializing)]
    #[schemars(skip)]
    pub file_path: Option<String>,
    pub file_size: Option<i64>,
    pub status: DocumentStatus,
    pub uploaded_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Construction contract for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub case_id: i64,
    pub name: String,
    pub document_type: String,
    pub file_path: Option<String>,
    pub file_size: Option<i64>,
    pub status: DocumentStatus,
    pub uploaded_date: NaiveDate,
}

impl NewDocument {
    /// `uploaded_date` starts at today's UTC date.
    #[must_use]
    pub fn new(case_id: i64, name: impl Into<String>, document_type: impl Into<String>) -> Self {
        Self {
            case_id,
            name: name.into(),
            document_type: document_type.into(),
            file_path: None,
            file_size: None,
            status: DocumentStatus::default(),
            uploaded_date: Utc::now().date_naive(),
        }
    }

    #[must_use]
    pub fn file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn file_size(mut self, bytes: i64) -> Self {
        self.file_size = Some(bytes);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn uploaded_date(mut self, date: NaiveDate) -> Self {
        self.uploaded_date = date;
        self
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name or document type is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)?;
        require_text("document_type", &self.document_type)
    }

    #[must_use]
    pub fn into_document(self, id: i64, now: DateTime<Utc>) -> Document {
        Document {
            id,
            case_id: self.case_id,
            name: self.name,
            document_type: self.document_type,
            file_path: self.file_path,
            file_size: self.file_size,
            status: self.status,
            uploaded_date: self.uploaded_date,
            created_at: now,
        }
    }
}
