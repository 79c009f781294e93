use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use super::require_text;
use crate::enums::TimelineStatus;
use crate::errors::CoreError;

/// One step of a case's eviction workflow.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineEvent {
    pub id: i64,
    #[serde(skip_serializing)]
    #[schemars(skip)]
    pub case_id: i64,
    pub step_number: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TimelineStatus,
    /// Set once the step is current or completed.
    pub event_date: Option<NaiveDate>,
    /// Projection used while the step is still pending.
    pub estimated_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Construction contract for a timeline event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimelineEvent {
    pub case_id: i64,
    pub step_number: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TimelineStatus,
    pub event_date: Option<NaiveDate>,
    pub estimated_date: Option<NaiveDate>,
}

impl NewTimelineEvent {
    #[must_use]
    pub fn new(case_id: i64, step_number: i64, title: impl Into<String>) -> Self {
        Self {
            case_id,
            step_number,
            title: title.into(),
            description: None,
            status: TimelineStatus::default(),
            event_date: None,
            estimated_date: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TimelineStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn event_date(mut self, date: Option<NaiveDate>) -> Self {
        self.event_date = date;
        self
    }

    #[must_use]
    pub const fn estimated_date(mut self, date: Option<NaiveDate>) -> Self {
        self.estimated_date = date;
        self
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)
    }

    #[must_use]
    pub fn into_event(self, id: i64, now: DateTime<Utc>) -> TimelineEvent {
        TimelineEvent {
            id,
            case_id: self.case_id,
            step_number: self.step_number,
            title: self.title,
            description: self.description,
            status: self.status,
            event_date: self.event_date,
            estimated_date: self.estimated_date,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        let event = NewTimelineEvent::new(1, 1, "Notice to Vacate");
        assert_eq!(event.status, TimelineStatus::Pending);
        assert_eq!(event.event_date, None);
        assert_eq!(event.estimated_date, None);
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(NewTimelineEvent::new(1, 1, " ").validate().is_err());
    }
}
