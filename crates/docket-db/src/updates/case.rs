//! Case status update builder.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStatusUpdate {
    pub current_status: Option<String>,
    pub current_step: Option<i64>,
    pub payment_status: Option<String>,
    pub hearing_date: Option<Option<NaiveDateTime>>,
}

impl CaseStatusUpdate {
    /// Whether applying this update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current_status.is_none()
            && self.current_step.is_none()
            && self.payment_status.is_none()
            && self.hearing_date.is_none()
    }
}

pub struct CaseStatusUpdateBuilder(CaseStatusUpdate);

impl CaseStatusUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CaseStatusUpdate::default())
    }

    #[must_use]
    pub fn current_status(mut self, status: impl Into<String>) -> Self {
        self.0.current_status = Some(status.into());
        self
    }

    #[must_use]
    pub const fn current_step(mut self, step: i64) -> Self {
        self.0.current_step = Some(step);
        self
    }

    #[must_use]
    pub fn payment_status(mut self, status: impl Into<String>) -> Self {
        self.0.payment_status = Some(status.into());
        self
    }

    /// `None` clears a scheduled hearing.
    #[must_use]
    pub const fn hearing_date(mut self, at: Option<NaiveDateTime>) -> Self {
        self.0.hearing_date = Some(at);
        self
    }

    #[must_use]
    pub fn build(self) -> CaseStatusUpdate {
        self.0
    }
}

impl Default for CaseStatusUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
