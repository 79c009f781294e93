use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use super::require_text;
use crate::errors::CoreError;

/// One eviction matter tracked by the dashboard.
///
/// Owns its timeline events and documents: deleting a case deletes both.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Case {
    pub id: i64,
    pub case_number: String,
    pub client_name: String,
    pub tenant_name: Option<String>,
    pub property_address: String,
    pub county: String,
    pub court: String,
    pub case_type: String,
    /// Free-text label shown on the dashboard, e.g. "Hearing Scheduled".
    pub current_status: String,
    pub current_step: i64,
    pub total_steps: i64,
    pub filed_date: Option<NaiveDate>,
    pub notice_served_date: Option<NaiveDate>,
    /// Local court time; no timezone is recorded.
    pub hearing_date: Option<NaiveDateTime>,
    pub response_deadline: Option<NaiveDate>,
    pub payment_status: String,
    /// Shared secret used to look the case up. Never serialized.
    #[serde(skip_serializing)]
    #[schemars(skip)]
    pub access_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Case {
    /// Share of the workflow reached so far, in percent.
    ///
    /// Returns 0 when `total_steps` is not positive.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        if self.total_steps <= 0 {
            return 0.0;
        }
        self.current_step as f64 / self.total_steps as f64 * 100.0
    }
}

/// Construction contract for a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCase {
    pub case_number: String,
    pub client_name: String,
    pub tenant_name: Option<String>,
    pub property_address: String,
    pub county: String,
    pub court: String,
    pub case_type: String,
    pub current_status: String,
    pub current_step: i64,
    pub total_steps: i64,
    pub filed_date: Option<NaiveDate>,
    pub notice_served_date: Option<NaiveDate>,
    pub hearing_date: Option<NaiveDateTime>,
    pub response_deadline: Option<NaiveDate>,
    pub payment_status: String,
    pub access_code: String,
}

impl NewCase {
    pub const DEFAULT_COUNTY: &'static str = "Dallas";
    pub const DEFAULT_COURT: &'static str = "JP 4-1";
    pub const DEFAULT_CASE_TYPE: &'static str = "Eviction";
    pub const DEFAULT_STATUS: &'static str = "Notice Preparation";
    pub const DEFAULT_PAYMENT_STATUS: &'static str = "Pending";
    pub const DEFAULT_CURRENT_STEP: i64 = 1;
    pub const DEFAULT_TOTAL_STEPS: i64 = 7;

    #[must_use]
    pub fn new(
        case_number: impl Into<String>,
        client_name: impl Into<String>,
        property_address: impl Into<String>,
        access_code: impl Into<String>,
    ) -> Self {
        Self {
            case_number: case_number.into(),
            client_name: client_name.into(),
            tenant_name: None,
            property_address: property_address.into(),
            county: Self::DEFAULT_COUNTY.to_string(),
            court: Self::DEFAULT_COURT.to_string(),
            case_type: Self::DEFAULT_CASE_TYPE.to_string(),
            current_status: Self::DEFAULT_STATUS.to_string(),
            current_step: Self::DEFAULT_CURRENT_STEP,
            total_steps: Self::DEFAULT_TOTAL_STEPS,
            filed_date: None,
            notice_served_date: None,
            hearing_date: None,
            response_deadline: None,
            payment_status: Self::DEFAULT_PAYMENT_STATUS.to_string(),
            access_code: access_code.into(),
        }
    }

    #[must_use]
    pub fn tenant_name(mut self, tenant_name: impl Into<String>) -> Self {
        self.tenant_name = Some(tenant_name.into());
        self
    }

    #[must_use]
    pub fn county(mut self, county: impl Into<String>) -> Self {
        self.county = county.into();
        self
    }

    #[must_use]
    pub fn court(mut self, court: impl Into<String>) -> Self {
        self.court = court.into();
        self
    }

    #[must_use]
    pub fn case_type(mut self, case_type: impl Into<String>) -> Self {
        self.case_type = case_type.into();
        self
    }

    #[must_use]
    pub fn status(mut self, current_status: impl Into<String>) -> Self {
        self.current_status = current_status.into();
        self
    }

    #[must_use]
    pub const fn steps(mut self, current_step: i64, total_steps: i64) -> Self {
        self.current_step = current_step;
        self.total_steps = total_steps;
        self
    }

    #[must_use]
    pub const fn filed_date(mut self, date: NaiveDate) -> Self {
        self.filed_date = Some(date);
        self
    }

    #[must_use]
    pub const fn notice_served_date(mut self, date: NaiveDate) -> Self {
        self.notice_served_date = Some(date);
        self
    }

    #[must_use]
    pub const fn hearing_date(mut self, at: NaiveDateTime) -> Self {
        self.hearing_date = Some(at);
        self
    }

    #[must_use]
    pub const fn response_deadline(mut self, date: NaiveDate) -> Self {
        self.response_deadline = Some(date);
        self
    }

    #[must_use]
    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first blank required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("case_number", &self.case_number)?;
        require_text("client_name", &self.client_name)?;
        require_text("property_address", &self.property_address)?;
        require_text("access_code", &self.access_code)
    }

    /// Materialize the stored record once the store has assigned an identity.
    #[must_use]
    pub fn into_case(self, id: i64, now: DateTime<Utc>) -> Case {
        Case {
            id,
            case_number: self.case_number,
            client_name: self.client_name,
            tenant_name: self.tenant_name,
            property_address: self.property_address,
            county: self.county,
            court: self.court,
            case_type: self.case_type,
            current_status: self.current_status,
            current_step: self.current_step,
            total_steps: self.total_steps,
            filed_date: self.filed_date,
            notice_served_date: self.notice_served_date,
            hearing_date: self.hearing_date,
            response_deadline: self.response_deadline,
            payment_status: self.payment_status,
            access_code: self.access_code,
            created_at: now,
            updated_at: now,
        }
    }
}
