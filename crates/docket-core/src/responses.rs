//! Response types returned as JSON by `docket` commands.

use schemars::JsonSchema;
use serde::Serialize;

use crate::entities::{Case, Document, TimelineEvent};

/// Response from `docket auth`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq)]
pub struct AuthResponse {
    pub success: bool,
    pub case: Case,
}

/// Response from `docket case overview`: everything the dashboard renders.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq)]
pub struct CaseOverview {
    pub case: Case,
    pub progress_percent: f64,
    pub timeline: Vec<TimelineEvent>,
    pub documents: Vec<Document>,
}

impl CaseOverview {
    #[must_use]
    pub fn new(case: Case, timeline: Vec<TimelineEvent>, documents: Vec<Document>) -> Self {
        Self {
            progress_percent: case.progress_percent(),
            case,
            timeline,
            documents,
        }
    }
}

/// One case created by the seeder, with the code a client logs in with.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct SeededCase {
    pub case_number: String,
    pub client_name: String,
    pub access_code: String,
    pub timeline_events: usize,
    pub documents: usize,
}

/// Response from `docket seed`.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq, Eq)]
pub struct SeedSummary {
    pub cases: Vec<SeededCase>,
}

/// Response from `docket case delete`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub case_number: String,
    pub timeline_events_deleted: u64,
    pub documents_deleted: u64,
}
