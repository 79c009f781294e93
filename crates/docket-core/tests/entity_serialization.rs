//! Client-visible serialization of entities: field set, null handling,
//! ISO-8601 dates, and validation against the generated JSON Schemas.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::{Value, json};

use docket_core::entities::{Case, Document, NewCase, NewDocument, NewTimelineEvent, TimelineEvent};
use docket_core::enums::{DocumentStatus, TimelineStatus};
use docket_core::responses::{CaseOverview, SeedSummary, SeededCase};

fn validate_against_schema(schema: &Value, instance: &Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 2, 1, 12, 30, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_case() -> Case {
    NewCase::new("21456", "John Smith", "1234 Main St, Dallas, TX 75201", "test123")
        .tenant_name("Jane Doe")
        .status("Hearing Scheduled")
        .steps(4, 7)
        .filed_date(date(2023, 3, 20))
        .notice_served_date(date(2023, 2, 14))
        .hearing_date(date(2023, 5, 15).and_hms_opt(9, 0, 0).unwrap())
        .response_deadline(date(2023, 5, 12))
        .payment_status("Paid")
        .into_case(1, fixed_now())
}

macro_rules! validates_against_schema {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

validates_against_schema!(case_schema, Case, sample_case());

validates_against_schema!(
    timeline_event_schema,
    TimelineEvent,
    NewTimelineEvent::new(1, 5, "Judgment")
        .description("Court judgment issued")
        .estimated_date(Some(date(2023, 5, 20)))
        .into_event(7, fixed_now())
);

validates_against_schema!(
    document_schema,
    Document,
    NewDocument::new(1, "Court Filing", "PDF")
        .file_path("/srv/docs/21456/filing.pdf")
        .file_size(48_213)
        .uploaded_date(date(2023, 3, 20))
        .into_document(3, fixed_now())
);

validates_against_schema!(
    overview_schema,
    CaseOverview,
    CaseOverview::new(
        sample_case(),
        vec![NewTimelineEvent::new(1, 1, "Notice to Vacate").into_event(1, fixed_now())],
        vec![]
    )
);

validates_against_schema!(
    seed_summary_schema,
    SeedSummary,
    SeedSummary {
        cases: vec![SeededCase {
            case_number: "21456".into(),
            client_name: "John Smith".into(),
            access_code: "test123".into(),
            timeline_events: 7,
            documents: 4,
        }],
    }
);

#[test]
fn case_renders_every_client_field() {
    let value = serde_json::to_value(sample_case()).unwrap();
    let expected = json!({
        "id": 1,
        "case_number": "21456",
        "client_name": "John Smith",
        "tenant_name": "Jane Doe",
        "property_address": "1234 Main St, Dallas, TX 75201",
        "county": "Dallas",
        "court": "JP 4-1",
        "case_type": "Eviction",
        "current_status": "Hearing Scheduled",
        "current_step": 4,
        "total_steps": 7,
        "filed_date": "2023-03-20",
        "notice_served_date": "2023-02-14",
        "hearing_date": "2023-05-15T09:00:00",
        "response_deadline": "2023-05-12",
        "payment_status": "Paid",
        "created_at": "2023-02-01T12:30:00Z",
        "updated_at": "2023-02-01T12:30:00Z"
    });
    assert_eq!(value, expected);
}

#[test]
fn access_code_is_never_serialized() {
    let rendered = serde_json::to_string(&sample_case()).unwrap();
    assert!(!rendered.contains("access_code"));
    assert!(!rendered.contains("test123"));
}

#[test]
fn omitted_optionals_render_as_null() {
    let case = NewCase::new("30001", "Ada Client", "1 Elm St", "secret").into_case(9, fixed_now());
    let value = serde_json::to_value(&case).unwrap();

    assert_eq!(value["tenant_name"], Value::Null);
    assert_eq!(value["hearing_date"], Value::Null);
    assert_eq!(value["filed_date"], Value::Null);
    assert_eq!(value["notice_served_date"], Value::Null);
    assert_eq!(value["response_deadline"], Value::Null);

    assert_eq!(value["client_name"], "Ada Client");
    assert_eq!(value["county"], "Dallas");
    assert_eq!(value["current_step"], 1);
    assert_eq!(value["total_steps"], 7);
    assert_eq!(value["payment_status"], "Pending");
}

#[test]
fn dates_round_trip_through_iso_strings() {
    let case = sample_case();
    let value = serde_json::to_value(&case).unwrap();

    let filed: NaiveDate = value["filed_date"].as_str().unwrap().parse().unwrap();
    assert_eq!(Some(filed), case.filed_date);

    let hearing: NaiveDateTime = value["hearing_date"].as_str().unwrap().parse().unwrap();
    assert_eq!(Some(hearing), case.hearing_date);

    let created: DateTime<Utc> = value["created_at"].as_str().unwrap().parse().unwrap();
    assert_eq!(created, case.created_at);
}

#[test]
fn timeline_event_field_set() {
    let event = NewTimelineEvent::new(42, 1, "Notice to Vacate")
        .description("Legal notice served to tenant")
        .status(TimelineStatus::Completed)
        .event_date(Some(date(2023, 2, 14)))
        .into_event(5, fixed_now());
    let value = serde_json::to_value(&event).unwrap();

    let expected = json!({
        "id": 5,
        "step_number": 1,
        "title": "Notice to Vacate",
        "description": "Legal notice served to tenant",
        "status": "completed",
        "event_date": "2023-02-14",
        "estimated_date": null,
        "created_at": "2023-02-01T12:30:00Z"
    });
    assert_eq!(value, expected);
}

#[test]
fn document_hides_storage_details() {
    let doc = NewDocument::new(42, "Service Receipt", "PDF")
        .file_path("/srv/docs/receipt.pdf")
        .status(DocumentStatus::Processing)
        .uploaded_date(date(2023, 3, 25))
        .into_document(8, fixed_now());
    let value = serde_json::to_value(&doc).unwrap();

    let expected = json!({
        "id": 8,
        "name": "Service Receipt",
        "document_type": "PDF",
        "file_size": null,
        "status": "processing",
        "uploaded_date": "2023-03-25",
        "created_at": "2023-02-01T12:30:00Z"
    });
    assert_eq!(value, expected);
}

#[test]
fn overview_carries_progress() {
    let overview = CaseOverview::new(sample_case(), vec![], vec![]);
    let value = serde_json::to_value(&overview).unwrap();
    let progress = value["progress_percent"].as_f64().unwrap();
    assert!((progress - 4.0 / 7.0 * 100.0).abs() < 1e-9);
    assert_eq!(value["case"]["case_number"], "21456");
}
