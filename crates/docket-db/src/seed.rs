//! Demo data: reset the store and load two example cases.
//!
//! The reset and every insert run in one [`UnitOfWork`], so a failed run
//! leaves the previous contents untouched.

use chrono::NaiveDate;

use docket_core::entities::{NewCase, NewDocument, NewTimelineEvent};
use docket_core::enums::{DocumentStatus, TimelineStatus};
use docket_core::responses::{SeedSummary, SeededCase};

use crate::error::DatabaseError;
use crate::{DocketDb, UnitOfWork};

/// A case together with the records it owns, before any identity exists.
///
/// `case_id` on the dependents is ignored and replaced with the identity
/// assigned to `case` during the run.
#[derive(Debug, Clone)]
pub struct CaseFixture {
    pub case: NewCase,
    pub timeline: Vec<NewTimelineEvent>,
    pub documents: Vec<NewDocument>,
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DatabaseError::InvalidState(format!("bad fixture date {year}-{month}-{day}")))
}

/// The seven-step Texas eviction workflow as it stands for case 21456.
fn timeline_template() -> Result<Vec<NewTimelineEvent>, DatabaseError> {
    let step = |n: i64, title: &str, description: &str, status: TimelineStatus| {
        NewTimelineEvent::new(0, n, title)
            .description(description)
            .status(status)
    };
    Ok(vec![
        step(1, "Notice to Vacate", "Legal notice served to tenant", TimelineStatus::Completed)
            .event_date(Some(ymd(2023, 2, 14)?)),
        step(2, "Filing Suit", "Eviction lawsuit filed with court", TimelineStatus::Completed)
            .event_date(Some(ymd(2023, 3, 20)?)),
        step(3, "Service of Papers", "Court papers served to tenant", TimelineStatus::Completed)
            .event_date(Some(ymd(2023, 3, 25)?)),
        step(4, "Court Hearing", "Scheduled court hearing", TimelineStatus::Current)
            .event_date(Some(ymd(2023, 5, 15)?)),
        step(5, "Judgment", "Court judgment issued", TimelineStatus::Pending)
            .estimated_date(Some(ymd(2023, 5, 20)?)),
        step(6, "Appeal Period", "5-day appeal period", TimelineStatus::Pending)
            .estimated_date(Some(ymd(2023, 5, 25)?)),
        step(7, "Writ of Possession", "Final eviction order", TimelineStatus::Pending)
            .estimated_date(Some(ymd(2023, 6, 15)?)),
    ])
}

/// Case 21456: hearing scheduled, four documents on file.
fn hearing_scheduled_case(template: &[NewTimelineEvent]) -> Result<CaseFixture, DatabaseError> {
    let hearing = ymd(2023, 5, 15)?
        .and_hms_opt(9, 0, 0)
        .ok_or_else(|| DatabaseError::InvalidState("bad fixture hearing time".into()))?;

    let case = NewCase::new(
        "21456",
        "John Smith",
        "1234 Main St, Dallas, TX 75201",
        "test123",
    )
    .tenant_name("Jane Doe")
    .status("Hearing Scheduled")
    .steps(4, 7)
    .filed_date(ymd(2023, 3, 20)?)
    .notice_served_date(ymd(2023, 2, 14)?)
    .hearing_date(hearing)
    .response_deadline(ymd(2023, 5, 12)?)
    .payment_status("Paid");

    let documents = [
        ("Notice to Vacate", ymd(2023, 2, 14)?),
        ("Lease Agreement", ymd(2023, 2, 10)?),
        ("Court Filing", ymd(2023, 3, 20)?),
        ("Service Receipt", ymd(2023, 3, 25)?),
    ]
    .into_iter()
    .map(|(name, uploaded)| {
        NewDocument::new(0, name, "PDF")
            .status(DocumentStatus::Available)
            .uploaded_date(uploaded)
    })
    .collect();

    Ok(CaseFixture {
        case,
        timeline: template.to_vec(),
        documents,
    })
}

/// Case 21457: notice just served, every later step still pending.
fn notice_served_case(template: &[NewTimelineEvent]) -> Result<CaseFixture, DatabaseError> {
    let served = ymd(2023, 4, 1)?;
    let case = NewCase::new(
        "21457",
        "Mary Johnson",
        "5678 Oak Ave, Dallas, TX 75202",
        "demo456",
    )
    .tenant_name("Bob Wilson")
    .status("Notice Served")
    .steps(1, 7)
    .notice_served_date(served)
    .payment_status("Pending");

    let timeline = template
        .iter()
        .map(|step| {
            let (status, event_date) = if step.step_number == 1 {
                (TimelineStatus::Completed, Some(served))
            } else {
                (TimelineStatus::Pending, None)
            };
            step.clone().status(status).event_date(event_date)
        })
        .collect();

    Ok(CaseFixture {
        case,
        timeline,
        documents: Vec::new(),
    })
}

/// The two demo cases loaded by [`populate`].
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if a fixture date is invalid.
pub fn demo_fixtures() -> Result<Vec<CaseFixture>, DatabaseError> {
    let template = timeline_template()?;
    Ok(vec![
        hearing_scheduled_case(&template)?,
        notice_served_case(&template)?,
    ])
}

/// Reset the store and load the demo cases.
///
/// # Errors
///
/// Any failure aborts the whole run and rolls it back.
pub async fn populate(db: &DocketDb) -> Result<SeedSummary, DatabaseError> {
    populate_with(db, demo_fixtures()?).await
}

/// Reset the store and load `fixtures` atomically.
///
/// # Errors
///
/// `ConstraintViolation` on duplicate case numbers or blank fields; any
/// error leaves the store as it was before the call.
pub async fn populate_with(
    db: &DocketDb,
    fixtures: Vec<CaseFixture>,
) -> Result<SeedSummary, DatabaseError> {
    let uow = db.begin().await?;
    match stage(&uow, fixtures).await {
        Ok(summary) => {
            uow.commit().await?;
            tracing::info!(cases = summary.cases.len(), "seeded database");
            Ok(summary)
        }
        Err(error) => {
            if let Err(rollback_error) = uow.rollback().await {
                tracing::warn!(%rollback_error, "rollback after failed seed also failed");
            }
            tracing::error!(%error, "seeding aborted");
            Err(error)
        }
    }
}

async fn stage(uow: &UnitOfWork, fixtures: Vec<CaseFixture>) -> Result<SeedSummary, DatabaseError> {
    uow.reset_schema().await?;

    let mut summary = SeedSummary::default();
    for fixture in fixtures {
        let case = uow.add_case(fixture.case).await?;
        let timeline_events = fixture.timeline.len();
        let documents = fixture.documents.len();

        for event in fixture.timeline {
            uow.add_timeline_event(NewTimelineEvent {
                case_id: case.id,
                ..event
            })
            .await?;
        }
        for document in fixture.documents {
            uow.add_document(NewDocument {
                case_id: case.id,
                ..document
            })
            .await?;
        }

        tracing::debug!(case_number = %case.case_number, timeline_events, documents, "staged case");
        summary.cases.push(SeededCase {
            case_number: case.case_number,
            client_name: case.client_name,
            access_code: case.access_code,
            timeline_events,
            documents,
        });
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn seeds_hearing_scheduled_case() {
        let db = test_db().await;
        populate(&db).await.unwrap();

        let case = db.get_case_by_number("21456").await.unwrap();
        assert_eq!(case.current_step, 4);
        assert_eq!(case.current_status, "Hearing Scheduled");
        assert_eq!(case.tenant_name.as_deref(), Some("Jane Doe"));
        assert_eq!(case.payment_status, "Paid");

        let timeline = db.timeline_for_case(case.id).await.unwrap();
        assert_eq!(timeline.len(), 7);
        for event in &timeline {
            if event.step_number <= 4 {
                assert!(event.status.is_reached(), "step {} should be reached", event.step_number);
                assert!(event.event_date.is_some());
            } else {
                assert_eq!(event.status, TimelineStatus::Pending);
                assert!(event.estimated_date.is_some());
                assert_eq!(event.event_date, None);
            }
        }
        assert_eq!(timeline[3].status, TimelineStatus::Current);

        let documents = db.documents_for_case(case.id).await.unwrap();
        assert_eq!(documents.len(), 4);
        assert!(documents.iter().all(|d| d.status == DocumentStatus::Available));
    }

    #[tokio::test]
    async fn seeds_notice_served_case() {
        let db = test_db().await;
        populate(&db).await.unwrap();

        let case = db.get_case_by_number("21457").await.unwrap();
        assert_eq!(case.current_step, 1);
        assert_eq!(case.current_status, "Notice Served");

        let timeline = db.timeline_for_case(case.id).await.unwrap();
        let completed: Vec<_> = timeline
            .iter()
            .filter(|e| e.status == TimelineStatus::Completed)
            .collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].step_number, 1);
        assert_eq!(completed[0].event_date, case.notice_served_date);

        let pending = timeline
            .iter()
            .filter(|e| e.status == TimelineStatus::Pending)
            .count();
        assert_eq!(pending, 6);

        // Template dates carry over only where the template had an estimate.
        assert_eq!(timeline[1].estimated_date, None);
        assert_eq!(timeline[1].event_date, None);
        assert_eq!(timeline[6].estimated_date, Some(ymd(2023, 6, 15).unwrap()));

        assert_eq!(db.count_documents(case.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn summary_lists_access_codes() {
        let db = test_db().await;
        let summary = populate(&db).await.unwrap();
        let codes: Vec<_> = summary
            .cases
            .iter()
            .map(|c| (c.case_number.as_str(), c.access_code.as_str()))
            .collect();
        assert_eq!(codes, [("21456", "test123"), ("21457", "demo456")]);
        assert_eq!(summary.cases[0].documents, 4);
        assert_eq!(summary.cases[1].timeline_events, 7);
    }

    #[tokio::test]
    async fn seeded_steps_stay_within_total() {
        let db = test_db().await;
        populate(&db).await.unwrap();
        for case in db.list_cases(10).await.unwrap() {
            assert!(case.current_step <= case.total_steps, "{}", case.case_number);
        }
    }

    #[tokio::test]
    async fn seeded_timelines_are_monotonic() {
        let db = test_db().await;
        populate(&db).await.unwrap();
        for case in db.list_cases(10).await.unwrap() {
            let timeline = db.timeline_for_case(case.id).await.unwrap();
            for pair in timeline.windows(2) {
                assert!(
                    pair[0].status.rank() >= pair[1].status.rank(),
                    "case {} step {} precedes a later-stage step",
                    case.case_number,
                    pair[0].step_number
                );
            }
        }
    }

    #[tokio::test]
    async fn reseeding_replaces_previous_contents() {
        let db = test_db().await;
        db.create_case(NewCase::new("77777", "Someone", "1 Elm St", "x"))
            .await
            .unwrap();
        populate(&db).await.unwrap();
        populate(&db).await.unwrap();

        assert_eq!(db.count_cases().await.unwrap(), 2);
        assert!(db.get_case_by_number("77777").await.is_err());
        let case = db.get_case_by_number("21456").await.unwrap();
        assert_eq!(db.count_timeline_events(case.id).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn failed_run_keeps_previous_contents() {
        let db = test_db().await;
        populate(&db).await.unwrap();

        let mut fixtures = demo_fixtures().unwrap();
        let duplicate = fixtures[0].clone();
        fixtures.push(duplicate);

        let result = populate_with(&db, fixtures).await;
        assert!(matches!(result, Err(DatabaseError::ConstraintViolation(_))));

        assert_eq!(db.count_cases().await.unwrap(), 2);
        let case = db.get_case_by_number("21457").await.unwrap();
        assert_eq!(db.count_timeline_events(case.id).await.unwrap(), 7);
    }
}
