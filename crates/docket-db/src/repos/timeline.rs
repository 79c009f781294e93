//! Timeline event repository.

use chrono::Utc;

use docket_core::entities::{NewTimelineEvent, TimelineEvent};

use crate::DocketDb;
use crate::error::DatabaseError;
use crate::helpers::{format_date, get_opt_string, parse_datetime, parse_enum, parse_optional_date};

const SELECT_COLS: &str = "id, case_id, step_number, title, description, status, event_date, \
     estimated_date, created_at";

fn row_to_event(row: &libsql::Row) -> Result<TimelineEvent, DatabaseError> {
    Ok(TimelineEvent {
        id: row.get(0)?,
        case_id: row.get(1)?,
        step_number: row.get(2)?,
        title: row.get(3)?,
        description: get_opt_string(row, 4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        event_date: parse_optional_date(get_opt_string(row, 6)?.as_deref())?,
        estimated_date: parse_optional_date(get_opt_string(row, 7)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

pub(crate) async fn insert_timeline_event(
    conn: &libsql::Connection,
    new: NewTimelineEvent,
) -> Result<TimelineEvent, DatabaseError> {
    new.validate()?;
    let now = Utc::now();

    conn.execute(
        "INSERT INTO timeline_events (case_id, step_number, title, description, status, \
         event_date, estimated_date, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        libsql::params![
            new.case_id,
            new.step_number,
            new.title.as_str(),
            new.description.clone(),
            new.status.as_str(),
            new.event_date.map(format_date),
            new.estimated_date.map(format_date),
            now.to_rfc3339()
        ],
    )
    .await?;

    let id = conn.last_insert_rowid();
    tracing::debug!(id, case_id = new.case_id, step = new.step_number, "inserted timeline event");
    Ok(new.into_event(id, now))
}

impl DocketDb {
    /// # Errors
    ///
    /// `ReferentialError` if the case does not exist, `ConstraintViolation`
    /// if the title is blank.
    pub async fn add_timeline_event(
        &self,
        new: NewTimelineEvent,
    ) -> Result<TimelineEvent, DatabaseError> {
        insert_timeline_event(self.conn(), new).await
    }

    /// Timeline of one case in workflow order.
    pub async fn timeline_for_case(&self, case_id: i64) -> Result<Vec<TimelineEvent>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM timeline_events WHERE case_id = ?1 \
                     ORDER BY step_number, id"
                ),
                [case_id],
            )
            .await?;

        let mut events = Vec::new();
        while let Some(row) = rows.next().await? {
            events.push(row_to_event(&row)?);
        }
        Ok(events)
    }

    pub async fn count_timeline_events(&self, case_id: i64) -> Result<i64, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM timeline_events WHERE case_id = ?1",
                [case_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get(0)?)
    }
}
