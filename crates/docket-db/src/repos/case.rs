//! Case repository: create, lookups, access-code authentication, status
//! updates, and aggregate deletion.

use chrono::Utc;

use docket_core::entities::{Case, NewCase};
use docket_core::responses::{CaseOverview, DeleteResponse};

use crate::DocketDb;
use crate::error::DatabaseError;
use crate::helpers::{
    format_date, format_naive_datetime, get_opt_string, parse_datetime, parse_optional_date,
    parse_optional_naive_datetime,
};
use crate::updates::case::CaseStatusUpdate;

const SELECT_COLS: &str = "id, case_number, client_name, tenant_name, property_address, county, \
     court, case_type, current_status, current_step, total_steps, filed_date, notice_served_date, \
     hearing_date, response_deadline, payment_status, access_code, created_at, updated_at";

fn row_to_case(row: &libsql::Row) -> Result<Case, DatabaseError> {
    Ok(Case {
        id: row.get(0)?,
        case_number: row.get(1)?,
        client_name: row.get(2)?,
        tenant_name: get_opt_string(row, 3)?,
        property_address: row.get(4)?,
        county: row.get(5)?,
        court: row.get(6)?,
        case_type: row.get(7)?,
        current_status: row.get(8)?,
        current_step: row.get(9)?,
        total_steps: row.get(10)?,
        filed_date: parse_optional_date(get_opt_string(row, 11)?.as_deref())?,
        notice_served_date: parse_optional_date(get_opt_string(row, 12)?.as_deref())?,
        hearing_date: parse_optional_naive_datetime(get_opt_string(row, 13)?.as_deref())?,
        response_deadline: parse_optional_date(get_opt_string(row, 14)?.as_deref())?,
        payment_status: row.get(15)?,
        access_code: row.get(16)?,
        created_at: parse_datetime(&row.get::<String>(17)?)?,
        updated_at: parse_datetime(&row.get::<String>(18)?)?,
    })
}

/// Insert a case and read back its identity on the same connection.
pub(crate) async fn insert_case(
    conn: &libsql::Connection,
    new: NewCase,
) -> Result<Case, DatabaseError> {
    new.validate()?;
    let now = Utc::now();

    conn.execute(
        "INSERT INTO cases (case_number, client_name, tenant_name, property_address, county, \
         court, case_type, current_status, current_step, total_steps, filed_date, \
         notice_served_date, hearing_date, response_deadline, payment_status, access_code, \
         created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
        libsql::params![
            new.case_number.as_str(),
            new.client_name.as_str(),
            new.tenant_name.clone(),
            new.property_address.as_str(),
            new.county.as_str(),
            new.court.as_str(),
            new.case_type.as_str(),
            new.current_status.as_str(),
            new.current_step,
            new.total_steps,
            new.filed_date.map(format_date),
            new.notice_served_date.map(format_date),
            new.hearing_date.map(format_naive_datetime),
            new.response_deadline.map(format_date),
            new.payment_status.as_str(),
            new.access_code.as_str(),
            now.to_rfc3339(),
            now.to_rfc3339()
        ],
    )
    .await?;

    let id = conn.last_insert_rowid();
    tracing::debug!(id, case_number = %new.case_number, "inserted case");
    Ok(new.into_case(id, now))
}

pub(crate) async fn find_case_by_number(
    conn: &libsql::Connection,
    case_number: &str,
) -> Result<Option<Case>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM cases WHERE case_number = ?1"),
            [case_number],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_case(&row)?)),
        None => Ok(None),
    }
}

impl DocketDb {
    /// Insert a single case outside of any unit of work.
    ///
    /// # Errors
    ///
    /// `ConstraintViolation` on a duplicate case number or blank required field.
    pub async fn create_case(&self, new: NewCase) -> Result<Case, DatabaseError> {
        insert_case(self.conn(), new).await
    }

    /// # Errors
    ///
    /// `NotFound` if no case has this id.
    pub async fn get_case(&self, id: i64) -> Result<Case, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM cases WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "case",
            key: id.to_string(),
        })?;
        row_to_case(&row)
    }

    /// # Errors
    ///
    /// `NotFound` if no case has this number.
    pub async fn get_case_by_number(&self, case_number: &str) -> Result<Case, DatabaseError> {
        find_case_by_number(self.conn(), case_number)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "case",
                key: case_number.to_string(),
            })
    }

    pub async fn list_cases(&self, limit: u32) -> Result<Vec<Case>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM cases ORDER BY case_number LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut cases = Vec::new();
        while let Some(row) = rows.next().await? {
            cases.push(row_to_case(&row)?);
        }
        Ok(cases)
    }

    pub async fn count_cases(&self) -> Result<i64, DatabaseError> {
        let mut rows = self.conn().query("SELECT COUNT(*) FROM cases", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get(0)?)
    }

    /// Look a case up by number and shared access code.
    ///
    /// An unknown number and a wrong code produce the same error.
    ///
    /// # Errors
    ///
    /// `AccessDenied` unless both values match a stored case.
    pub async fn authenticate(
        &self,
        case_number: &str,
        access_code: &str,
    ) -> Result<Case, DatabaseError> {
        match find_case_by_number(self.conn(), case_number).await? {
            Some(case) if case.access_code == access_code => Ok(case),
            _ => {
                tracing::warn!(case_number, "rejected case access attempt");
                Err(DatabaseError::AccessDenied)
            }
        }
    }

    /// Everything the dashboard shows for one case.
    ///
    /// # Errors
    ///
    /// `NotFound` if no case has this number.
    pub async fn case_overview(&self, case_number: &str) -> Result<CaseOverview, DatabaseError> {
        let case = self.get_case_by_number(case_number).await?;
        let timeline = self.timeline_for_case(case.id).await?;
        let documents = self.documents_for_case(case.id).await?;
        Ok(CaseOverview::new(case, timeline, documents))
    }

    /// Apply the provided status fields and refresh `updated_at`.
    ///
    /// Step values are stored as given; no workflow ordering is checked.
    ///
    /// # Errors
    ///
    /// `NotFound` if no case has this number.
    pub async fn update_case_status(
        &self,
        case_number: &str,
        update: CaseStatusUpdate,
    ) -> Result<Case, DatabaseError> {
        if update.is_empty() {
            return self.get_case_by_number(case_number).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref status) = update.current_status {
            sets.push(format!("current_status = ?{idx}"));
            params.push(status.clone().into());
            idx += 1;
        }
        if let Some(step) = update.current_step {
            sets.push(format!("current_step = ?{idx}"));
            params.push(step.into());
            idx += 1;
        }
        if let Some(ref payment) = update.payment_status {
            sets.push(format!("payment_status = ?{idx}"));
            params.push(payment.clone().into());
            idx += 1;
        }
        if let Some(hearing) = update.hearing_date {
            sets.push(format!("hearing_date = ?{idx}"));
            params.push(hearing.map_or(libsql::Value::Null, |at| format_naive_datetime(at).into()));
            idx += 1;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(case_number.into());
        let sql = format!(
            "UPDATE cases SET {} WHERE case_number = ?{idx}",
            sets.join(", ")
        );
        let changed = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity: "case",
                key: case_number.to_string(),
            });
        }

        tracing::info!(case_number, ?update, "updated case status");
        self.get_case_by_number(case_number).await
    }

    /// Delete a case and everything it owns in one transaction.
    ///
    /// Documents and timeline events are deleted before the case row.
    ///
    /// # Errors
    ///
    /// `NotFound` if no case has this number; nothing is deleted on any error.
    pub async fn delete_case(&self, case_number: &str) -> Result<DeleteResponse, DatabaseError> {
        let uow = self.begin().await?;
        match delete_case_rows(uow.conn(), case_number).await {
            Ok(response) => {
                uow.commit().await?;
                tracing::info!(
                    case_number,
                    timeline_events = response.timeline_events_deleted,
                    documents = response.documents_deleted,
                    "deleted case"
                );
                Ok(response)
            }
            Err(error) => {
                if let Err(rollback_error) = uow.rollback().await {
                    tracing::warn!(%rollback_error, "rollback after failed delete also failed");
                }
                Err(error)
            }
        }
    }
}

async fn delete_case_rows(
    conn: &libsql::Connection,
    case_number: &str,
) -> Result<DeleteResponse, DatabaseError> {
    let case = find_case_by_number(conn, case_number)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "case",
            key: case_number.to_string(),
        })?;

    let documents_deleted = conn
        .execute("DELETE FROM documents WHERE case_id = ?1", [case.id])
        .await?;
    let timeline_events_deleted = conn
        .execute("DELETE FROM timeline_events WHERE case_id = ?1", [case.id])
        .await?;
    conn.execute("DELETE FROM cases WHERE id = ?1", [case.id])
        .await?;

    Ok(DeleteResponse {
        case_number: case.case_number,
        timeline_events_deleted,
        documents_deleted,
    })
}
