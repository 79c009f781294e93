//! Document metadata repository.

use chrono::Utc;

use docket_core::entities::{Document, NewDocument};

use crate::DocketDb;
use crate::error::DatabaseError;
use crate::helpers::{format_date, get_opt_string, parse_date, parse_datetime, parse_enum};

const SELECT_COLS: &str = "id, case_id, name, document_type, file_path, file_size, status, \
     uploaded_date, created_at";

fn row_to_document(row: &libsql::Row) -> Result<Document, DatabaseError> {
    Ok(Document {
        id: row.get(0)?,
        case_id: row.get(1)?,
        name: row.get(2)?,
        document_type: row.get(3)?,
        file_path: get_opt_string(row, 4)?,
        file_size: row.get::<Option<i64>>(5)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        uploaded_date: parse_date(&row.get::<String>(7)?)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

pub(crate) async fn insert_document(
    conn: &libsql::Connection,
    new: NewDocument,
) -> Result<Document, DatabaseError> {
    new.validate()?;
    let now = Utc::now();

    conn.execute(
        "INSERT INTO documents (case_id, name, document_type, file_path, file_size, status, \
         uploaded_date, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        libsql::params![
            new.case_id,
            new.name.as_str(),
            new.document_type.as_str(),
            new.file_path.clone(),
            new.file_size,
            new.status.as_str(),
            format_date(new.uploaded_date),
            now.to_rfc3339()
        ],
    )
    .await?;

    let id = conn.last_insert_rowid();
    tracing::debug!(id, case_id = new.case_id, name = %new.name, "inserted document");
    Ok(new.into_document(id, now))
}

impl DocketDb {
    /// # Errors
    ///
    /// `ReferentialError` if the case does not exist, `ConstraintViolation`
    /// if the name or type is blank.
    pub async fn add_document(&self, new: NewDocument) -> Result<Document, DatabaseError> {
        insert_document(self.conn(), new).await
    }

    /// Documents of one case, most recently uploaded first.
    pub async fn documents_for_case(&self, case_id: i64) -> Result<Vec<Document>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM documents WHERE case_id = ?1 \
                     ORDER BY uploaded_date DESC, id"
                ),
                [case_id],
            )
            .await?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            documents.push(row_to_document(&row)?);
        }
        Ok(documents)
    }

    pub async fn count_documents(&self, case_id: i64) -> Result<i64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM documents WHERE case_id = ?1", [case_id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get(0)?)
    }
}
