//! # docket-db
//!
//! libSQL storage for Docket: cases, their timeline events, and their
//! documents.
//!
//! There is no process-wide handle. Callers open a [`DocketDb`] and pass it
//! to every operation; multi-record writes go through a [`UnitOfWork`] that
//! becomes durable only on commit.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod seed;
mod unit_of_work;
pub mod updates;

#[cfg(test)]
mod test_support;

pub use unit_of_work::UnitOfWork;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Docket state operations.
///
/// Wraps a libSQL database and its single connection.
pub struct DocketDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl DocketDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Enables foreign keys and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        migrations::run_migrations(&conn).await?;
        tracing::debug!(path, "opened docket database");
        Ok(Self { db, conn })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Start a transaction-scoped storage context.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction cannot be started.
    pub async fn begin(&self) -> Result<UnitOfWork, DatabaseError> {
        let tx = self.conn.transaction().await?;
        Ok(UnitOfWork::new(tx))
    }

    /// Re-run the embedded migrations (idempotent).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` if a statement fails.
    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        migrations::run_migrations(&self.conn).await
    }
}
