//! Transaction-scoped storage context.
//!
//! A `UnitOfWork` stages inserts inside one libSQL transaction. Nothing it
//! writes is visible to other connections or durable until [`UnitOfWork::commit`];
//! [`UnitOfWork::rollback`] discards everything staged.

use docket_core::entities::{Case, Document, NewCase, NewDocument, NewTimelineEvent, TimelineEvent};

use crate::error::DatabaseError;
use crate::migrations;
use crate::repos::{case, document, timeline};

pub struct UnitOfWork {
    tx: libsql::Transaction,
}

impl UnitOfWork {
    pub(crate) const fn new(tx: libsql::Transaction) -> Self {
        Self { tx }
    }

    /// Insert a case and return it with its assigned identity.
    ///
    /// The identity is usable as a foreign key for later inserts in the same
    /// unit of work.
    ///
    /// # Errors
    ///
    /// `ConstraintViolation` on a duplicate case number or blank required field.
    pub async fn add_case(&self, new: NewCase) -> Result<Case, DatabaseError> {
        case::insert_case(&self.tx, new).await
    }

    /// # Errors
    ///
    /// `ReferentialError` if `case_id` does not name a case visible to this
    /// unit of work.
    pub async fn add_timeline_event(
        &self,
        new: NewTimelineEvent,
    ) -> Result<TimelineEvent, DatabaseError> {
        timeline::insert_timeline_event(&self.tx, new).await
    }

    /// # Errors
    ///
    /// `ReferentialError` if `case_id` does not name a case visible to this
    /// unit of work.
    pub async fn add_document(&self, new: NewDocument) -> Result<Document, DatabaseError> {
        document::insert_document(&self.tx, new).await
    }

    /// Drop and recreate every table inside this unit of work.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` if a DDL statement fails.
    pub async fn reset_schema(&self) -> Result<(), DatabaseError> {
        migrations::reset_schema(&self.tx).await
    }

    /// Borrow the transaction's connection for reads inside the unit of work.
    #[must_use]
    pub fn conn(&self) -> &libsql::Connection {
        &self.tx
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the commit fails; nothing is persisted then.
    pub async fn commit(self) -> Result<(), DatabaseError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the rollback statement fails.
    pub async fn rollback(self) -> Result<(), DatabaseError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
