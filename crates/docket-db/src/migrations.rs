//! Database migration runner.
//!
//! Embeds the SQL migration file at compile time and executes it on database
//! open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::error::DatabaseError;

/// Initial schema: 3 tables, 2 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

/// Children first so foreign keys never dangle mid-drop.
const DROP_SCHEMA: &str = "DROP TABLE IF EXISTS documents;
DROP TABLE IF EXISTS timeline_events;
DROP TABLE IF EXISTS cases;";

/// Run all embedded migrations in sequence.
pub(crate) async fn run_migrations(conn: &libsql::Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(MIGRATION_001)
        .await
        .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
    Ok(())
}

/// Drop every Docket table and recreate the schema.
pub(crate) async fn reset_schema(conn: &libsql::Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(DROP_SCHEMA)
        .await
        .map_err(|e| DatabaseError::Migration(format!("drop schema: {e}")))?;
    run_migrations(conn).await
}
