//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Dates are stored as TEXT: `YYYY-MM-DD` for calendar dates,
//! `YYYY-MM-DDTHH:MM:SS` for the hearing timestamp, RFC 3339 for audit
//! timestamps (with `SQLite`'s `datetime('now')` format also accepted).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DatabaseError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a required TEXT column as a calendar date.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse an optional TEXT column as a calendar date.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_date(s)?)),
        _ => Ok(None),
    }
}

/// Parse an optional TEXT column as a timezone-less timestamp.
///
/// Accepts both the `T` separator written by this crate and a space.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_naive_datetime(
    s: Option<&str>,
) -> Result<Option<NaiveDateTime>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => NaiveDateTime::parse_from_str(s, NAIVE_DATETIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse timestamp '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Render a calendar date for storage.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render a timezone-less timestamp for storage.
#[must_use]
pub fn format_naive_datetime(at: NaiveDateTime) -> String {
    at.format(NAIVE_DATETIME_FORMAT).to_string()
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all docket-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}
