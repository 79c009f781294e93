use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse a `YYYY-MM-DDTHH:MM[:SS]` argument; a space may replace the `T`.
pub fn parse_datetime(raw: &str, field: &str) -> anyhow::Result<NaiveDateTime> {
    let normalized = raw.replacen(' ', "T", 1);
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M"))
        .map_err(|error| {
            anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DDTHH:MM:SS): {error}")
        })
}

pub fn parse_optional_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}
