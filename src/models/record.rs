// src/models/record.rs
// DOCUMENTATION: Untyped row representation shared by all portfolio tables
// PURPOSE: Carry arbitrary columns through unchanged

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Column name -> value map for a single row
pub type Record = Map<String, Value>;

/// Decode a nested relation, treating a missing or `null` value as empty
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a timestamp column. `timestamptz` comes back as RFC3339; plain
/// `timestamp` has no offset and is taken as UTC.
pub(crate) fn timestamp_column(record: &Record, column: &str) -> Option<DateTime<Utc>> {
    let raw = record.get(column)?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .ok()
}

/// Read a date column; accepts plain `YYYY-MM-DD` or a full timestamp
pub(crate) fn date_column(record: &Record, column: &str) -> Option<NaiveDate> {
    let raw = record.get(column)?.as_str()?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| timestamp_column(record, column).map(|dt| dt.date_naive()))
}
