//! Database utility functions.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::db::{DbError, DbResult};

// Fixed width so that lexical order in SQLite equals chronological order.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Render an instant the way it is stored in timestamp columns.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp column.
pub fn parse_timestamp(value: &str) -> DbResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc)))
        .map_err(|e| DbError::InvalidData {
            message: format!("unreadable timestamp '{}': {}", value, e),
            help: "Timestamps are stored as UTC, e.g. 2025-01-31T17:00:00.000000Z".to_string(),
        })
}

/// End of a window of `days` starting at `now`.
///
/// Capped at the last instant the fixed-width column format can hold, so huge
/// windows still compare correctly against stored values.
pub fn window_end(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let latest = NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|date| date.and_hms_micro_opt(23, 59, 59, 999_999))
        .map_or(DateTime::<Utc>::MAX_UTC, |naive| naive.and_utc());
    Duration::try_days(days)
        .and_then(|span| now.checked_add_signed(span))
        .map_or(latest, |end| end.min(latest))
}
