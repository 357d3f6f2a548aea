//! Timestamp parsing and whole-day arithmetic
//!
//! Last-interaction dates arrive as loosely formatted ISO-8601 strings.
//! Anything that cannot be read is `None`, which callers treat as
//! "never contacted".

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`, `2024-05-01T10:00:00+02:00`),
/// naive date-times read as UTC, and bare dates read as midnight UTC.
/// Returns `None` for anything else, including empty strings.
///
/// # Examples
///
/// ```
/// use grove_domain::parse_timestamp;
///
/// assert!(parse_timestamp("2024-05-01T10:00:00Z").is_some());
/// assert!(parse_timestamp("2024-05-01").is_some());
/// assert!(parse_timestamp("last tuesday").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days elapsed from `earlier` to `now`, floored
///
/// Timestamps after `now` count as zero days.
pub fn days_between(earlier: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = now.signed_duration_since(earlier).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY).max(0)
}
