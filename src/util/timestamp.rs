//! Parser for `created_at` values coming from the store.
//!
//! Supported formats:
//! - RFC 3339: `2024-03-10T10:30:00Z`, `2024-03-10T10:30:00.123+02:00`
//! - Naive date-time (UTC): `2024-03-10T10:30:00`, `2024-03-10 10:30:00`
//! - Date only (midnight UTC): `2024-03-10`

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Error type for timestamp parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized timestamp '{input}'")]
pub struct TimestampParseError {
    pub input: String,
}

/// Parses a `created_at` string into a UTC timestamp.
///
/// Input is not trimmed: surrounding whitespace makes the value invalid.
///
/// # Examples
///
/// ```
/// use regdash::util::parse_created_at;
///
/// let ts = parse_created_at("2024-03-10T10:30:00Z").unwrap();
/// assert_eq!(ts.timestamp(), 1_710_066_600);
/// ```
pub fn parse_created_at(input: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    // chrono skips leading spaces for numeric fields.
    if input.trim() != input {
        return Err(TimestampParseError {
            input: input.to_string(),
        });
    }

    if let Some(ts) = try_parse_rfc3339(input) {
        return Ok(ts);
    }

    if let Some(ts) = try_parse_naive(input) {
        return Ok(ts);
    }

    if let Some(ts) = try_parse_date_only(input) {
        return Ok(ts);
    }

    Err(TimestampParseError {
        input: input.to_string(),
    })
}

fn try_parse_rfc3339(input: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn try_parse_naive(input: &str) -> Option<DateTime<Utc>> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn try_parse_date_only(input: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}
