//! Lenient parsing of stored date and time strings.
//!
//! Descriptors arrive from the app-owned store and may carry malformed
//! values. Every parser here returns `None` for input it cannot understand,
//! so callers fall through to the next resolution rule instead of failing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Stored calendar date format (ISO-8601).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted time-of-day formats, tried in order.
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Accepted date-time formats, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse a stored `HH:MM` (or `HH:MM:SS`) time-of-day string.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

/// Parse a stored date-time string, with or without seconds, with `T` or
/// space separator.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}
