//! Schedule descriptor and the schedule-kind sum type.

use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::datefmt::parse_time;

/// How a medication's doses recur.
///
/// Closed sum type; the generator matches exhaustively, so adding a kind is
/// a compile-time-enforced change everywhere it matters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ScheduleKind {
    /// Specific times-of-day on specific weekdays. An absent or empty
    /// weekday set means every day.
    Daily {
        weekdays: Option<Vec<Weekday>>,
        times: Vec<String>,
    },
    /// Same payload and semantics as `Daily`; kept as its own variant so
    /// stored data tagged either way round-trips.
    Weekly {
        weekdays: Option<Vec<Weekday>>,
        times: Vec<String>,
    },
    /// Fixed times-of-day inside a daily active window: the window start,
    /// then every interval after it, up to and including the window end.
    IntervalFixed {
        window_start: String,
        window_end: String,
        interval_hours: u32,
        interval_minutes: u32,
    },
    /// Rolling interval anchored to the most recent confirmed dose,
    /// unbounded across midnight.
    IntervalRolling {
        interval_hours: u32,
        interval_minutes: u32,
    },
    /// Taken on demand; no scheduled instants are ever generated.
    AsNeeded,
    /// Explicit alarm times, generated like `Daily` but carrying no
    /// recurrence semantics elsewhere in the app.
    CustomAlarms { times: Vec<String> },
}

/// A dose schedule belonging to exactly one medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    /// Unique schedule ID
    pub schedule_id: String,
    /// The medication this schedule belongs to
    pub medication_id: String,
    /// How doses recur
    pub kind: ScheduleKind,
}

impl Schedule {
    /// Create a new schedule for a medication.
    pub fn new(medication_id: String, kind: ScheduleKind) -> Self {
        Self {
            schedule_id: uuid::Uuid::new_v4().to_string(),
            medication_id,
            kind,
        }
    }
}

/// Total repetition interval from stored hour and minute components.
pub fn interval_duration(hours: u32, minutes: u32) -> Duration {
    Duration::hours(i64::from(hours)) + Duration::minutes(i64::from(minutes))
}

/// Parse a stored time set, sorted ascending and de-duplicated.
/// Unparseable entries are skipped.
pub fn parse_time_set(times: &[String]) -> Vec<NaiveTime> {
    let mut parsed: Vec<NaiveTime> = times.iter().filter_map(|t| parse_time(t)).collect();
    parsed.sort_unstable();
    parsed.dedup();
    parsed
}
