//! Pillbox Core Library
//!
//! Reminder-time generation engine for medication schedules.
//!
//! # Architecture
//!
//! ```text
//! Medication + Schedule + dose history          requested date range
//!          (app-owned store)             (refresh job / recalculation)
//!                      │                               │
//!                      └───────────────┬───────────────┘
//!                                      ▼
//!                      ┌───────────────────────────────┐
//!                      │       ReminderGenerator       │
//!                      │  resolve anchor → enumerate   │
//!                      │  times → date → times plan    │
//!                      └───────────────┬───────────────┘
//!                                      │
//!              ┌───────────────────────┼───────────────────────┐
//!              ▼                       ▼                       ▼
//!          Reminder                OS alarm /               Wear OS
//!          records               notifications                sync
//!       (persistence)            (scheduling)             (transport)
//! ```
//!
//! # Core Principle
//!
//! **The engine is a pure function of its inputs.** Persistence, alarm
//! scheduling, notification presentation, and cross-device sync all live on
//! the app side of the FFI boundary; the engine only computes and returns
//! the date → times plan.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Medication, Schedule, ReminderPlan)
//! - [`generator`]: Anchor resolution and per-schedule-kind time enumeration

pub mod generator;
pub mod models;

// Re-export commonly used types
pub use generator::{Clock, FixedClock, ReminderGenerator, SystemClock};
pub use models::{Medication, ReminderPlan, Schedule, ScheduleKind};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use chrono::Weekday;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PillboxError {
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// =========================================================================
// Exported Functions
// =========================================================================

/// Create a new medication registered today.
#[uniffi::export]
pub fn new_medication(name: String) -> FfiMedication {
    Medication::new(name).into()
}

/// Generate reminder days for a schedule between two inclusive dates.
///
/// The range strings are computed by the caller and must parse as
/// `YYYY-MM-DD`; a stored `last_dose` string that fails to parse behaves as
/// no dose history.
#[uniffi::export]
pub fn generate_reminders(
    medication: FfiMedication,
    schedule: FfiSchedule,
    range_start: String,
    range_end: String,
    last_dose: Option<String>,
) -> Result<Vec<FfiReminderDay>, PillboxError> {
    let start = models::parse_date(&range_start)
        .ok_or_else(|| PillboxError::InvalidDateRange(range_start.clone()))?;
    let end = models::parse_date(&range_end)
        .ok_or_else(|| PillboxError::InvalidDateRange(range_end.clone()))?;
    let last_dose = last_dose.as_deref().and_then(models::parse_date_time);

    let generator = ReminderGenerator::new();
    let plan = generator.generate(&medication.into(), &schedule.into(), start, end, last_dose);

    Ok(plan
        .days()
        .iter()
        .map(|(date, times)| FfiReminderDay {
            date: date.to_string(),
            times: times.iter().map(|time| time.to_string()).collect(),
        })
        .collect())
}

/// Earliest reminder instant strictly after `after`, as an ISO date-time
/// string, or `None` when no upcoming reminder exists.
#[uniffi::export]
pub fn next_reminder(
    medication: FfiMedication,
    schedule: FfiSchedule,
    after: String,
    last_dose: Option<String>,
) -> Result<Option<String>, PillboxError> {
    let after = models::parse_date_time(&after)
        .ok_or_else(|| PillboxError::InvalidInput(format!("unparseable instant: {after}")))?;
    let last_dose = last_dose.as_deref().and_then(models::parse_date_time);

    let generator = ReminderGenerator::new();
    Ok(generator
        .next_after(&medication.into(), &schedule.into(), after, last_dose)
        .map(|instant| instant.format("%Y-%m-%dT%H:%M:%S").to_string()))
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medication descriptor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedication {
    pub medication_id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub registration_date: Option<String>,
}

impl From<Medication> for FfiMedication {
    fn from(medication: Medication) -> Self {
        Self {
            medication_id: medication.medication_id,
            name: medication.name,
            start_date: medication.start_date,
            end_date: medication.end_date,
            registration_date: medication.registration_date,
        }
    }
}

impl From<FfiMedication> for Medication {
    fn from(medication: FfiMedication) -> Self {
        Medication {
            medication_id: medication.medication_id,
            name: medication.name,
            start_date: medication.start_date,
            end_date: medication.end_date,
            registration_date: medication.registration_date,
        }
    }
}

/// FFI-safe schedule kind. Weekdays are numbered 1 = Monday .. 7 = Sunday;
/// an empty list means every day, out-of-range numbers are skipped.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiScheduleKind {
    Daily {
        weekdays: Vec<u8>,
        times: Vec<String>,
    },
    Weekly {
        weekdays: Vec<u8>,
        times: Vec<String>,
    },
    IntervalFixed {
        window_start: String,
        window_end: String,
        interval_hours: u32,
        interval_minutes: u32,
    },
    IntervalRolling {
        interval_hours: u32,
        interval_minutes: u32,
    },
    AsNeeded,
    CustomAlarms {
        times: Vec<String>,
    },
}

/// FFI-safe schedule.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSchedule {
    pub schedule_id: String,
    pub medication_id: String,
    pub kind: FfiScheduleKind,
}

impl From<FfiSchedule> for Schedule {
    fn from(schedule: FfiSchedule) -> Self {
        Schedule {
            schedule_id: schedule.schedule_id,
            medication_id: schedule.medication_id,
            kind: schedule.kind.into(),
        }
    }
}

impl From<Schedule> for FfiSchedule {
    fn from(schedule: Schedule) -> Self {
        Self {
            schedule_id: schedule.schedule_id,
            medication_id: schedule.medication_id,
            kind: schedule.kind.into(),
        }
    }
}

impl From<FfiScheduleKind> for ScheduleKind {
    fn from(kind: FfiScheduleKind) -> Self {
        match kind {
            FfiScheduleKind::Daily { weekdays, times } => ScheduleKind::Daily {
                weekdays: weekdays_from_numbers(&weekdays),
                times,
            },
            FfiScheduleKind::Weekly { weekdays, times } => ScheduleKind::Weekly {
                weekdays: weekdays_from_numbers(&weekdays),
                times,
            },
            FfiScheduleKind::IntervalFixed {
                window_start,
                window_end,
                interval_hours,
                interval_minutes,
            } => ScheduleKind::IntervalFixed {
                window_start,
                window_end,
                interval_hours,
                interval_minutes,
            },
            FfiScheduleKind::IntervalRolling {
                interval_hours,
                interval_minutes,
            } => ScheduleKind::IntervalRolling {
                interval_hours,
                interval_minutes,
            },
            FfiScheduleKind::AsNeeded => ScheduleKind::AsNeeded,
            FfiScheduleKind::CustomAlarms { times } => ScheduleKind::CustomAlarms { times },
        }
    }
}

impl From<ScheduleKind> for FfiScheduleKind {
    fn from(kind: ScheduleKind) -> Self {
        match kind {
            ScheduleKind::Daily { weekdays, times } => FfiScheduleKind::Daily {
                weekdays: weekdays_to_numbers(weekdays.as_deref()),
                times,
            },
            ScheduleKind::Weekly { weekdays, times } => FfiScheduleKind::Weekly {
                weekdays: weekdays_to_numbers(weekdays.as_deref()),
                times,
            },
            ScheduleKind::IntervalFixed {
                window_start,
                window_end,
                interval_hours,
                interval_minutes,
            } => FfiScheduleKind::IntervalFixed {
                window_start,
                window_end,
                interval_hours,
                interval_minutes,
            },
            ScheduleKind::IntervalRolling {
                interval_hours,
                interval_minutes,
            } => FfiScheduleKind::IntervalRolling {
                interval_hours,
                interval_minutes,
            },
            ScheduleKind::AsNeeded => FfiScheduleKind::AsNeeded,
            ScheduleKind::CustomAlarms { times } => FfiScheduleKind::CustomAlarms { times },
        }
    }
}

/// FFI-safe reminder day: one date with its ascending times.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReminderDay {
    pub date: String,
    pub times: Vec<String>,
}

/// Map 1 = Monday .. 7 = Sunday numbers to weekdays, skipping anything
/// out of range. An empty input stays `None` (every day).
fn weekdays_from_numbers(numbers: &[u8]) -> Option<Vec<Weekday>> {
    if numbers.is_empty() {
        return None;
    }
    let weekdays: Vec<Weekday> = numbers
        .iter()
        .filter_map(|number| match number {
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            7 => Some(Weekday::Sun),
            _ => None,
        })
        .collect();
    Some(weekdays)
}

fn weekdays_to_numbers(weekdays: Option<&[Weekday]>) -> Vec<u8> {
    weekdays
        .unwrap_or(&[])
        .iter()
        .map(|day| day.number_from_monday() as u8)
        .collect()
}
