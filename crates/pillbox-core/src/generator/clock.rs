//! Clock abstraction for the engine's single "now" fallback.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// The generator consults the clock only when a medication has neither a
/// parseable start date nor a parseable registration date — the last-resort
/// start resolution rule.
pub trait Clock {
    /// Today's local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed-date clock for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
