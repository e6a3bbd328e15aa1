//! Generated reminder plan returned by the engine.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reminder instants grouped by calendar date.
///
/// Per-date time lists are strictly ascending and de-duplicated, and dates
/// with no instants are never present. The app materializes this value into
/// persisted reminder records and OS-level alarms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ReminderPlan {
    days: BTreeMap<NaiveDate, Vec<NaiveTime>>,
}

impl ReminderPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one instant, keeping the date's time list ascending and
    /// de-duplicated.
    pub fn insert(&mut self, date: NaiveDate, time: NaiveTime) {
        let times = self.days.entry(date).or_default();
        if let Err(position) = times.binary_search(&time) {
            times.insert(position, time);
        }
    }

    /// Dates carrying at least one instant, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Times on one date, ascending. Empty when the date carries none.
    pub fn times_on(&self, date: NaiveDate) -> &[NaiveTime] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All instants in ascending order.
    pub fn instants(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.days
            .iter()
            .flat_map(|(date, times)| times.iter().map(move |time| date.and_time(*time)))
    }

    /// Earliest generated instant, if any.
    pub fn first_instant(&self) -> Option<NaiveDateTime> {
        self.instants().next()
    }

    /// Number of dates carrying at least one instant.
    pub fn date_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of instants across all dates.
    pub fn instant_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Whether the plan carries no instants at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Borrow the underlying date → times mapping.
    pub fn days(&self) -> &BTreeMap<NaiveDate, Vec<NaiveTime>> {
        &self.days
    }

    /// Serialize to JSON for hand-off to the app layers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
