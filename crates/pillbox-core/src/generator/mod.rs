//! Reminder-time generation engine.
//!
//! Pipeline: resolve the medication's effective window → clip the requested
//! range → enumerate times per schedule kind → assemble the date → times plan.
//!
//! The engine is a pure function of its inputs: it holds no state, performs
//! no I/O, and never mutates or persists anything. Malformed stored data
//! degrades to "no reminders" rather than erroring; the app layer that
//! captured the configuration owns user-visible validation.

mod anchor;
mod clock;

pub use anchor::*;
pub use clock::*;

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::models::{
    interval_duration, parse_time, parse_time_set, Medication, ReminderPlan, Schedule,
    ScheduleKind,
};

/// Lookahead bound for [`ReminderGenerator::next_after`], in days. Covers
/// any weekday pattern across a year boundary.
const NEXT_LOOKAHEAD_DAYS: u64 = 370;

/// Stateless reminder-time generator.
///
/// Holds only the injected clock; every invocation is an independent
/// computation, safe to run concurrently from any thread.
pub struct ReminderGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl ReminderGenerator<SystemClock> {
    /// Create a generator backed by the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for ReminderGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReminderGenerator<C> {
    /// Create a generator with an injected clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Generate all reminder instants for `schedule` between `range_start`
    /// and `range_end` (both inclusive), clipped to the medication's own
    /// validity window.
    ///
    /// `last_dose` is the most recent confirmed dose for the medication,
    /// used only by rolling-interval schedules to anchor the sequence.
    pub fn generate(
        &self,
        medication: &Medication,
        schedule: &Schedule,
        range_start: NaiveDate,
        range_end: NaiveDate,
        last_dose: Option<NaiveDateTime>,
    ) -> ReminderPlan {
        let mut plan = ReminderPlan::new();

        if schedule.medication_id != medication.medication_id {
            return plan;
        }

        let resolved_start = self.resolved_start(medication);
        let start = range_start.max(resolved_start);
        let end = match medication.end_day() {
            Some(end_day) => range_end.min(end_day),
            None => range_end,
        };
        if start > end {
            return plan;
        }

        match &schedule.kind {
            ScheduleKind::Daily { weekdays, times } | ScheduleKind::Weekly { weekdays, times } => {
                self.emit_fixed_times(&mut plan, start, end, weekdays.as_deref(), times);
            }
            ScheduleKind::CustomAlarms { times } => {
                self.emit_fixed_times(&mut plan, start, end, None, times);
            }
            ScheduleKind::IntervalFixed {
                window_start,
                window_end,
                interval_hours,
                interval_minutes,
            } => {
                let interval = interval_duration(*interval_hours, *interval_minutes);
                if interval <= Duration::zero() {
                    return plan;
                }
                let (Some(open), Some(close)) = (parse_time(window_start), parse_time(window_end))
                else {
                    return plan;
                };
                let day_times = window_times(open, close, interval);
                for date in start.iter_days().take_while(|d| *d <= end) {
                    for &time in &day_times {
                        plan.insert(date, time);
                    }
                }
            }
            ScheduleKind::IntervalRolling {
                interval_hours,
                interval_minutes,
            } => {
                let interval = interval_duration(*interval_hours, *interval_minutes);
                if interval <= Duration::zero() {
                    return plan;
                }
                let anchor = resolve_anchor(last_dose, resolved_start, interval);
                let mut cursor = fast_forward(anchor, interval, start.and_time(NaiveTime::MIN));
                while cursor.date() <= end {
                    plan.insert(cursor.date(), cursor.time());
                    cursor += interval;
                }
            }
            ScheduleKind::AsNeeded => {}
        }

        plan
    }

    /// Earliest reminder instant strictly after `after`, or `None` when no
    /// instant exists within the lookahead bound. Feeds the app's "next
    /// dose at …" display.
    pub fn next_after(
        &self,
        medication: &Medication,
        schedule: &Schedule,
        after: NaiveDateTime,
        last_dose: Option<NaiveDateTime>,
    ) -> Option<NaiveDateTime> {
        let start = after.date();
        let end = start.checked_add_days(Days::new(NEXT_LOOKAHEAD_DAYS))?;
        let plan = self.generate(medication, schedule, start, end, last_dose);
        let next = plan.instants().find(|instant| *instant > after);
        next
    }

    /// The medication's effective first valid date: user-set start date,
    /// registration date, or today, in that fallback order.
    fn resolved_start(&self, medication: &Medication) -> NaiveDate {
        medication
            .start_day()
            .or_else(|| medication.registration_day())
            .unwrap_or_else(|| self.clock.today())
    }

    /// Emit a fixed time set on every date in range whose weekday is
    /// selected.
    fn emit_fixed_times(
        &self,
        plan: &mut ReminderPlan,
        start: NaiveDate,
        end: NaiveDate,
        weekdays: Option<&[Weekday]>,
        times: &[String],
    ) {
        let times = parse_time_set(times);
        if times.is_empty() {
            return;
        }
        for date in start.iter_days().take_while(|d| *d <= end) {
            if !weekday_selected(weekdays, date.weekday()) {
                continue;
            }
            for &time in &times {
                plan.insert(date, time);
            }
        }
    }
}

/// Whether a weekday passes the configured filter. An absent or empty set
/// selects every day.
fn weekday_selected(weekdays: Option<&[Weekday]>, day: Weekday) -> bool {
    match weekdays {
        None => true,
        Some(set) => set.is_empty() || set.contains(&day),
    }
}

/// Times inside a daily window: the window start, then every interval after
/// it, up to and including the window end. Stops at midnight wrap.
fn window_times(open: NaiveTime, close: NaiveTime, interval: Duration) -> Vec<NaiveTime> {
    let mut times = Vec::new();
    let mut cursor = open;
    while cursor <= close {
        times.push(cursor);
        let (next, wrap) = cursor.overflowing_add_signed(interval);
        if wrap != 0 {
            break;
        }
        cursor = next;
    }
    times
}
