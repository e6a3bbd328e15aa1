//! Anchor resolution for rolling-interval schedules.
//!
//! The anchor is the date-time from which a repeating interval sequence is
//! projected forward. Precedence:
//! 1. last confirmed dose + interval
//! 2. the medication's start date at midnight
//! 3. its registration date at midnight
//! 4. today at midnight (the only permitted "now" read)
//!
//! Catching up to a requested range advances the anchor by whole interval
//! steps, never by jumping to "now", so phase is preserved relative to the
//! original anchor no matter which rule produced it.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Resolve the anchor instant for a rolling interval sequence.
///
/// `resolved_start` is the medication's effective first valid date (start
/// date, registration date, or today, in that fallback order); it covers
/// rules 2–4 above.
pub fn resolve_anchor(
    last_dose: Option<NaiveDateTime>,
    resolved_start: NaiveDate,
    interval: Duration,
) -> NaiveDateTime {
    match last_dose {
        Some(dose) => dose + interval,
        None => resolved_start.and_time(NaiveTime::MIN),
    }
}

/// Advance `anchor` forward by whole interval steps until it is no longer
/// before `not_before`.
///
/// Closed form (`steps = ceil(gap / interval)`) so the cost is independent
/// of how far in the past the anchor lies. The result always stays on an
/// interval boundary relative to the original anchor.
pub fn fast_forward(
    anchor: NaiveDateTime,
    interval: Duration,
    not_before: NaiveDateTime,
) -> NaiveDateTime {
    debug_assert!(interval > Duration::zero());
    if anchor >= not_before {
        return anchor;
    }
    let gap = (not_before - anchor).num_seconds();
    let step = interval.num_seconds();
    let steps = (gap + step - 1) / step;
    anchor + Duration::seconds(steps * step)
}
