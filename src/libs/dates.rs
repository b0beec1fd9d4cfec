//! Calendar and hour arithmetic shared by the report calculators.
//!
//! Every day-difference comparison in the reports goes through
//! [`normalize_to_day`] first so that time-of-day never perturbs bucket
//! assignment. Hours use an "HH.MM" entry convention where the fractional
//! part represents minutes-as-hundredths, not decimal hours.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Number of milliseconds in one calendar day.
const DAY_MS: i64 = 86_400_000;

/// Returns the same calendar date with the time-of-day cleared.
pub fn normalize_to_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// Whole-day difference between two timestamps, `target - reference`.
///
/// Both operands are normalized to midnight before subtraction, so the
/// millisecond delta is an exact multiple of a day and the floor division
/// introduces no rounding ambiguity. Negative means `target` is in the past
/// relative to `reference`.
pub fn day_difference(target: NaiveDateTime, reference: NaiveDateTime) -> i64 {
    let delta = normalize_to_day(target) - normalize_to_day(reference);
    delta.num_milliseconds().div_euclid(DAY_MS)
}

/// Whether `date` falls on the given calendar day.
///
/// Compares date fields rather than a day difference so a timezone offset
/// can never produce an off-by-one.
pub fn is_same_day(date: NaiveDateTime, day: NaiveDate) -> bool {
    date.day() == day.day() && date.month() == day.month() && date.year() == day.year()
}

/// Whether `date` falls on the current local day.
pub fn is_today(date: NaiveDateTime) -> bool {
    is_same_day(date, Local::now().date_naive())
}

/// Applies the minute-carry rule to an HH.MM style hours value.
///
/// The fractional part (rounded to the nearest hundredth) represents minutes
/// and caps at 59; at or above 0.60 it rolls into the next whole hour:
/// `1.60` becomes `2.00`, `2.65` becomes `3.05`, `0.59` stays `0.59`.
/// Applied on every hours write, not only on display.
pub fn format_hours_carry(value: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    let whole = value.trunc();
    let minutes = ((value - whole) * 100.0).round();
    if minutes >= 60.0 {
        whole + 1.0 + (minutes - 60.0) / 100.0
    } else {
        whole + minutes / 100.0
    }
}
