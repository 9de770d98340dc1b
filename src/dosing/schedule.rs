//! Next-dose projection
//!
//! Illustrative only: the current time and one interval ahead. No dose
//! counting past the first follow-up, no time zones, no DST handling.

use chrono::{NaiveDateTime, TimeDelta};

/// Display format for projected dose times
pub const TIME_FORMAT: &str = "%H:%M";

/// `[now, now + interval_hours]`, or `None` if the second time is out of range
pub fn project_next_doses(now: NaiveDateTime, interval_hours: u32) -> Option<[NaiveDateTime; 2]> {
    let interval = TimeDelta::try_hours(i64::from(interval_hours))?;
    let next = now.checked_add_signed(interval)?;
    Some([now, next])
}

/// [`project_next_doses`] formatted as `HH:MM`
pub fn format_next_doses(now: NaiveDateTime, interval_hours: u32) -> Option<[String; 2]> {
    project_next_doses(now, interval_hours)
        .map(|times| times.map(|t| t.format(TIME_FORMAT).to_string()))
}
