//! Date and duration calculations for bookings.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Calculates the whole hours worked in a booking.
///
/// The pause is subtracted from the elapsed time between start and finish and the
/// remainder is truncated to whole hours, discarding any fractional hour. Rows that
/// violate the booking invariants (pause longer than the interval, finish before start)
/// truncate toward zero and may yield negative hours; they are counted as they are.
///
/// # Example
/// ```ignore
/// // 09:00 - 17:00 with a 60 minute pause
/// assert_eq!(work_time_hours(started, finished, 60), 7);
/// // 09:00 - 17:29 with a 30 minute pause is 7h59m
/// assert_eq!(work_time_hours(started, finished_late, 30), 7);
/// ```
pub fn work_time_hours(started: NaiveDateTime, finished: NaiveDateTime, pause: i32) -> i64 {
    let worked = (finished - started) - Duration::minutes(pause as i64);

    worked.num_hours()
}

/// Checks the booking invariants: the interval is not reversed and the pause lies within
/// zero and the interval's length in minutes.
///
/// # Returns
/// - `Ok(())` - Interval and pause are valid
/// - `Err(IntervalViolation::Reversed)` - `finished` lies before `started`
/// - `Err(IntervalViolation::Pause)` - Pause is negative or longer than the interval
pub fn validate_interval(
    started: NaiveDateTime,
    finished: NaiveDateTime,
    pause: i32,
) -> Result<(), IntervalViolation> {
    if finished < started {
        return Err(IntervalViolation::Reversed);
    }

    if pause < 0 || pause as i64 > (finished - started).num_minutes() {
        return Err(IntervalViolation::Pause);
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum IntervalViolation {
    Reversed,
    Pause,
}

/// Formats a calendar day as `M/D/YYYY` without zero padding, e.g. `3/3/2000`.
pub fn format_work_day(day: NaiveDate) -> String {
    format!("{}/{}/{}", day.month(), day.day(), day.year())
}
