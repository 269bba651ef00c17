//! Weekday calendar utilities shared by the opening-hours evaluator and the
//! event-time classifier.
//!
//! All comparisons are on the local wall clock. Calendar-day arithmetic goes
//! through `NaiveDate`, so month and year rollover need no special cases.

mod clock;
mod weekday;

pub use clock::{parse_reference_instant, Clock, FixedClock, SystemClock};
pub use weekday::DayOfWeek;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Hour of day as a fraction, e.g. 14:30 -> 14.5. Seconds are included.
pub fn fractional_hour(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

/// Whether two instants share year, month and day-of-month.
pub fn same_calendar_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Signed number of calendar days from `from` to `to`.
pub fn calendar_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
