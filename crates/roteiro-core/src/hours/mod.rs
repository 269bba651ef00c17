//! Venue opening hours: time tokens, weekly schedules, and the evaluator
//! that decides whether a venue is open at a given instant.

mod evaluator;
mod schedule;
mod token;

pub use evaluator::{is_open, OpenStatus, OperatingHoursEvaluator};
pub use schedule::{RawWeeklySchedule, TimeInterval, WeeklySchedule};
pub use token::TimeToken;
