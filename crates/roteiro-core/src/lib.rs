//! # Roteiro Core Library
//!
//! Temporal status engine for a listings site: whether a venue is open right
//! now, and how to label an event's start time relative to now ("Agora",
//! "Hoje", "Amanhã", or a date).
//!
//! ## Architecture
//!
//! - **Calendar**: closed weekday enumeration, calendar-day arithmetic, and
//!   the [`Clock`] abstraction callers use to obtain the reference instant
//! - **Hours**: weekly schedules of `HH:MM` tokens and the
//!   [`OperatingHoursEvaluator`]
//! - **Event**: event start/duration and the [`EventTimeClassifier`]
//! - **Format**: Brazilian Portuguese copy built from the structured results
//! - **Catalog**: JSON venue/event records as the site's data producers
//!   write them
//! - **Storage**: TOML configuration
//!
//! The evaluators are pure: they never read a clock, hold no state, and
//! return the same result for the same inputs.

pub mod calendar;
pub mod catalog;
pub mod error;
pub mod event;
pub mod format;
pub mod hours;
pub mod storage;

pub use calendar::{Clock, DayOfWeek, FixedClock, SystemClock};
pub use catalog::{Catalog, EventRecord, Venue};
pub use error::{ConfigError, CoreError, InvalidEventTimingError, MalformedScheduleError, TokenDefect};
pub use event::{classify_record, EventTimeClassifier, EventTimeKind, EventTimeLabel, EventTiming};
pub use hours::{
    is_open, OpenStatus, OperatingHoursEvaluator, RawWeeklySchedule, TimeInterval, TimeToken,
    WeeklySchedule,
};
pub use storage::Config;
