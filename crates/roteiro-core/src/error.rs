//! Core error types for roteiro-core.
//!
//! Schedule and event data are validated at the boundary: a defect in venue
//! or event records surfaces as one of these errors instead of degrading to a
//! "closed" or "dated" status.

use std::path::PathBuf;
use thiserror::Error;

use crate::calendar::DayOfWeek;

/// Core error type for roteiro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Weekly schedule data violates the time-token invariants
    #[error("Malformed schedule: {0}")]
    Schedule(#[from] MalformedScheduleError),

    /// Event data has a missing or unparseable start instant
    #[error("Invalid event timing: {0}")]
    EventTiming(#[from] InvalidEventTimingError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog lookup failed
    #[error("No {kind} with id '{id}' in catalog")]
    NotFound { kind: &'static str, id: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What is wrong with a single time token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenDefect {
    #[error("expected HH:MM")]
    MissingSeparator,

    #[error("hour and minute must be digits")]
    NonNumeric,

    #[error("expected a 1-2 digit hour and a 2 digit minute (H:MM or HH:MM)")]
    Width,

    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u32),

    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(u32),
}

/// Schedule data errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedScheduleError {
    /// Day key that is not one of the seven known weekdays
    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),

    /// Two keys in one record name the same weekday
    #[error("weekday {0} is listed more than once")]
    DuplicateWeekday(DayOfWeek),

    /// Time token that is not a valid 24-hour HH:MM value
    #[error("invalid time token '{token}'{}: {defect}", day_suffix(.day))]
    InvalidToken {
        day: Option<DayOfWeek>,
        token: String,
        defect: TokenDefect,
    },
}

fn day_suffix(day: &Option<DayOfWeek>) -> String {
    day.map(|d| format!(" on {d}")).unwrap_or_default()
}

impl MalformedScheduleError {
    /// Attach the weekday a token was read from.
    pub fn on_day(self, day: DayOfWeek) -> Self {
        match self {
            MalformedScheduleError::InvalidToken { token, defect, .. } => {
                MalformedScheduleError::InvalidToken {
                    day: Some(day),
                    token,
                    defect,
                }
            }
            other => other,
        }
    }
}

/// Event timing errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidEventTimingError {
    #[error("event has no start date")]
    MissingDate,

    #[error("event has no start time")]
    MissingTime,

    #[error("unparseable event date '{0}'")]
    UnparseableDate(String),

    #[error("unparseable event time '{0}'")]
    UnparseableTime(String),

    #[error("event duration must be a non-negative number of hours, got {0}")]
    InvalidDuration(f64),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
