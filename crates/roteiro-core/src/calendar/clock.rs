//! Sources of the reference instant.
//!
//! The evaluators never read a clock themselves; callers obtain `now` from a
//! [`Clock`] and pass it in.

use chrono::{Local, NaiveDateTime};

/// Supplies the current local wall-clock instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the process's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

const INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a reference instant given as `YYYY-MM-DD[T ]HH:MM[:SS]`.
pub fn parse_reference_instant(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let value = value.trim();
    match NaiveDateTime::parse_from_str(value, INSTANT_FORMATS[0]) {
        Ok(instant) => Ok(instant),
        Err(e) => INSTANT_FORMATS[1..]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .ok_or(e),
    }
}
