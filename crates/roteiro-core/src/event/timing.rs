use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use crate::error::InvalidEventTimingError;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// When an event starts and, optionally, how long it runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventTiming {
    start: NaiveDateTime,
    /// Whole or fractional hours.
    duration_hours: Option<f64>,
}

impl EventTiming {
    /// An event with no stated duration.
    pub fn instant(start: NaiveDateTime) -> Self {
        Self {
            start,
            duration_hours: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`InvalidEventTimingError::InvalidDuration`] if the duration is
    /// negative, not finite, or runs past the representable calendar.
    pub fn new(start: NaiveDateTime, duration_hours: Option<f64>) -> Result<Self, InvalidEventTimingError> {
        let timing = Self {
            start,
            duration_hours,
        };
        if let Some(hours) = duration_hours {
            if !hours.is_finite() || hours < 0.0 || timing.end().is_none() {
                return Err(InvalidEventTimingError::InvalidDuration(hours));
            }
        }
        Ok(timing)
    }

    /// Build from the date and time strings event records carry.
    ///
    /// Dates are `YYYY-MM-DD` or `DD/MM/YYYY`; times are `HH:MM`, `HH:MM:SS`,
    /// `HHhMM` or `HHh`.
    pub fn parse(
        date: Option<&str>,
        time: Option<&str>,
        duration_hours: Option<f64>,
    ) -> Result<Self, InvalidEventTimingError> {
        let date = date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(InvalidEventTimingError::MissingDate)?;
        let time = time
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(InvalidEventTimingError::MissingTime)?;

        let date = parse_date(date)?;
        let time = parse_time(time)?;
        Self::new(date.and_time(time), duration_hours)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn duration_hours(&self) -> Option<f64> {
        self.duration_hours
    }

    /// Start plus duration; `None` without a duration.
    pub fn end(&self) -> Option<NaiveDateTime> {
        let hours = self.duration_hours?;
        let millis = (hours * 3_600_000.0).round();
        if !millis.is_finite() || millis > i64::MAX as f64 {
            return None;
        }
        let delta = TimeDelta::try_milliseconds(millis as i64)?;
        self.start.checked_add_signed(delta)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, InvalidEventTimingError> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| InvalidEventTimingError::UnparseableDate(value.to_string()))
}

/// `HH:MM[:SS]`, `HHh` or `HHhMM`. The hour takes one or two digits, every
/// other field exactly two. Signs and padding are rejected.
fn parse_time(value: &str) -> Result<NaiveTime, InvalidEventTimingError> {
    let unparseable = || InvalidEventTimingError::UnparseableTime(value.to_string());

    let lowered = value.to_lowercase();
    let mut fields: Vec<&str> = if lowered.contains(':') {
        lowered.split(':').collect()
    } else {
        let (hour, minute) = lowered.split_once('h').ok_or_else(unparseable)?;
        vec![hour, if minute.is_empty() { "00" } else { minute }]
    };
    if fields.len() == 2 {
        fields.push("00");
    }

    let [hour, minute, second] = fields[..] else {
        return Err(unparseable());
    };
    let field = |part: &str, widths: std::ops::RangeInclusive<usize>| -> Option<u32> {
        let digits = !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if digits && widths.contains(&part.len()) {
            part.parse().ok()
        } else {
            None
        }
    };
    let (hour, minute, second) = (
        field(hour, 1..=2).ok_or_else(unparseable)?,
        field(minute, 2..=2).ok_or_else(unparseable)?,
        field(second, 2..=2).ok_or_else(unparseable)?,
    );
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(unparseable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_iso_and_brazilian_dates() {
        let a = EventTiming::parse(Some("2024-05-10"), Some("20:00"), None).unwrap();
        let b = EventTiming::parse(Some("10/05/2024"), Some("20h"), None).unwrap();
        assert_eq!(a.start(), start());
        assert_eq!(a, b);
    }

    #[test]
    fn parses_hour_suffix_with_minutes() {
        let t = EventTiming::parse(Some("2024-05-10"), Some("20h30"), Some(1.5)).unwrap();
        assert_eq!(t.start(), start() + TimeDelta::minutes(30));
        assert_eq!(t.end(), Some(start() + TimeDelta::hours(2)));
    }

    #[test]
    fn missing_parts_are_errors() {
        assert_eq!(
            EventTiming::parse(None, Some("20:00"), None),
            Err(InvalidEventTimingError::MissingDate)
        );
        assert_eq!(
            EventTiming::parse(Some("2024-05-10"), Some("  "), None),
            Err(InvalidEventTimingError::MissingTime)
        );
    }

    #[test]
    fn unparseable_parts_are_errors() {
        assert_eq!(
            EventTiming::parse(Some("10 de maio"), Some("20:00"), None),
            Err(InvalidEventTimingError::UnparseableDate("10 de maio".into()))
        );
        assert_eq!(
            EventTiming::parse(Some("2024-05-10"), Some("noite"), None),
            Err(InvalidEventTimingError::UnparseableTime("noite".into()))
        );
        assert_eq!(
            EventTiming::parse(Some("2024-05-10"), Some("25h"), None),
            Err(InvalidEventTimingError::UnparseableTime("25h".into()))
        );
    }

    #[test]
    fn rejects_signed_and_misaligned_times() {
        for time in ["+20h", "+20:00", "20:5", "020:00", "20h5", "20h300", "20:00:1", "h30", "20"] {
            assert_eq!(
                EventTiming::parse(Some("2024-05-10"), Some(time), None),
                Err(InvalidEventTimingError::UnparseableTime(time.into())),
                "{time}"
            );
        }
    }

    #[test]
    fn accepts_every_time_shape() {
        let expected = |h, m, s| {
            NaiveDate::from_ymd_opt(2024, 5, 10)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap()
        };
        let at = |time| EventTiming::parse(Some("2024-05-10"), Some(time), None).unwrap().start();
        assert_eq!(at("9:05"), expected(9, 5, 0));
        assert_eq!(at("20:00:30"), expected(20, 0, 30));
        assert_eq!(at("20H30"), expected(20, 30, 0));
        assert_eq!(at("8h"), expected(8, 0, 0));
    }

    #[test]
    fn rejects_negative_or_nan_duration() {
        assert_eq!(
            EventTiming::new(start(), Some(-1.0)),
            Err(InvalidEventTimingError::InvalidDuration(-1.0))
        );
        assert!(EventTiming::new(start(), Some(f64::NAN)).is_err());
        assert!(EventTiming::new(start(), Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn zero_duration_is_valid() {
        let t = EventTiming::new(start(), Some(0.0)).unwrap();
        assert_eq!(t.end(), Some(start()));
        assert_eq!(EventTiming::instant(start()).end(), None);
    }
}
