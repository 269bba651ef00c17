//! Relative start-time labels for events.
//!
//! Rules are applied in priority order: ongoing, same calendar day, next
//! calendar day, otherwise dated. Day comparisons use full calendar dates,
//! so events in another year are never "today".

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::EventTiming;
use crate::calendar::{calendar_days_between, same_calendar_day};
use crate::error::InvalidEventTimingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTimeKind {
    /// `now` is within `[start, start + duration)`
    Ongoing,
    Today,
    Tomorrow,
    /// Any other day, past or future
    Dated,
}

/// Structured label data for one event at one reference instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventTimeLabel {
    pub kind: EventTimeKind,
    /// Zero-padded 24-hour start hour, e.g. "08".
    pub start_hour: String,
    /// Hour the event ends; set for ongoing events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_hour: Option<String>,
    /// `DD/MM`; set for dated events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
}

/// Stateless classifier of event start times.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventTimeClassifier;

impl EventTimeClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, event: &EventTiming, now: NaiveDateTime) -> EventTimeLabel {
        let start = event.start();
        let start_hour = hour_label(start);

        if let Some(end) = event.end() {
            if start <= now && now < end {
                return EventTimeLabel {
                    kind: EventTimeKind::Ongoing,
                    start_hour,
                    end_hour: Some(hour_label(end)),
                    date_label: None,
                };
            }
        }

        let kind = if same_calendar_day(start, now) {
            EventTimeKind::Today
        } else if calendar_days_between(now.date(), start.date()) == 1 {
            EventTimeKind::Tomorrow
        } else {
            EventTimeKind::Dated
        };

        tracing::trace!(?kind, %start, %now, "classified event");

        EventTimeLabel {
            kind,
            start_hour,
            end_hour: None,
            date_label: (kind == EventTimeKind::Dated).then(|| start.format("%d/%m").to_string()),
        }
    }
}

fn hour_label(instant: NaiveDateTime) -> String {
    format!("{:02}", instant.hour())
}

/// Parse an event record's date/time strings and classify it at `now`.
///
/// Missing or unparseable start data is an error, never a "dated" label.
pub fn classify_record(
    date: Option<&str>,
    time: Option<&str>,
    duration_hours: Option<f64>,
    now: NaiveDateTime,
) -> Result<EventTimeLabel, InvalidEventTimingError> {
    let timing = EventTiming::parse(date, time, duration_hours).inspect_err(|e| {
        tracing::warn!(error = %e, "rejecting event timing");
    })?;
    Ok(EventTimeClassifier::new().classify(&timing, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn classify(event: &EventTiming, now: NaiveDateTime) -> EventTimeLabel {
        EventTimeClassifier::new().classify(event, now)
    }

    #[test]
    fn ongoing_from_start_instant() {
        let start = at(2024, 5, 10, 20, 0);
        let event = EventTiming::new(start, Some(2.0)).unwrap();

        let label = classify(&event, start);
        assert_eq!(label.kind, EventTimeKind::Ongoing);
        assert_eq!(label.start_hour, "20");
        assert_eq!(label.end_hour.as_deref(), Some("22"));
    }

    #[test]
    fn not_ongoing_after_end() {
        let start = at(2024, 5, 10, 20, 0);
        let event = EventTiming::new(start, Some(2.0)).unwrap();

        // end is exclusive
        assert_eq!(classify(&event, at(2024, 5, 10, 22, 0)).kind, EventTimeKind::Today);
        assert_eq!(
            classify(&event, start + TimeDelta::minutes(121)).kind,
            EventTimeKind::Today
        );
    }

    #[test]
    fn ongoing_across_midnight_reports_end_hour() {
        let event = EventTiming::new(at(2024, 5, 10, 23, 0), Some(3.5)).unwrap();
        let label = classify(&event, at(2024, 5, 11, 1, 0));
        assert_eq!(label.kind, EventTimeKind::Ongoing);
        assert_eq!(label.end_hour.as_deref(), Some("02"));
    }

    #[test]
    fn without_duration_never_ongoing() {
        let start = at(2024, 5, 10, 20, 0);
        let label = classify(&EventTiming::instant(start), start);
        assert_eq!(label.kind, EventTimeKind::Today);
        assert_eq!(label.end_hour, None);
    }

    #[test]
    fn zero_duration_never_ongoing() {
        let start = at(2024, 5, 10, 20, 0);
        let event = EventTiming::new(start, Some(0.0)).unwrap();
        assert_eq!(classify(&event, start).kind, EventTimeKind::Today);
    }

    #[test]
    fn earlier_today_is_still_today() {
        let event = EventTiming::instant(at(2024, 5, 10, 8, 0));
        let label = classify(&event, at(2024, 5, 10, 21, 0));
        assert_eq!(label.kind, EventTimeKind::Today);
        assert_eq!(label.start_hour, "08");
    }

    #[test]
    fn tomorrow_across_month_and_year() {
        let event = EventTiming::instant(at(2024, 2, 1, 0, 10));
        assert_eq!(classify(&event, at(2024, 1, 31, 23, 50)).kind, EventTimeKind::Tomorrow);

        let event = EventTiming::instant(at(2025, 1, 1, 0, 10));
        assert_eq!(classify(&event, at(2024, 12, 31, 23, 50)).kind, EventTimeKind::Tomorrow);
    }

    #[test]
    fn yesterday_late_event_is_dated() {
        let event = EventTiming::instant(at(2024, 1, 31, 23, 50));
        let label = classify(&event, at(2024, 2, 1, 0, 10));
        assert_eq!(label.kind, EventTimeKind::Dated);
        assert_eq!(label.date_label.as_deref(), Some("31/01"));
    }

    #[test]
    fn same_day_other_year_is_dated() {
        let event = EventTiming::instant(at(2025, 5, 10, 20, 0));
        let label = classify(&event, at(2024, 5, 10, 12, 0));
        assert_eq!(label.kind, EventTimeKind::Dated);
        assert_eq!(label.date_label.as_deref(), Some("10/05"));
    }

    #[test]
    fn two_days_ahead_is_dated() {
        let event = EventTiming::instant(at(2024, 5, 12, 9, 0));
        let label = classify(&event, at(2024, 5, 10, 12, 0));
        assert_eq!(label.kind, EventTimeKind::Dated);
        assert_eq!(label.start_hour, "09");
        assert_eq!(label.end_hour, None);
    }

    #[test]
    fn classify_record_surfaces_bad_data() {
        let now = at(2024, 5, 10, 12, 0);
        assert_eq!(
            classify_record(None, Some("20:00"), None, now),
            Err(InvalidEventTimingError::MissingDate)
        );
        let label = classify_record(Some("11/05/2024"), Some("20h"), None, now).unwrap();
        assert_eq!(label.kind, EventTimeKind::Tomorrow);
    }

    #[test]
    fn serializes_lowercase_kind() {
        let label = classify(&EventTiming::instant(at(2024, 5, 10, 20, 0)), at(2024, 5, 10, 12, 0));
        let json = serde_json::to_value(&label).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "today", "start_hour": "20"}));
    }
}
