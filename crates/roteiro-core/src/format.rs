//! Brazilian Portuguese copy for status badges.
//!
//! The evaluators return structured values; every user-facing phrase is
//! built here.

use chrono::{NaiveDateTime, Timelike};

use crate::calendar::{calendar_days_between, DayOfWeek};
use crate::event::{EventTimeKind, EventTimeLabel};
use crate::hours::{OpenStatus, OperatingHoursEvaluator, TimeInterval, TimeToken, WeeklySchedule};

/// "20" -> "20h"
pub fn hour_label(hour: &str) -> String {
    format!("{hour}h")
}

/// "18:00" -> "18h", "18:30" -> "18h30"
pub fn token_label(token: TimeToken) -> String {
    match token.minute() {
        0 => format!("{:02}h", token.hour()),
        minute => format!("{:02}h{minute:02}", token.hour()),
    }
}

pub fn interval_label(interval: &TimeInterval) -> String {
    format!("{} às {}", token_label(interval.open), token_label(interval.close))
}

/// Opening hours of one weekday, e.g. "12h às 15h, 18h às 02h" or "Fechado".
pub fn day_hours_label(schedule: &WeeklySchedule, day: DayOfWeek) -> String {
    let intervals = OperatingHoursEvaluator::new().intervals_for(schedule, day);
    if intervals.is_empty() {
        return "Fechado".to_string();
    }
    intervals
        .iter()
        .map(interval_label)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn event_badge(label: &EventTimeLabel) -> String {
    let start = hour_label(&label.start_hour);
    match label.kind {
        EventTimeKind::Ongoing => {
            let end = label.end_hour.as_deref().unwrap_or(&label.start_hour);
            format!("Agora, até {}", hour_label(end))
        }
        EventTimeKind::Today => format!("Hoje, às {start}"),
        EventTimeKind::Tomorrow => format!("Amanhã, às {start}"),
        EventTimeKind::Dated => match &label.date_label {
            Some(date) => format!("{date}, às {start}"),
            None => format!("Às {start}"),
        },
    }
}

pub fn open_badge(status: &OpenStatus) -> &'static str {
    if status.open {
        "Aberto agora"
    } else {
        "Fechado agora"
    }
}

/// One-line venue status: the badge plus when it closes or next opens.
pub fn venue_status_line(
    status: &OpenStatus,
    now: NaiveDateTime,
    next_opening: Option<NaiveDateTime>,
) -> String {
    let badge = open_badge(status);
    if status.open {
        return match status.closes_at(now) {
            Some(close) => format!("{badge} · fecha às {}", instant_hour_label(close)),
            None => badge.to_string(),
        };
    }
    match next_opening {
        Some(opening) => {
            let when = match calendar_days_between(now.date(), opening.date()) {
                0 => "hoje".to_string(),
                1 => "amanhã".to_string(),
                _ => DayOfWeek::of(opening.date()).pt_br().to_string(),
            };
            format!("{badge} · abre {when} às {}", instant_hour_label(opening))
        }
        None => badge.to_string(),
    }
}

fn instant_hour_label(instant: NaiveDateTime) -> String {
    match TimeToken::new(instant.hour() as u8, instant.minute() as u8) {
        Some(token) => token_label(token),
        None => instant.format("%Hh%M").to_string(),
    }
}
