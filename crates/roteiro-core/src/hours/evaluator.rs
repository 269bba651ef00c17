//! Open/closed status of a venue at a reference instant.
//!
//! Candidates for `now` are today's intervals plus yesterday's overnight
//! spans shifted into today's frame as `(open - 24, close)`. Boundaries are
//! inclusive and compared in whole seconds from midnight. Candidates are tested in order of their start in today's frame,
//! so a span carried over from yesterday wins over one that opens today.

use chrono::{Days, NaiveDateTime, Timelike};
use serde::Serialize;

use super::{RawWeeklySchedule, TimeInterval, WeeklySchedule};
use crate::calendar::{fractional_hour, DayOfWeek};
use crate::error::MalformedScheduleError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Result of evaluating a schedule at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenStatus {
    pub open: bool,
    /// The interval covering `now`. Its `day` is yesterday when `now` falls in
    /// the after-midnight part of yesterday's overnight span.
    pub active_interval: Option<TimeInterval>,
}

impl OpenStatus {
    pub fn closed() -> Self {
        Self {
            open: false,
            active_interval: None,
        }
    }

    fn open_in(interval: TimeInterval) -> Self {
        Self {
            open: true,
            active_interval: Some(interval),
        }
    }

    /// When the active interval ends, given the `now` this status was
    /// computed for. `None` when closed.
    pub fn closes_at(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let interval = self.active_interval?;
        let today = now.date();
        let carried_over = interval.day != DayOfWeek::of(today);
        let close_date = if interval.is_overnight() && !carried_over {
            today.checked_add_days(Days::new(1))?
        } else {
            today
        };
        interval.close.on(close_date)
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    interval: TimeInterval,
    /// Opening second in today's frame; negative for yesterday's spans.
    start: i64,
    carried_over: bool,
}

impl Candidate {
    fn covers(&self, secs: u32) -> bool {
        let open = self.interval.open.seconds_from_midnight();
        let close = self.interval.close.seconds_from_midnight();
        if self.carried_over {
            secs <= close
        } else if self.interval.is_overnight() {
            // the part after midnight is tomorrow's carried-over candidate
            secs >= open
        } else {
            open <= secs && secs <= close
        }
    }
}

/// Stateless evaluator of weekly opening hours.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatingHoursEvaluator;

impl OperatingHoursEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Whether `schedule` is open at `now`, and through which interval.
    pub fn evaluate(&self, schedule: &WeeklySchedule, now: NaiveDateTime) -> OpenStatus {
        let today = DayOfWeek::of(now.date());
        let secs = now.num_seconds_from_midnight();
        let hour = fractional_hour(now.time());
        let candidates = self.candidates(schedule, today);

        tracing::trace!(
            day = %today,
            hour,
            candidates = candidates.len(),
            "evaluating opening hours"
        );

        match candidates.iter().find(|c| c.covers(secs)) {
            Some(candidate) => {
                tracing::debug!(
                    day = %candidate.interval.day,
                    open = %candidate.interval.open,
                    close = %candidate.interval.close,
                    "open"
                );
                OpenStatus::open_in(candidate.interval)
            }
            None => {
                tracing::debug!(day = %today, hour, "closed");
                OpenStatus::closed()
            }
        }
    }

    /// The resolved intervals of one weekday.
    pub fn intervals_for(&self, schedule: &WeeklySchedule, day: DayOfWeek) -> Vec<TimeInterval> {
        schedule.intervals(day)
    }

    /// The earliest opening strictly after `now`, looking at most a week
    /// ahead. `None` when the schedule has no intervals at all.
    pub fn next_opening(&self, schedule: &WeeklySchedule, now: NaiveDateTime) -> Option<NaiveDateTime> {
        (0..=7u64).find_map(|offset| {
            let date = now.date().checked_add_days(Days::new(offset))?;
            schedule
                .intervals(DayOfWeek::of(date))
                .into_iter()
                .filter_map(|interval| interval.open.on(date))
                .filter(|opening| *opening > now)
                .min()
        })
    }

    fn candidates(&self, schedule: &WeeklySchedule, today: DayOfWeek) -> Vec<Candidate> {
        let carried = schedule
            .intervals(today.previous())
            .into_iter()
            .filter(TimeInterval::is_overnight)
            .map(|interval| Candidate {
                interval,
                start: i64::from(interval.open.seconds_from_midnight()) - SECONDS_PER_DAY,
                carried_over: true,
            });
        let own = schedule.intervals(today).into_iter().map(|interval| Candidate {
            interval,
            start: i64::from(interval.open.seconds_from_midnight()),
            carried_over: false,
        });

        let mut candidates: Vec<Candidate> = carried.chain(own).collect();
        candidates.sort_by_key(|c| c.start);
        candidates
    }
}

/// Validate a venue's raw schedule record and evaluate it at `now`.
///
/// Malformed records are rejected rather than reported as closed.
pub fn is_open(
    schedule: &RawWeeklySchedule,
    now: NaiveDateTime,
) -> Result<OpenStatus, MalformedScheduleError> {
    let schedule = WeeklySchedule::parse(schedule).inspect_err(|e| {
        tracing::warn!(error = %e, "rejecting malformed schedule");
    })?;
    Ok(OperatingHoursEvaluator::new().evaluate(&schedule, now))
}
