use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TimeToken;
use crate::calendar::DayOfWeek;
use crate::error::MalformedScheduleError;

/// Weekly schedule in the shape venue records store it: day name to a flat
/// list of `HH:MM` strings.
pub type RawWeeklySchedule = BTreeMap<String, Vec<String>>;

/// A validated weekly opening pattern.
///
/// Each day holds an ordered list of tokens; consecutive pairs are
/// (open, close) boundaries. A trailing unpaired token opens the venue until
/// the end of that day. Days with no entry are closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeeklySchedule", into = "RawWeeklySchedule")]
pub struct WeeklySchedule {
    days: BTreeMap<DayOfWeek, Vec<TimeToken>>,
}

/// One resolved opening period of a weekday.
///
/// `close < open` marks a span that continues past midnight into the next
/// calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeInterval {
    pub day: DayOfWeek,
    pub open: TimeToken,
    pub close: TimeToken,
}

impl TimeInterval {
    pub fn is_overnight(&self) -> bool {
        self.close < self.open
    }
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw record, rejecting unknown day keys and malformed tokens.
    pub fn parse(raw: &RawWeeklySchedule) -> Result<Self, MalformedScheduleError> {
        let mut days = BTreeMap::new();
        for (key, tokens) in raw {
            let day: DayOfWeek = key.parse()?;
            let tokens = parse_tokens(day, tokens.iter().map(String::as_str))?;
            if days.insert(day, tokens).is_some() {
                return Err(MalformedScheduleError::DuplicateWeekday(day));
            }
        }
        Ok(Self { days })
    }

    /// Set the tokens for one day, replacing any existing entry.
    pub fn with_day(mut self, day: DayOfWeek, tokens: Vec<TimeToken>) -> Self {
        self.days.insert(day, tokens);
        self
    }

    /// Like [`with_day`](Self::with_day) but parses `HH:MM` strings.
    pub fn with_tokens(self, day: DayOfWeek, tokens: &[&str]) -> Result<Self, MalformedScheduleError> {
        let tokens = parse_tokens(day, tokens.iter().copied())?;
        Ok(self.with_day(day, tokens))
    }

    pub fn tokens(&self, day: DayOfWeek) -> &[TimeToken] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no day has any tokens.
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// The intervals of one weekday, in token order.
    pub fn intervals(&self, day: DayOfWeek) -> Vec<TimeInterval> {
        self.tokens(day)
            .chunks(2)
            .map(|pair| TimeInterval {
                day,
                open: pair[0],
                close: pair.get(1).copied().unwrap_or(TimeToken::END_OF_DAY),
            })
            .collect()
    }
}

fn parse_tokens<'a>(
    day: DayOfWeek,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<Vec<TimeToken>, MalformedScheduleError> {
    tokens
        .map(|token| token.parse::<TimeToken>().map_err(|e| e.on_day(day)))
        .collect()
}

impl TryFrom<RawWeeklySchedule> for WeeklySchedule {
    type Error = MalformedScheduleError;

    fn try_from(raw: RawWeeklySchedule) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<WeeklySchedule> for RawWeeklySchedule {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule
            .days
            .into_iter()
            .map(|(day, tokens)| {
                (
                    day.as_str().to_string(),
                    tokens.into_iter().map(String::from).collect(),
                )
            })
            .collect()
    }
}
