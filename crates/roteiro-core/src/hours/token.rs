use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{MalformedScheduleError, TokenDefect};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock hour and minute with no date or timezone.
///
/// Parsed tokens are always in 00:00..=23:59. The only value outside that
/// range is [`TimeToken::END_OF_DAY`], which marks a closing boundary the
/// schedule did not state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeToken {
    minutes: u16,
}

impl TimeToken {
    /// 24:00, the end of a calendar day.
    pub const END_OF_DAY: TimeToken = TimeToken {
        minutes: MINUTES_PER_DAY,
    };

    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: hour as u16 * 60 + minute as u16,
        })
    }

    pub fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }

    pub fn is_end_of_day(self) -> bool {
        self == Self::END_OF_DAY
    }

    /// Fractional hour, e.g. 18:30 -> 18.5 and END_OF_DAY -> 24.0.
    /// For display; comparisons use [`seconds_from_midnight`](Self::seconds_from_midnight).
    pub fn as_hours(self) -> f64 {
        self.minutes as f64 / 60.0
    }

    /// Whole seconds since 00:00; END_OF_DAY is 86400.
    pub fn seconds_from_midnight(self) -> u32 {
        u32::from(self.minutes) * 60
    }

    /// The instant this token names on `date`. END_OF_DAY resolves to
    /// midnight of the following day.
    pub fn on(self, date: NaiveDate) -> Option<NaiveDateTime> {
        if self.is_end_of_day() {
            return date.succ_opt().map(|next| next.and_time(NaiveTime::MIN));
        }
        let time = NaiveTime::from_hms_opt(self.hour() as u32, self.minute() as u32, 0)?;
        Some(date.and_time(time))
    }
}

impl FromStr for TimeToken {
    type Err = MalformedScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |defect| MalformedScheduleError::InvalidToken {
            day: None,
            token: s.to_string(),
            defect,
        };

        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid(TokenDefect::MissingSeparator))?;
        let (hour_digits, minute_digits) = (hour.len(), minute.len());
        let hour = parse_component(hour).ok_or_else(|| invalid(TokenDefect::NonNumeric))?;
        let minute = parse_component(minute).ok_or_else(|| invalid(TokenDefect::NonNumeric))?;
        if hour_digits > 2 || minute_digits != 2 {
            return Err(invalid(TokenDefect::Width));
        }

        if hour > 23 {
            return Err(invalid(TokenDefect::HourOutOfRange(hour)));
        }
        if minute > 59 {
            return Err(invalid(TokenDefect::MinuteOutOfRange(minute)));
        }

        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl TryFrom<String> for TimeToken {
    type Error = MalformedScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeToken> for String {
    fn from(token: TimeToken) -> Self {
        token.to_string()
    }
}

impl fmt::Display for TimeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
