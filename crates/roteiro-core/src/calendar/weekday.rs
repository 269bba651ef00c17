use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::MalformedScheduleError;

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Weekday of a calendar date.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// 0 = Sunday ... 6 = Saturday
    pub fn num_days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Inverse of [`num_days_from_sunday`](Self::num_days_from_sunday), wrapping modulo 7.
    pub fn from_sunday_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    pub fn previous(self) -> Self {
        Self::from_sunday_index(self.num_days_from_sunday() + 6)
    }

    pub fn next(self) -> Self {
        Self::from_sunday_index(self.num_days_from_sunday() + 1)
    }

    /// Canonical lowercase English key, as written by the serializer.
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        }
    }

    /// Brazilian Portuguese display name.
    pub fn pt_br(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "domingo",
            DayOfWeek::Monday => "segunda-feira",
            DayOfWeek::Tuesday => "terça-feira",
            DayOfWeek::Wednesday => "quarta-feira",
            DayOfWeek::Thursday => "quinta-feira",
            DayOfWeek::Friday => "sexta-feira",
            DayOfWeek::Saturday => "sábado",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self::from_sunday_index(weekday.num_days_from_sunday() as u8)
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Sunday => Weekday::Sun,
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the day keys venue records are written with: English names and
/// abbreviations, and Portuguese names with or without accents and `-feira`.
impl FromStr for DayOfWeek {
    type Err = MalformedScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let key = key.strip_suffix("-feira").unwrap_or(&key);
        let day = match key {
            "sunday" | "sun" | "domingo" | "dom" => DayOfWeek::Sunday,
            "monday" | "mon" | "segunda" | "seg" => DayOfWeek::Monday,
            "tuesday" | "tue" | "terça" | "terca" | "ter" => DayOfWeek::Tuesday,
            "wednesday" | "wed" | "quarta" | "qua" => DayOfWeek::Wednesday,
            "thursday" | "thu" | "quinta" | "qui" => DayOfWeek::Thursday,
            "friday" | "fri" | "sexta" | "sex" => DayOfWeek::Friday,
            "saturday" | "sat" | "sábado" | "sabado" | "sáb" | "sab" => DayOfWeek::Saturday,
            _ => return Err(MalformedScheduleError::UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}
