//! Static JSON catalog of venues and events.
//!
//! Records are kept in the shape the site's data producers write them.
//! Opening hours and event start times are validated when a record is
//! evaluated, so one defective venue fails loudly without preventing the rest
//! of the catalog from loading.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, InvalidEventTimingError, MalformedScheduleError, Result};
use crate::event::{EventTimeClassifier, EventTimeLabel, EventTiming};
use crate::hours::{is_open, OpenStatus, RawWeeklySchedule, WeeklySchedule};

/// A place with weekly opening hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hours: RawWeeklySchedule,
}

impl Venue {
    pub fn schedule(&self) -> Result<WeeklySchedule, MalformedScheduleError> {
        WeeklySchedule::parse(&self.hours)
    }

    pub fn status(&self, now: NaiveDateTime) -> Result<OpenStatus, MalformedScheduleError> {
        is_open(&self.hours, now)
    }
}

/// An event listing with human-entered date and time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    /// Hours
    #[serde(default)]
    pub duration: Option<f64>,
}

impl EventRecord {
    pub fn timing(&self) -> Result<EventTiming, InvalidEventTimingError> {
        EventTiming::parse(self.date.as_deref(), self.time.as_deref(), self.duration)
    }

    pub fn label(&self, now: NaiveDateTime) -> Result<EventTimeLabel, InvalidEventTimingError> {
        let timing = self.timing()?;
        Ok(EventTimeClassifier::new().classify(&timing, now))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

impl Catalog {
    /// Read a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            venues = catalog.venues.len(),
            events = catalog.events.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn venue(&self, id: &str) -> Result<&Venue> {
        self.venues
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| CoreError::NotFound {
                kind: "venue",
                id: id.to_string(),
            })
    }

    pub fn event(&self, id: &str) -> Result<&EventRecord> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::NotFound {
                kind: "event",
                id: id.to_string(),
            })
    }
}
