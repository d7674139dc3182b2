//! Calendar event records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

/// A scheduled calendar event.
///
/// Times are floating wall-clock time: the board is single-user and
/// single-machine, so no timezone conversion is ever applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(with = "timestamp::lenient_datetime")]
    pub start_time: NaiveDateTime,
    /// End of the event; expected to be >= start_time, not enforced.
    #[serde(with = "timestamp::lenient_datetime")]
    pub end_time: NaiveDateTime,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stored as a tag only; occurrences are never expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Which backing collection this record represents. Only `Regular`
    /// events are ever persisted under the events key.
    #[serde(default, skip_serializing_if = "EventOrigin::is_regular")]
    pub origin: EventOrigin,
}

impl Event {
    /// Create an event with a fresh id and no optional fields set.
    pub fn new(
        title: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        kind: EventKind,
    ) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            location: None,
            image: None,
            start_time,
            end_time,
            kind,
            color: None,
            recurrence: None,
            priority: None,
            origin: EventOrigin::Regular,
        }
    }

    /// The calendar day this event buckets into.
    pub fn day(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn is_life_projection(&self) -> bool {
        self.origin == EventOrigin::LifeProjection
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Event,
    Task,
    Appointment,
    Birthday,
    Anniversary,
    Holiday,
    Special,
}

/// Where a unified event row came from: the plain events collection, or a
/// read-only projection of a life event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventOrigin {
    #[default]
    Regular,
    LifeProjection,
}

impl EventOrigin {
    pub fn is_regular(&self) -> bool {
        matches!(self, EventOrigin::Regular)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}
