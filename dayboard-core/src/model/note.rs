//! Sticky notes pinned to calendar days.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarNote {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub color: NoteColor,
    /// The day the note is pinned to.
    #[serde(with = "timestamp::lenient_date")]
    pub date: NaiveDate,
    #[serde(with = "timestamp::lenient_datetime")]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub pinned: bool,
}

impl CalendarNote {
    pub fn new(content: impl Into<String>, date: NaiveDate, color: NoteColor) -> Self {
        CalendarNote {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            color,
            date,
            created_at: Local::now().naive_local(),
            pinned: false,
        }
    }
}

/// The fixed sticky-note palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
}
