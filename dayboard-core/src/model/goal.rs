//! Goals with clamped percentage progress.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    /// Always within [0, 100]; clamped on every mutation and on load.
    #[serde(deserialize_with = "clamped_progress")]
    progress: u8,
    pub category: GoalCategory,
    #[serde(default, with = "timestamp::lenient_date_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Goal {
    pub fn new(title: impl Into<String>, category: GoalCategory) -> Self {
        Goal {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            progress: 0,
            category,
            due_date: None,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn set_progress(&mut self, value: i32) {
        self.progress = value.clamp(0, 100) as u8;
    }

    /// Shift progress by `delta`, clamped to [0, 100].
    pub fn adjust_progress(&mut self, delta: i32) {
        self.set_progress(i32::from(self.progress) + delta);
    }

    pub fn is_complete(&self) -> bool {
        self.progress == 100
    }
}

fn clamped_progress<'de, D: Deserializer<'de>>(de: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(de)?;
    Ok(raw.clamp(0, 100) as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Personal,
    Work,
    Health,
    Learning,
}
