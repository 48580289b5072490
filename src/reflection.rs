//! End-of-day reflection notes and their save acknowledgment.
//!
//! Nothing here is stored anywhere: saving only produces an acknowledgment
//! that the notes were non-empty at a given time of day.

use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

/// Free-text reflection fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reflection {
    pub wins: String,
    pub stuck: String,
    pub next: String,
}

impl Reflection {
    pub fn new(wins: impl Into<String>, stuck: impl Into<String>, next: impl Into<String>) -> Self {
        Reflection {
            wins: wins.into(),
            stuck: stuck.into(),
            next: next.into(),
        }
    }

    /// True when every field is blank after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        [&self.wins, &self.stuck, &self.next]
            .iter()
            .all(|s| s.trim().is_empty())
    }

    /// Acknowledge a save at the given local time of day.
    pub fn save(&self, now: NaiveTime) -> SaveStatus {
        if self.is_blank() {
            SaveStatus::NothingToSave
        } else {
            SaveStatus::SavedAt(now)
        }
    }
}

/// Acknowledgment shown beside the reflection fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaveStatus {
    #[default]
    NotSaved,
    NothingToSave,
    SavedAt(NaiveTime),
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveStatus::NotSaved => f.write_str("Not saved yet."),
            SaveStatus::NothingToSave => f.write_str("Nothing to save yet."),
            SaveStatus::SavedAt(t) => write!(f, "Saved at {}", t.format("%H:%M:%S")),
        }
    }
}
