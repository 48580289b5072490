//! Task and time block data structures.
//!
//! A `Task` is a plannable unit of work; a `TimeBlock` is an allocation of
//! time to a category. Neither carries an id: both are addressed by their
//! position in the day plan.

use serde::{Deserialize, Serialize};

use crate::fields::*;

/// A unit of work planned for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub minutes: u32,
    pub energy: Energy,
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create an open task.
    pub fn new(title: impl Into<String>, minutes: u32, energy: Energy, priority: Priority) -> Self {
        Task {
            title: title.into(),
            minutes,
            energy,
            priority,
            done: false,
        }
    }

    /// Builder-style completion flag, used by the sample day.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Energy-weighted minutes this task contributes to focus potential.
    pub fn weighted_minutes(&self) -> f64 {
        f64::from(self.minutes) * self.energy.weight()
    }
}

/// A block of time allocated to focus, meetings or recovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub title: String,
    pub minutes: u32,
    #[serde(rename = "type")]
    pub kind: BlockKind,
}

impl TimeBlock {
    pub fn new(title: impl Into<String>, minutes: u32, kind: BlockKind) -> Self {
        TimeBlock {
            title: title.into(),
            minutes,
            kind,
        }
    }

    /// Block-weighted minutes this block contributes to weighted focus time.
    pub fn weighted_minutes(&self) -> f64 {
        f64::from(self.minutes) * self.kind.weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new("Write notes", 25, Energy::Low, Priority::new("3"));
        assert!(!task.done);
        assert!(task.with_done(true).done);
    }

    #[test]
    fn test_weighted_minutes() {
        let task = Task::new("Deck", 90, Energy::High, Priority::new("1"));
        assert_eq!(task.weighted_minutes(), 90.0);

        let block = TimeBlock::new("Standup", 50, BlockKind::Meeting);
        assert!((block.weighted_minutes() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_block_serialises_kind_as_type() {
        let block = TimeBlock::new("Walk", 30, BlockKind::Recovery);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "recovery");
        assert_eq!(json["minutes"], 30);
    }
}
