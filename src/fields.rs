//! Enumerations and field types for daily planning.
//!
//! This module defines the structured values that categorise tasks and time
//! blocks, together with the fixed weights the statistics engine applies to them.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How much focus capacity a task consumes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Energy {
    High,
    Medium,
    Low,
}

impl Energy {
    /// All energy levels in the order the task form offers them.
    pub const ALL: [Energy; 3] = [Energy::High, Energy::Medium, Energy::Low];

    /// Multiplier applied to a task's minutes when computing focus potential.
    pub fn weight(self) -> f64 {
        match self {
            Energy::High => 1.0,
            Energy::Medium => 0.7,
            Energy::Low => 0.4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Energy::High => "high",
            Energy::Medium => "medium",
            Energy::Low => "low",
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Category of a time block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Focus,
    Meeting,
    Recovery,
}

impl BlockKind {
    /// All block kinds in the order the block form offers them.
    pub const ALL: [BlockKind; 3] = [BlockKind::Focus, BlockKind::Meeting, BlockKind::Recovery];

    /// Multiplier applied to a block's minutes when computing weighted focus time.
    pub fn weight(self) -> f64 {
        match self {
            BlockKind::Focus => 1.0,
            BlockKind::Meeting => 0.6,
            BlockKind::Recovery => 0.2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Focus => "focus",
            BlockKind::Meeting => "meeting",
            BlockKind::Recovery => "recovery",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display-only priority label such as "1", "2" or "3".
///
/// No ordering is derived from the label; it is rendered as `P{label}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(String);

impl Priority {
    /// Labels offered by the task form.
    pub const CHOICES: [&'static str; 3] = ["1", "2", "3"];

    pub fn new(label: impl Into<String>) -> Self {
        Priority(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_weights() {
        assert_eq!(Energy::High.weight(), 1.0);
        assert_eq!(Energy::Medium.weight(), 0.7);
        assert_eq!(Energy::Low.weight(), 0.4);
    }

    #[test]
    fn test_block_weights() {
        assert_eq!(BlockKind::Focus.weight(), 1.0);
        assert_eq!(BlockKind::Meeting.weight(), 0.6);
        assert_eq!(BlockKind::Recovery.weight(), 0.2);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::new("2").to_string(), "P2");
        assert_eq!(Priority::new("2").label(), "2");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Energy::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&BlockKind::Recovery).unwrap(), "\"recovery\"");
        assert_eq!(serde_json::to_string(&Priority::new("1")).unwrap(), "\"1\"");
    }
}
