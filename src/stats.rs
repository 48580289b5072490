//! Statistics engine for the day plan.
//!
//! `compute` is a pure aggregation over the task and block lists. It is
//! re-run in full whenever the plan is displayed; nothing is cached.

use std::fmt;

use serde::Serialize;

use crate::fields::BlockKind;
use crate::task::{Task, TimeBlock};

/// Derived statistics for the current plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub planned_minutes: u32,
    pub done_minutes: u32,
    pub deep_minutes: u32,
    pub recovery_minutes: u32,
    pub focus_potential: f64,
    pub focus_achieved: f64,
    /// Block-weighted focus minutes. Kept for reporting; the TUI does not show it.
    pub block_focus: f64,
    pub focus_score: u32,
    pub intentions: usize,
    pub help: FocusHelp,
}

impl Stats {
    /// Deep work as decimal hours, e.g. "2.0h".
    pub fn deep_work_display(&self) -> String {
        format_hours(self.deep_minutes)
    }

    /// Recovery as decimal hours, e.g. "0.5h".
    pub fn recovery_display(&self) -> String {
        format_hours(self.recovery_minutes)
    }
}

/// Caption shown under the focus score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "done_minutes", rename_all = "kebab-case")]
pub enum FocusHelp {
    PlanTasks,
    AllDone,
    Completed(u32),
}

impl fmt::Display for FocusHelp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusHelp::PlanTasks => f.write_str("Plan tasks to calculate."),
            FocusHelp::AllDone => f.write_str("All tasks done. Nice."),
            FocusHelp::Completed(m) => write!(f, "{} completed today.", format_minutes(*m)),
        }
    }
}

/// Compute statistics from the current task and block lists.
pub fn compute(tasks: &[Task], blocks: &[TimeBlock]) -> Stats {
    let planned_minutes = tasks.iter().map(|t| t.minutes).fold(0, u32::saturating_add);
    let done_minutes = tasks
        .iter()
        .filter(|t| t.done)
        .map(|t| t.minutes)
        .fold(0, u32::saturating_add);

    let deep_minutes = minutes_of_kind(blocks, BlockKind::Focus);
    let recovery_minutes = minutes_of_kind(blocks, BlockKind::Recovery);

    let focus_potential: f64 = tasks.iter().map(Task::weighted_minutes).sum();
    let focus_achieved: f64 = tasks
        .iter()
        .filter(|t| t.done)
        .map(Task::weighted_minutes)
        .sum();
    let block_focus: f64 = blocks.iter().map(TimeBlock::weighted_minutes).sum();

    let focus_score = if focus_potential == 0.0 {
        0
    } else {
        // Inputs are non-negative, so f64::round is round-half-up here.
        (focus_achieved / focus_potential * 100.0).round() as u32
    };

    let help = if tasks.is_empty() {
        FocusHelp::PlanTasks
    } else if done_minutes == planned_minutes {
        FocusHelp::AllDone
    } else {
        FocusHelp::Completed(done_minutes)
    };

    Stats {
        planned_minutes,
        done_minutes,
        deep_minutes,
        recovery_minutes,
        focus_potential,
        focus_achieved,
        block_focus,
        focus_score,
        intentions: tasks.len(),
        help,
    }
}

fn minutes_of_kind(blocks: &[TimeBlock], kind: BlockKind) -> u32 {
    blocks
        .iter()
        .filter(|b| b.kind == kind)
        .map(|b| b.minutes)
        .fold(0, u32::saturating_add)
}

/// Format a duration as "45m", "2h" or "1h 30m".
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours == 0 {
        format!("{}m", mins)
    } else if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, mins)
    }
}

/// Format a duration as hours with one decimal place ("2.0h").
pub fn format_hours(minutes: u32) -> String {
    format!("{:.1}h", f64::from(minutes) / 60.0)
}
