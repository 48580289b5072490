//! In-memory day plan and its mutation operations.
//!
//! `DayPlan` owns the task list, the block list and the reflection
//! acknowledgment for one session. Records are addressed by position, so
//! removing an item shifts the indexes of everything after it.

use chrono::NaiveTime;
use tracing::{debug, info};

use crate::error::PlanError;
use crate::fields::*;
use crate::reflection::{Reflection, SaveStatus};
use crate::stats::{self, Stats};
use crate::task::{Task, TimeBlock};

/// Tasks, time blocks and reflection status for a single day.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DayPlan {
    pub tasks: Vec<Task>,
    pub blocks: Vec<TimeBlock>,
    pub save_status: SaveStatus,
}

impl DayPlan {
    /// Create a plan pre-populated with the sample day.
    pub fn sample() -> Self {
        let mut plan = DayPlan::default();
        plan.load_sample();
        plan
    }

    /// Append a task to the end of the list.
    pub fn add_task(&mut self, task: Task) {
        debug!(title = %task.title, minutes = task.minutes, energy = %task.energy, "task added");
        self.tasks.push(task);
    }

    /// Append a time block to the end of the list.
    pub fn add_block(&mut self, block: TimeBlock) {
        debug!(title = %block.title, minutes = block.minutes, kind = %block.kind, "block added");
        self.blocks.push(block);
    }

    /// Remove and return the task at `index`.
    pub fn remove_task(&mut self, index: usize) -> Result<Task, PlanError> {
        if index >= self.tasks.len() {
            debug!(index, len = self.tasks.len(), "task removal out of range");
            return Err(PlanError::TaskNotFound { index, len: self.tasks.len() });
        }
        let task = self.tasks.remove(index);
        debug!(index, title = %task.title, "task removed");
        Ok(task)
    }

    /// Remove and return the time block at `index`.
    pub fn remove_block(&mut self, index: usize) -> Result<TimeBlock, PlanError> {
        if index >= self.blocks.len() {
            debug!(index, len = self.blocks.len(), "block removal out of range");
            return Err(PlanError::BlockNotFound { index, len: self.blocks.len() });
        }
        let block = self.blocks.remove(index);
        debug!(index, title = %block.title, "block removed");
        Ok(block)
    }

    /// Flip the completion flag of the task at `index`, returning the new value.
    pub fn toggle_done(&mut self, index: usize) -> Result<bool, PlanError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(PlanError::TaskNotFound { index, len })?;
        task.done = !task.done;
        debug!(index, done = task.done, "task toggled");
        Ok(task.done)
    }

    /// Empty both lists and forget any reflection acknowledgment.
    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.blocks.clear();
        self.save_status = SaveStatus::NotSaved;
        info!("day reset");
    }

    /// Replace the plan with the canonical example day.
    pub fn load_sample(&mut self) {
        self.clear_all();

        self.add_task(
            Task::new("Client strategy deck", 90, Energy::High, Priority::new("1")).with_done(true),
        );
        self.add_task(Task::new("Weekly metrics review", 45, Energy::Medium, Priority::new("2")));
        self.add_task(
            Task::new("Inbox cleanup", 30, Energy::Low, Priority::new("3")).with_done(true),
        );

        self.add_block(TimeBlock::new("Deep work sprint", 120, BlockKind::Focus));
        self.add_block(TimeBlock::new("Team sync", 45, BlockKind::Meeting));
        self.add_block(TimeBlock::new("Walk + reset", 30, BlockKind::Recovery));

        info!("sample day loaded");
    }

    /// Record a reflection save at the given time and return the acknowledgment.
    pub fn save_reflection(&mut self, reflection: &Reflection, now: NaiveTime) -> SaveStatus {
        self.save_status = reflection.save(now);
        debug!(status = %self.save_status, "reflection saved");
        self.save_status
    }

    /// Recompute statistics for the current lists.
    pub fn stats(&self) -> Stats {
        stats::compute(&self.tasks, &self.blocks)
    }
}
