//! Error type for plan mutations and form input.

use thiserror::Error;

use crate::submit::MAX_MINUTES;

/// Errors raised by the day plan and the input layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Duration must be a whole number of minutes from 1 to {max}, got '{input}'", max = MAX_MINUTES)]
    InvalidMinutes { input: String },

    #[error("No task at position {index} ({len} planned)")]
    TaskNotFound { index: usize, len: usize },

    #[error("No block at position {index} ({len} planned)")]
    BlockNotFound { index: usize, len: usize },
}
