//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AppState {
    Planner,
    AddTask,
    AddBlock,
    Reflection,
    Help,
    Confirm,
}

/// Input mode for text entry fields.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputMode {
    None,
    Text,
}

/// Which panel of the planner has keyboard focus.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Pane {
    Tasks,
    Blocks,
    Reflection,
}

impl Pane {
    /// Next pane in Tab order.
    pub fn next(self) -> Self {
        match self {
            Pane::Tasks => Pane::Blocks,
            Pane::Blocks => Pane::Reflection,
            Pane::Reflection => Pane::Tasks,
        }
    }

    /// Previous pane in Tab order.
    pub fn prev(self) -> Self {
        match self {
            Pane::Tasks => Pane::Reflection,
            Pane::Blocks => Pane::Tasks,
            Pane::Reflection => Pane::Blocks,
        }
    }
}

/// Destructive actions that need a y/n confirmation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ConfirmAction {
    NewDay,
    LoadSample,
}

impl ConfirmAction {
    pub fn prompt(self) -> &'static str {
        match self {
            ConfirmAction::NewDay => "Start a new day (clears all tasks and blocks)",
            ConfirmAction::LoadSample => "Replace the current plan with the sample day",
        }
    }
}
