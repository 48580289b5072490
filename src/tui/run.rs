//! TUI entry point and terminal setup.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tracing::info;

use crate::plan::DayPlan;
use crate::tui::app::App;

/// Initialise the terminal, run the planner until the user quits, then restore the terminal.
pub fn run_tui(plan: DayPlan) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(tasks = plan.tasks.len(), blocks = plan.blocks.len(), "planner started");
    let mut app = App::new(plan);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    let plan = app.plan();
    info!(tasks = plan.tasks.len(), blocks = plan.blocks.len(), "planner closed");

    result
}
