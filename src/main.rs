//! # dayplan - Daily Planning TUI
//!
//! A single-screen daily planner for the terminal. Log the tasks you intend to do
//! today and the time blocks you have set aside, tick tasks off as you go, and
//! watch the focus score follow.
//!
//! ## Key Features
//!
//! - **Tasks**: duration, energy level (high / medium / low), priority label and a done flag
//! - **Time blocks**: focus, meeting and recovery allocations
//! - **Focus score**: completed energy-weighted minutes as a percentage of planned ones
//! - **Deep work / recovery**: hours in focus and recovery blocks
//! - **Reflection**: wins, blockers and next steps with a save acknowledgment
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the planner on an empty day
//! dayplan
//!
//! # Or start from the sample day
//! dayplan ui --sample
//!
//! # Print the sample day and its statistics
//! dayplan sample
//! dayplan sample --json
//! ```
//!
//! ## Focus Score
//!
//! Each task contributes `minutes × weight` where high = 1.0, medium = 0.7 and
//! low = 0.4. The score is the done share of that total, rounded to a whole
//! percent. Time blocks do not affect the score.
//!
//! Nothing is written to disk: quitting discards the day. Pass `--log-file` to
//! capture tracing output (filtered by `RUST_LOG`).

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod logging;
pub mod plan;
pub mod reflection;
pub mod stats;
pub mod submit;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod forms;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use logging::LogTarget;

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Ui { sample: false });

    let interactive = matches!(command, Commands::Ui { .. });
    if let Err(e) = logging::init(LogTarget::select(cli.log_file.as_deref(), interactive)) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    match command {
        Commands::Ui { sample } => cmd_ui(sample),
        Commands::Sample { json } => cmd_sample(json),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}
