//! Command implementations for the CLI interface.
//!
//! `ui` launches the planner, `sample` prints the canonical example day and
//! `completions` emits shell completion scripts.

use std::io::{self, Write};

use clap::Subcommand;
use clap_complete::{generate, Shell};
use serde::Serialize;

use crate::plan::DayPlan;
use crate::reflection::SaveStatus;
use crate::stats::{format_minutes, Stats};
use crate::task::{Task, TimeBlock};
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive planner (the default).
    Ui {
        /// Start from the sample day instead of an empty one.
        #[arg(long)]
        sample: bool,
    },

    /// Print the sample day with its statistics.
    Sample {
        /// Emit a JSON snapshot instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Everything the presentation layer receives after a mutation.
#[derive(Serialize)]
pub struct Snapshot<'a> {
    pub tasks: &'a [Task],
    pub blocks: &'a [TimeBlock],
    pub stats: Stats,
    pub reflection: SaveStatus,
}

impl<'a> Snapshot<'a> {
    pub fn of(plan: &'a DayPlan) -> Self {
        Snapshot {
            tasks: &plan.tasks,
            blocks: &plan.blocks,
            stats: plan.stats(),
            reflection: plan.save_status,
        }
    }
}

/// Launch the terminal user interface.
pub fn cmd_ui(sample: bool) {
    let plan = if sample { DayPlan::sample() } else { DayPlan::default() };
    if let Err(e) = run_tui(plan) {
        tracing::error!(error = %e, "terminal UI failed");
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Print the sample day as tables or JSON.
pub fn cmd_sample(json: bool) {
    let plan = DayPlan::sample();
    let mut out = io::stdout().lock();
    let result = if json {
        serde_json::to_writer_pretty(&mut out, &Snapshot::of(&plan))
            .map_err(io::Error::from)
            .and_then(|_| writeln!(out))
    } else {
        write_report(&plan, &mut out)
    };
    if let Err(e) = result {
        eprintln!("Failed to write report: {e}");
        std::process::exit(1);
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}

/// Write task table, block table and stats summary.
pub fn write_report(plan: &DayPlan, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{:<4} {:<6} {:<8} {:<4} {:<5} {}", "#", "Time", "Energy", "Pri", "Done", "Task")?;
    for (i, t) in plan.tasks.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<6} {:<8} {:<4} {:<5} {}",
            i + 1,
            format_minutes(t.minutes),
            t.energy,
            t.priority.to_string(),
            if t.done { "yes" } else { "-" },
            truncate(&t.title, 40)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{:<4} {:<6} {:<9} {}", "#", "Time", "Type", "Block")?;
    for (i, b) in plan.blocks.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<6} {:<9} {}",
            i + 1,
            format_minutes(b.minutes),
            b.kind,
            truncate(&b.title, 40)
        )?;
    }
    writeln!(out)?;

    let stats = plan.stats();
    writeln!(out, "Focus score  {}  ({})", stats.focus_score, stats.help)?;
    writeln!(out, "Intentions   {}", stats.intentions)?;
    writeln!(out, "Deep work    {}", stats.deep_work_display())?;
    writeln!(out, "Recovery     {}", stats.recovery_display())?;
    Ok(())
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("a longer title", 6), "a lon…");
    }

    #[test]
    fn test_write_report_sample_day() {
        let plan = DayPlan::sample();
        let mut buf = Vec::new();
        write_report(&plan, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Client strategy deck"));
        assert!(text.contains("1h 30m"));
        assert!(text.contains("Walk + reset"));
        assert!(text.contains("Focus score  76  (2h completed today.)"));
        assert!(text.contains("Deep work    2.0h"));
        assert!(text.contains("Recovery     0.5h"));
    }

    #[test]
    fn test_snapshot_json_exposes_block_focus() {
        let plan = DayPlan::sample();
        let json = serde_json::to_value(Snapshot::of(&plan)).unwrap();

        assert_eq!(json["stats"]["focus_score"], 76);
        assert_eq!(json["stats"]["block_focus"].as_f64().map(f64::round), Some(153.0));
        assert_eq!(json["stats"]["help"]["state"], "completed");
        assert_eq!(json["tasks"][1]["energy"], "medium");
        assert_eq!(json["blocks"][0]["type"], "focus");
        assert_eq!(json["reflection"], "not-saved");
    }
}
