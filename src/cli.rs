use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Single-screen daily planner.
/// Nothing is saved: every session starts from an empty day or the sample day.
#[derive(Parser)]
#[command(name = "dayplan", version, about = "Daily planning with focus scoring")]
pub struct Cli {
    /// Append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["dayplan"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_parse_sample_json() {
        let cli = Cli::try_parse_from(["dayplan", "sample", "--json", "--log-file", "x.log"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sample { json: true })));
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
    }
}
