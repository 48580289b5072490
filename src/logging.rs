//! Tracing subscriber setup.
//!
//! The filter honours `RUST_LOG` and otherwise falls back to a per-target
//! default. The terminal UI owns stdout/stderr, so without a log file its
//! output is discarded.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log output should go.
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Discard,
}

impl<'a> LogTarget<'a> {
    /// Pick a target for the current command.
    pub fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Discard,
            None => LogTarget::Stderr,
        }
    }
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Call once, before any command runs.
pub fn init(target: LogTarget<'_>) -> io::Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(io::stderr)
                .init();
        }
        LogTarget::Discard => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("off"))
                .with_writer(io::sink)
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_target() {
        let path = Path::new("/tmp/dayplan.log");
        assert!(matches!(LogTarget::select(Some(path), true), LogTarget::File(_)));
        assert!(matches!(LogTarget::select(None, true), LogTarget::Discard));
        assert!(matches!(LogTarget::select(None, false), LogTarget::Stderr));
    }
}
