//! Input layer: turns raw form values into validated records.
//!
//! Everything entering the day plan passes through here, so the plan can rely
//! on non-empty titles and positive durations.

use tracing::warn;

use crate::error::PlanError;
use crate::fields::*;
use crate::task::{Task, TimeBlock};

/// Longest accepted duration: one full day.
pub const MAX_MINUTES: u32 = 24 * 60;

/// Trim a title and reject it if nothing is left.
pub fn parse_title(raw: &str) -> Result<String, PlanError> {
    let title = raw.trim();
    if title.is_empty() {
        warn!("rejected empty title");
        return Err(PlanError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Parse a duration in whole minutes. Zero, negative, non-numeric and
/// longer-than-a-day input is rejected.
pub fn parse_minutes(raw: &str) -> Result<u32, PlanError> {
    match raw.trim().parse::<u32>() {
        Ok(minutes) if (1..=MAX_MINUTES).contains(&minutes) => Ok(minutes),
        _ => {
            warn!(input = raw, "rejected duration");
            Err(PlanError::InvalidMinutes { input: raw.trim().to_string() })
        }
    }
}

/// Build a task from form values.
pub fn submit_task(
    title: &str,
    minutes: &str,
    energy: Energy,
    priority: Priority,
) -> Result<Task, PlanError> {
    let title = parse_title(title)?;
    let minutes = parse_minutes(minutes)?;
    Ok(Task::new(title, minutes, energy, priority))
}

/// Build a time block from form values.
pub fn submit_block(title: &str, minutes: &str, kind: BlockKind) -> Result<TimeBlock, PlanError> {
    let title = parse_title(title)?;
    let minutes = parse_minutes(minutes)?;
    Ok(TimeBlock::new(title, minutes, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("45"), Ok(45));
        assert_eq!(parse_minutes(" 90 "), Ok(90));
        assert!(matches!(parse_minutes("0"), Err(PlanError::InvalidMinutes { .. })));
        assert!(matches!(parse_minutes("-5"), Err(PlanError::InvalidMinutes { .. })));
        assert!(matches!(parse_minutes("1.5"), Err(PlanError::InvalidMinutes { .. })));
        assert_eq!(
            parse_minutes("soon"),
            Err(PlanError::InvalidMinutes { input: "soon".to_string() })
        );
        assert!(parse_minutes("").is_err());
    }

    #[test]
    fn test_parse_minutes_caps_at_one_day() {
        assert_eq!(parse_minutes("1440"), Ok(MAX_MINUTES));
        assert_eq!(
            parse_minutes("1441"),
            Err(PlanError::InvalidMinutes { input: "1441".to_string() })
        );
        assert!(matches!(
            submit_task("Marathon", "3000000000", Energy::High, Priority::new("1")),
            Err(PlanError::InvalidMinutes { .. })
        ));
        assert!(submit_block("Offsite", "99999", BlockKind::Meeting).is_err());
    }

    #[test]
    fn test_submit_task_trims_title() {
        let task = submit_task("  Draft agenda ", "30", Energy::Medium, Priority::new("2")).unwrap();
        assert_eq!(task.title, "Draft agenda");
        assert_eq!(task.minutes, 30);
        assert!(!task.done);
    }

    #[test]
    fn test_submit_rejects_blank_title_before_minutes() {
        assert_eq!(
            submit_task("   ", "abc", Energy::High, Priority::new("1")),
            Err(PlanError::EmptyTitle)
        );
        assert_eq!(submit_block("", "30", BlockKind::Focus), Err(PlanError::EmptyTitle));
    }

    #[test]
    fn test_submit_block() {
        let block = submit_block("Lunch walk", "20", BlockKind::Recovery).unwrap();
        assert_eq!(block, TimeBlock::new("Lunch walk", 20, BlockKind::Recovery));
    }
}
