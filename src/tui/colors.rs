//! Color constants for the terminal user interface.

use ratatui::style::Color;

use crate::fields::{BlockKind, Energy};

/// Used for focus blocks and high-energy tasks
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
/// Used for meetings and medium-energy tasks
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for the confirmation dialog
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Used for recovery blocks
pub const DARK_PURPLE: Color = Color::Rgb(86, 60, 92);
/// Used for low-energy tasks
pub const SLATE: Color = Color::Rgb(90, 110, 130);

pub fn energy_color(energy: Energy) -> Color {
    match energy {
        Energy::High => DARK_GREEN,
        Energy::Medium => GOLD,
        Energy::Low => SLATE,
    }
}

pub fn block_color(kind: BlockKind) -> Color {
    match kind {
        BlockKind::Focus => DARK_GREEN,
        BlockKind::Meeting => GOLD,
        BlockKind::Recovery => DARK_PURPLE,
    }
}

/// Foreground that stays readable on top of `bg`.
pub fn text_on(bg: Color) -> Color {
    match bg {
        GOLD => Color::Rgb(20, 20, 20),
        _ => Color::White,
    }
}
