//! Formatting utilities for terminal output

use crate::commands::Scoreboard;
use crate::solver::Turn;

/// Format a turn's answer as 1-based positions
#[must_use]
pub fn format_positions(turn: &Turn) -> String {
    if turn.positions.is_empty() {
        return "absent".to_string();
    }
    turn.positions
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = (value * width).checked_div(max).unwrap_or(width).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score lines shown between rounds
#[must_use]
pub fn format_scores(scores: &Scoreboard) -> [String; 2] {
    [
        format!("Computer score {}", scores.computer),
        format!("Player score   {}", scores.player),
    ]
}
