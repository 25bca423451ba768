//! Formatting utilities for terminal output

use crate::core::Board;
use crate::solver::word_points;

/// Render a board as a padded grid, one row per line
///
/// Tiles are capitalised ("qu" becomes "Qu") and left-aligned in cells wide
/// enough for the longest tile.
#[must_use]
pub fn board_grid(board: &Board) -> String {
    let width = board
        .rows()
        .flatten()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(1);

    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|tile| format!("{:<width$}", capitalize(tile)))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Upper-case the first letter of a tile
#[must_use]
pub fn capitalize(tile: &str) -> String {
    let mut chars = tile.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + chars.as_str()
    })
}

/// "word (N pt)" label
#[must_use]
pub fn word_with_points(word: &str) -> String {
    let points = word_points(word);
    let unit = if points == 1 { "pt" } else { "pts" };
    format!("{word} ({points} {unit})")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
