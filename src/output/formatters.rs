//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Word};
use crate::game::Turn;
use colored::{Color, ColoredString, Colorize};

/// Colors for one letter tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    pub background: Color,
    /// `None` keeps the terminal's default text color
    pub foreground: Option<Color>,
}

/// Rendering table: status to tile colors
#[must_use]
pub const fn tile_style(status: LetterStatus) -> TileStyle {
    match status {
        LetterStatus::Absent => TileStyle {
            background: Color::Black,
            foreground: None,
        },
        LetterStatus::Present => TileStyle {
            background: Color::Yellow,
            foreground: Some(Color::Black),
        },
        LetterStatus::Exact => TileStyle {
            background: Color::Green,
            foreground: Some(Color::Black),
        },
    }
}

/// One colored letter
#[must_use]
pub fn render_tile(letter: u8, status: LetterStatus) -> ColoredString {
    let style = tile_style(status);
    let text = (letter as char).to_string().on_color(style.background);
    match style.foreground {
        Some(fg) => text.color(fg),
        None => text,
    }
}

/// A guess as space-separated colored tiles
#[must_use]
pub fn render_turn(turn: &Turn) -> String {
    turn.guess
        .chars()
        .iter()
        .zip(turn.evaluation.iter())
        .map(|(&letter, status)| render_tile(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji grid of a finished board, one row per guess
#[must_use]
pub fn share_grid(board: &[Turn]) -> String {
    board
        .iter()
        .map(|turn| turn.evaluation.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// "crane" -> "Crane"
#[must_use]
pub fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Word in the form used by end-of-game messages
#[must_use]
pub fn display_word(word: &Word) -> String {
    capitalized(word.text())
}
