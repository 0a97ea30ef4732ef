//! Display functions for the line-mode game

use super::formatters::{capitalized, display_word, render_turn, share_grid};
use crate::core::Word;
use crate::game::{GameStatus, MAX_ATTEMPTS, Turn};
use crate::wordlists::GuessRejection;
use colored::Colorize;
use std::io::{self, Write};

const RULE: &str = "----------------------------------------";

/// Print the opening banner
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to Wordle, try me".bright_cyan().bold())?;
    writeln!(
        out,
        "Guess the hidden 5-letter word in {MAX_ATTEMPTS} tries. Type 'quit' to give up."
    )
}

/// Reveal the secret before play (debug mode)
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_debug_secret<W: Write>(out: &mut W, secret: &Word) -> io::Result<()> {
    writeln!(out, "{} {}", "[debug] The answer is".bright_black(), secret)
}

/// Print every guess so far between two rules
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, board: &[Turn]) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    for turn in board {
        writeln!(out, "{}", render_turn(turn))?;
    }
    writeln!(out, "{RULE}")
}

/// Explain why a guess was refused
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_rejection<W: Write>(out: &mut W, rejection: &GuessRejection) -> io::Result<()> {
    let message = match rejection {
        GuessRejection::WrongLength(_) => "The word must have 5 letters.".to_string(),
        GuessRejection::NotInWordList(word) => {
            format!("{} is not a valid guess.", capitalized(word))
        }
    };
    writeln!(out, "{}", message.red())
}

/// Print the end-of-game message and the share grid
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_result<W: Write>(
    out: &mut W,
    status: GameStatus,
    secret: &Word,
    board: &[Turn],
) -> io::Result<()> {
    match status {
        GameStatus::Won => {
            writeln!(out, "{}", "You won, congrats!".green().bold())?;
            writeln!(out, "Solved in {}/{MAX_ATTEMPTS}", board.len())?;
        }
        GameStatus::Lost => {
            writeln!(
                out,
                "{}",
                format!(
                    "You lost. The answer was {}. Try again",
                    display_word(secret)
                )
                .red()
                .bold()
            )?;
        }
        GameStatus::Running => {
            writeln!(out, "Game abandoned. The answer was {}.", display_word(secret))?;
        }
    }

    if !board.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", share_grid(board))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn board(secret: &Word, guesses: &[&str]) -> Vec<Turn> {
        guesses
            .iter()
            .map(|g| {
                let guess = Word::new(g).unwrap();
                let evaluation = evaluate(secret, &guess);
                Turn { guess, evaluation }
            })
            .collect()
    }

    #[test]
    fn board_is_framed_by_rules() {
        let secret = Word::new("crane").unwrap();
        let text = render(|out| print_board(out, &board(&secret, &["slate", "crane"])));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[3], RULE);
    }

    #[test]
    fn rejection_messages() {
        let text = render(|out| print_rejection(out, &GuessRejection::WrongLength(3)));
        assert!(text.contains("must have 5 letters"));

        let text = render(|out| {
            print_rejection(out, &GuessRejection::NotInWordList("zzzzz".to_string()))
        });
        assert!(text.contains("Zzzzz is not a valid guess."));
    }

    #[test]
    fn loss_reveals_secret() {
        let secret = Word::new("level").unwrap();
        let turns = board(&secret, &["crane"]);
        let text = render(|out| print_result(out, GameStatus::Lost, &secret, &turns));

        assert!(text.contains("The answer was Level"));
        assert!(text.contains("⬜⬜⬜⬜🟨"));
    }

    #[test]
    fn win_reports_attempts() {
        let secret = Word::new("crane").unwrap();
        let turns = board(&secret, &["slate", "crane"]);
        let text = render(|out| print_result(out, GameStatus::Won, &secret, &turns));

        assert!(text.contains("You won"));
        assert!(text.contains("Solved in 2/6"));
        assert!(!text.contains("Crane"));
    }
}
