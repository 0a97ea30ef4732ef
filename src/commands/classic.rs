//! Line-mode game
//!
//! Prints the colored board, reads one guess per line, and ends with a
//! win/loss message. Input and output are generic so whole games can be
//! driven from memory.

use crate::game::{GameSession, GameStatus, TurnOutcome};
use crate::output::{print_board, print_debug_secret, print_rejection, print_result, print_welcome};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Options for a line-mode game
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicOptions {
    /// Reveal the answer before the first guess
    pub debug: bool,
}

/// Play `session` to the end
///
/// Returns the final status; `Running` means the player quit or input ended
/// before the game finished.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_classic<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    mut input: R,
    out: &mut W,
    options: ClassicOptions,
) -> Result<GameStatus> {
    print_welcome(out)?;
    if options.debug {
        print_debug_secret(out, session.secret())?;
    }

    while !session.is_over() {
        print_board(out, session.board())?;

        let Some(line) = read_guess(&mut input, out, session.attempts() + 1)? else {
            log::info!("input closed before the game finished");
            break;
        };

        if matches!(line.as_str(), "quit" | "exit") {
            log::info!("player quit after {} attempts", session.attempts());
            break;
        }

        match session.submit_guess(&line) {
            TurnOutcome::Rejected(rejection) => print_rejection(out, &rejection)?,
            TurnOutcome::Accepted { .. } | TurnOutcome::GameOver(_) => {}
        }
    }

    if session.is_over() {
        print_board(out, session.board())?;
    }
    print_result(out, session.status(), session.secret(), session.board())?;
    out.flush().context("failed to flush output")?;

    Ok(session.status())
}

/// Prompt and read one trimmed, lowercased line; `None` on end of input
fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    attempt: usize,
) -> Result<Option<String>> {
    write!(out, "Guess {attempt}, type a 5 letter word: ")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read guess")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordSource;
    use std::io::Cursor;

    fn source() -> WordSource {
        let answers = ["crane", "slate", "level"];
        let guesses = ["evils", "irate", "stare", "adieu"];
        WordSource::from_words(
            answers.iter().map(|w| Word::new(w).unwrap()).collect(),
            guesses.iter().map(|w| Word::new(w).unwrap()).collect(),
        )
    }

    fn play(secret: &str, input: &str, options: ClassicOptions) -> (GameStatus, String) {
        let source = source();
        let mut session = GameSession::new(&source, Word::new(secret).unwrap());
        let mut out = Vec::new();
        let status = run_classic(&mut session, Cursor::new(input), &mut out, options).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game() {
        let (status, text) = play("crane", "slate\nCRANE\n", ClassicOptions::default());

        assert_eq!(status, GameStatus::Won);
        assert!(text.contains("You won"));
        assert!(text.contains("Guess 2"));
    }

    #[test]
    fn losing_game_reveals_answer() {
        let input = "slate\nlevel\nevils\nirate\nstare\nadieu\n";
        let (status, text) = play("crane", input, ClassicOptions::default());

        assert_eq!(status, GameStatus::Lost);
        assert!(text.contains("The answer was Crane"));
    }

    #[test]
    fn invalid_guesses_are_reported_and_free() {
        let input = "abc\nzzzzz\nslate\nlevel\nevils\nirate\nstare\ncrane\n";
        let (status, text) = play("crane", input, ClassicOptions::default());

        assert_eq!(status, GameStatus::Won);
        assert!(text.contains("must have 5 letters"));
        assert!(text.contains("Zzzzz is not a valid guess."));
    }

    #[test]
    fn quitting_early() {
        let (status, text) = play("crane", "slate\nquit\n", ClassicOptions::default());

        assert_eq!(status, GameStatus::Running);
        assert!(text.contains("Game abandoned. The answer was Crane."));
    }

    #[test]
    fn end_of_input_stops_the_game() {
        let (status, _) = play("crane", "slate\n", ClassicOptions::default());
        assert_eq!(status, GameStatus::Running);
    }

    #[test]
    fn debug_reveals_answer_up_front() {
        let (_, text) = play("level", "level\n", ClassicOptions { debug: true });
        let reveal = text.find("The answer is").unwrap();
        let first_prompt = text.find("Guess 1").unwrap();

        assert!(reveal < first_prompt);
        assert!(text.contains("level"));
    }
}
