//! A single game: one hidden answer, up to six scored guesses

use crate::core::{Evaluation, LetterStatus, Word, evaluate};
use crate::wordlists::{EmptyPoolError, GuessRejection, WordSource};
use rand::Rng;
use rustc_hash::FxHashMap;

/// Valid guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Result of submitting a raw guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Guess refused; nothing changed and no attempt was used
    Rejected(GuessRejection),
    /// Guess scored and added to the board
    Accepted { turn: Turn, status: GameStatus },
    /// The game had already ended; nothing changed
    GameOver(GameStatus),
}

/// Game state: the secret, the board and the status
///
/// Borrows the word lists; the secret never changes once the session exists.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    source: &'a WordSource,
    secret: Word,
    board: Vec<Turn>,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a game with a known secret
    #[must_use]
    pub fn new(source: &'a WordSource, secret: Word) -> Self {
        Self {
            source,
            secret,
            board: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::Running,
        }
    }

    /// Start a game with an answer drawn from `source`
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if `source` has no answers.
    pub fn start<R: Rng + ?Sized>(
        source: &'a WordSource,
        rng: &mut R,
    ) -> Result<Self, EmptyPoolError> {
        let secret = source.pick_answer(rng)?.clone();
        log::debug!("new game, answer is '{secret}'");
        Ok(Self::new(source, secret))
    }

    /// Submit one raw guess
    ///
    /// Invalid guesses are rejected without consuming an attempt. A valid
    /// guess is scored and appended to the board; an all-`Exact` result wins
    /// at once, and the sixth non-winning guess loses.
    pub fn submit_guess(&mut self, raw: &str) -> TurnOutcome {
        if self.status != GameStatus::Running {
            return TurnOutcome::GameOver(self.status);
        }

        let guess = match self.source.check_guess(raw) {
            Ok(word) => word,
            Err(rejection) => {
                log::debug!("rejected guess {raw:?}: {rejection}");
                return TurnOutcome::Rejected(rejection);
            }
        };

        let evaluation = evaluate(&self.secret, &guess);
        let turn = Turn { guess, evaluation };
        self.board.push(turn.clone());

        self.status = if evaluation.is_win() {
            GameStatus::Won
        } else if self.board.len() >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::Running
        };

        log::debug!(
            "turn {}: {} -> {} ({:?})",
            self.board.len(),
            turn.guess,
            turn.evaluation,
            self.status
        );

        TurnOutcome::Accepted {
            turn,
            status: self.status,
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Running
    }

    #[must_use]
    pub fn board(&self) -> &[Turn] {
        &self.board
    }

    /// Valid guesses made so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.board.len()
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Most informative status seen so far for each guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterStatus> {
        let mut hints = FxHashMap::default();
        for turn in &self.board {
            for (&letter, status) in turn.guess.chars().iter().zip(turn.evaluation.iter()) {
                hints
                    .entry(letter)
                    .and_modify(|best: &mut LetterStatus| *best = (*best).max(status))
                    .or_insert(status);
            }
        }
        hints
    }
}
