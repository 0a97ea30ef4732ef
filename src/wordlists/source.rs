//! Answer pool and guess dictionary

use super::embedded::{ANSWERS, VALID_GUESSES};
use super::loader::{LoadError, load_from_file, words_from_slice};
use crate::core::{WORD_SIZE, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

/// The answer pool is empty, so no game can start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("answer pool is empty")]
pub struct EmptyPoolError;

/// Why a raw guess was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("The word must have 5 letters (got {0}).")]
    WrongLength(usize),
    #[error("{0} is not a valid guess.")]
    NotInWordList(String),
}

/// Words the player may guess and words that may be picked as the answer
///
/// Both lists are read once and never modified afterwards. Every answer is
/// also a valid guess.
#[derive(Debug, Clone)]
pub struct WordSource {
    answers: Vec<Word>,
    valid_guesses: FxHashSet<Word>,
}

impl WordSource {
    /// Build from in-memory lists
    ///
    /// The valid-guess set is the union of `answers` and `guesses`. An empty
    /// answer pool is allowed here; it surfaces as [`EmptyPoolError`] from
    /// [`WordSource::pick_answer`].
    #[must_use]
    pub fn from_words(answers: Vec<Word>, guesses: Vec<Word>) -> Self {
        let mut valid_guesses: FxHashSet<Word> = guesses.into_iter().collect();
        valid_guesses.extend(answers.iter().cloned());

        Self {
            answers,
            valid_guesses,
        }
    }

    /// Load the answer list and the additional-guess list from files
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if either file is missing, empty, or has an entry
    /// that is not a 5-letter alphabetic word.
    pub fn load(
        answers_path: impl AsRef<Path>,
        valid_guesses_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let answers = load_from_file(answers_path)?;
        let guesses = load_from_file(valid_guesses_path)?;
        let source = Self::from_words(answers, guesses);

        log::info!(
            "loaded {} answers, {} valid guesses",
            source.answer_count(),
            source.guess_count()
        );
        Ok(source)
    }

    /// Word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Same contract as [`WordSource::load`].
    pub fn embedded() -> Result<Self, LoadError> {
        let answers = words_from_slice(ANSWERS, "<embedded answers>")?;
        let guesses = words_from_slice(VALID_GUESSES, "<embedded guesses>")?;
        let source = Self::from_words(answers, guesses);

        log::info!(
            "using embedded lists: {} answers, {} valid guesses",
            source.answer_count(),
            source.guess_count()
        );
        Ok(source)
    }

    /// Check a raw guess and normalize it into a [`Word`]
    ///
    /// Input is trimmed and lowercased before the checks, matching how the
    /// lists were loaded.
    ///
    /// # Errors
    ///
    /// `WrongLength` if the trimmed input is not 5 characters long,
    /// `NotInWordList` otherwise if it is not an accepted guess.
    pub fn check_guess(&self, candidate: &str) -> Result<Word, GuessRejection> {
        let normalized = candidate.trim().to_lowercase();

        let len = normalized.chars().count();
        if len != WORD_SIZE {
            return Err(GuessRejection::WrongLength(len));
        }

        match Word::new(&normalized) {
            Ok(word) if self.valid_guesses.contains(&word) => Ok(word),
            _ => Err(GuessRejection::NotInWordList(normalized)),
        }
    }

    /// True iff `candidate` is 5 letters long and an accepted guess
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::WordSource;
    ///
    /// let source = WordSource::from_words(vec![Word::new("crane").unwrap()], vec![]);
    /// assert!(source.is_valid_guess("CRANE "));
    /// assert!(!source.is_valid_guess("slate"));
    /// assert!(!source.is_valid_guess("cranes"));
    /// ```
    #[must_use]
    pub fn is_valid_guess(&self, candidate: &str) -> bool {
        self.check_guess(candidate).is_ok()
    }

    /// Pick an answer uniformly at random
    ///
    /// Every call draws independently from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if there are no answers.
    pub fn pick_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, EmptyPoolError> {
        self.answers.choose(rng).ok_or(EmptyPoolError)
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.valid_guesses.len()
    }
}
