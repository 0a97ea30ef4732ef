//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the guess evaluator. Everything here is
//! pure: no I/O, no randomness, no global state.

mod evaluation;
mod status;
mod word;

pub use evaluation::{Evaluation, evaluate};
pub use status::LetterStatus;
pub use word::{WORD_SIZE, Word, WordError};
