//! Word lists for Wordle
//!
//! Loads the answer pool and the guess dictionary, from files or from the
//! lists embedded at build time.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ANSWERS, ANSWERS_COUNT, VALID_GUESSES, VALID_GUESSES_COUNT};
pub use loader::LoadError;
pub use source::{EmptyPoolError, GuessRejection, WordSource};
