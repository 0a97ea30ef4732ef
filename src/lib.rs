//! Wordle Game
//!
//! A terminal Wordle: a hidden five-letter answer, six guesses, and
//! letter-by-letter feedback with correct handling of repeated letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameSession, GameStatus};
//! use wordle_game::wordlists::WordSource;
//!
//! let source = WordSource::from_words(
//!     vec![Word::new("crane").unwrap()],
//!     vec![Word::new("slate").unwrap()],
//! );
//! let mut game = GameSession::new(&source, Word::new("crane").unwrap());
//!
//! game.submit_guess("slate");
//! game.submit_guess("crane");
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
