//! Terminal output formatting
//!
//! Colored tiles, the board and end-of-game messages for line mode.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_debug_secret, print_rejection, print_result, print_welcome};
