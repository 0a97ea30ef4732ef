//! Command implementations

pub mod classic;
pub mod merge;

pub use classic::{ClassicOptions, run_classic};
pub use merge::{merge_lists, run_merge};
