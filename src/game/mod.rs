//! Game session state machine

mod session;

pub use session::{GameSession, GameStatus, MAX_ATTEMPTS, Turn, TurnOutcome};
