use thiserror::Error;

use crate::game::SessionView;

pub mod direct;
pub mod terminal;

/// Defines a host that drives a game through its intents.
pub trait Driver {
    /// Play until the game ends or the player quits, returning the final view.
    fn play(&mut self) -> Result<SessionView, DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("solver ran out of guesses")]
    SolverExhausted,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize session: {0}")]
    Json(#[from] serde_json::Error),
}
