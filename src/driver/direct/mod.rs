use log::info;

use super::{Driver, DriverError};
use crate::{
    game::{GameController, Phase, Sampler, SessionView},
    solver::Solver,
};

/// A driver for direct interaction with a `GameController`.
/// The solver plays a single game from start to win.
pub struct DirectDriver<S: Sampler> {
    /// The game itself.
    game: GameController<S>,
    /// The solver which will attempt to play the game.
    solver: Solver,
}

impl<S: Sampler> DirectDriver<S> {
    pub fn new(game: GameController<S>) -> Self {
        let solver = Solver::new(game.range());
        DirectDriver { game, solver }
    }
}

impl<S: Sampler> Driver for DirectDriver<S> {
    fn play(&mut self) -> Result<SessionView, DriverError> {
        let mut view = self.game.start();
        while view.phase != Phase::Won {
            let guess = self
                .solver
                .next_guess()
                .ok_or(DriverError::SolverExhausted)?;
            view = self.game.submit_guess(&guess);
            info!("Guessed {}: {}, attempts: {}", guess, view.feedback, view.attempts);
        }
        info!("Game complete!");
        Ok(view)
    }
}
