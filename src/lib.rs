//! A guess-the-number game.
//!
//! [`game::GameController`] owns the state machine. Hosts drive it through
//! intents and only ever see a [`game::SessionView`]; [`driver`] has a terminal
//! host and a bot that plays using [`solver::Solver`].

pub mod driver;
pub mod game;
pub mod solver;
