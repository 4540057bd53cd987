use log::{debug, info};

pub use range::{GameRange, RangeError, DEFAULT_MAX, DEFAULT_MIN};
pub use sampler::{RngSampler, Sampler};
pub use state::{Feedback, GameSession, Phase, SessionView};

mod range;
mod sampler;
mod state;
#[cfg(test)]
mod tests;

/// Owns the current session and applies intents to it.
///
/// Hosts only ever see a [`SessionView`], so the target stays hidden.
#[derive(Debug)]
pub struct GameController<S: Sampler = RngSampler> {
    session: GameSession,
    sampler: S,
}

impl GameController {
    /// A controller drawing targets from the thread-local RNG.
    pub fn new(range: GameRange) -> Self {
        GameController::with_sampler(range, RngSampler::default())
    }
}

impl Default for GameController {
    fn default() -> Self {
        GameController::new(GameRange::default())
    }
}

impl<S: Sampler> GameController<S> {
    pub fn with_sampler(range: GameRange, sampler: S) -> Self {
        GameController {
            session: GameSession::new(range),
            sampler,
        }
    }

    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn range(&self) -> GameRange {
        self.session.range()
    }

    pub fn start(&mut self) -> SessionView {
        self.session = self.session.start(&mut self.sampler);
        debug!("Started game in range {:?}", self.session.range());
        self.view()
    }

    pub fn pause(&mut self) -> SessionView {
        self.apply("pause", GameSession::pause)
    }

    pub fn resume(&mut self) -> SessionView {
        self.apply("resume", GameSession::resume)
    }

    pub fn submit_guess(&mut self, raw: &str) -> SessionView {
        let before = self.session.phase();
        let view = self.apply("guess", |session| session.submit_guess(raw));
        if before == Phase::Playing {
            match view.feedback {
                Feedback::Correct => info!("Guessed {:?} after {} misses", raw, view.attempts),
                Feedback::Invalid => debug!("Unparseable guess {:?} counted as a miss", raw),
                _ => {}
            }
        }
        view
    }

    pub fn reset(&mut self) -> SessionView {
        self.session = self.session.reset();
        debug!("Reset game");
        self.view()
    }

    /// Swap in the session produced by `transition`, logging intents that had no effect.
    fn apply<F>(&mut self, intent: &str, transition: F) -> SessionView
    where
        F: FnOnce(&GameSession) -> GameSession,
    {
        let next = transition(&self.session);
        if next == self.session {
            debug!("Ignored {} while {}", intent, self.session.phase());
        } else {
            debug!(
                "{}: {} -> {}, attempts {}",
                intent,
                self.session.phase(),
                next.phase(),
                next.attempts()
            );
        }
        self.session = next;
        self.view()
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &GameSession {
        &self.session
    }
}
