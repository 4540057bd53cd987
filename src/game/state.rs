use serde::Serialize;
use strum::{Display, EnumIter};

use super::{GameRange, Sampler};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No game in progress. The target has not been drawn.
    #[default]
    NotStarted,
    /// Accepting guesses.
    Playing,
    /// Guesses are ignored until resumed.
    Paused,
    /// The last guess matched the target. Terminal until reset or restart.
    Won,
}

/// Result of the most recent guess in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// No guess has been made yet.
    #[default]
    None,
    /// A number that isn't the target.
    Miss,
    /// Text that isn't a number. Counted as a miss.
    Invalid,
    /// The target.
    Correct,
}

/// Game state. Every intent produces a new session rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) phase: Phase,
    /// Secret number. Only drawn when a game starts.
    pub(super) target: Option<i64>,
    /// Raw text of the last guess, parseable or not.
    pub(super) current_guess: Option<String>,
    /// Guesses that didn't match.
    pub(super) attempts: u32,
    pub(super) feedback: Feedback,
    pub(super) range: GameRange,
}

/// What a host is allowed to see of a session. Never includes the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub attempts: u32,
    pub current_guess: Option<String>,
    pub feedback: Feedback,
    pub range: GameRange,
}

impl GameSession {
    /// A session that hasn't started yet.
    pub fn new(range: GameRange) -> Self {
        GameSession {
            phase: Phase::NotStarted,
            target: None,
            current_guess: None,
            attempts: 0,
            feedback: Feedback::None,
            range,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn range(&self) -> GameRange {
        self.range
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            attempts: self.attempts,
            current_guess: self.current_guess.clone(),
            feedback: self.feedback,
            range: self.range,
        }
    }

    /// Begin a fresh game from any phase, drawing a new target.
    pub fn start<S: Sampler + ?Sized>(&self, sampler: &mut S) -> Self {
        let target = self
            .range
            .clamp(sampler.sample_int(self.range.min, self.range.max));
        GameSession {
            phase: Phase::Playing,
            target: Some(target),
            ..GameSession::new(self.range)
        }
    }

    pub fn pause(&self) -> Self {
        match self.phase {
            Phase::Playing => GameSession {
                phase: Phase::Paused,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    pub fn resume(&self) -> Self {
        match self.phase {
            Phase::Paused => GameSession {
                phase: Phase::Playing,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    /// Evaluate a guess. Outside of `Playing` the guess is dropped and the
    /// session is returned unchanged.
    pub fn submit_guess(&self, raw: &str) -> Self {
        if self.phase != Phase::Playing {
            return self.clone();
        }

        let guess = raw.trim().parse::<i64>().ok();
        let current_guess = Some(raw.to_owned());
        match guess {
            Some(value) if Some(value) == self.target => GameSession {
                phase: Phase::Won,
                current_guess,
                feedback: Feedback::Correct,
                ..self.clone()
            },
            Some(_) => GameSession {
                current_guess,
                attempts: self.attempts.saturating_add(1),
                feedback: Feedback::Miss,
                ..self.clone()
            },
            None => GameSession {
                current_guess,
                attempts: self.attempts.saturating_add(1),
                feedback: Feedback::Invalid,
                ..self.clone()
            },
        }
    }

    /// Throw the session away. The next target is drawn on the next start.
    pub fn reset(&self) -> Self {
        GameSession::new(self.range)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(GameRange::default())
    }
}
