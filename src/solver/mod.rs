use log::debug;
use rand::{seq::SliceRandom, thread_rng, Rng};
use std::collections::HashSet;

use crate::game::GameRange;

#[cfg(test)]
mod tests;

/// Ranges up to this size are shuffled up front; wider ones are sampled lazily.
const SHUFFLE_LIMIT: u128 = 1 << 16;

/// Plays the game by guessing every number in the range once, in random order.
///
/// The game gives no higher/lower hints, so this is as good as it gets: a win
/// is guaranteed within `range.len()` guesses.
#[derive(Debug)]
pub struct Solver {
    candidates: Candidates,
}

#[derive(Debug)]
enum Candidates {
    /// Numbers not yet guessed. Guesses are popped from the back.
    Shuffled(Vec<i64>),
    /// Too many numbers to list, so draw at random and skip repeats.
    Sampled {
        range: GameRange,
        guessed: HashSet<i64>,
    },
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            candidates: Candidates::Shuffled(Vec::new()),
        }
    }
}

impl Solver {
    pub fn new(range: GameRange) -> Self {
        let candidates = if range.len() <= SHUFFLE_LIMIT {
            let mut values = (range.min..=range.max).collect::<Vec<_>>();
            values.shuffle(&mut thread_rng());
            Candidates::Shuffled(values)
        } else {
            debug!("Range {:?} too wide to shuffle, sampling guesses", range);
            Candidates::Sampled {
                range,
                guessed: HashSet::new(),
            }
        };
        Solver { candidates }
    }

    /// Produce the next guess. If every number has been tried, return None.
    pub fn next_guess(&mut self) -> Option<String> {
        let guess = match &mut self.candidates {
            Candidates::Shuffled(values) => values.pop()?,
            Candidates::Sampled { range, guessed } => {
                if guessed.len() as u128 >= range.len() {
                    return None;
                }
                let mut rng = thread_rng();
                loop {
                    let value = rng.gen_range(range.min..=range.max);
                    if guessed.insert(value) {
                        break value;
                    }
                }
            }
        };
        debug!("Guessing {}, {} left", guess, self.remaining());
        Some(guess.to_string())
    }

    /// Number of guesses left before the solver gives up.
    pub fn remaining(&self) -> u128 {
        match &self.candidates {
            Candidates::Shuffled(values) => values.len() as u128,
            Candidates::Sampled { range, guessed } => range.len() - guessed.len() as u128,
        }
    }
}
