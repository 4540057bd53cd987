use log::{debug, warn};
use serde::Deserialize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{Driver, DriverError};
use crate::game::{Feedback, GameController, Phase, Sampler, SessionView};


const COMMANDS: &str = "start, pause, resume, guess <number>, reset, status, quit";

/// Commands a player can type. The first word of each line is parsed as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Start,
    Pause,
    Resume,
    /// Submit the rest of the line as a guess.
    Guess,
    Reset,
    /// Print the current view as JSON.
    Status,
    Quit,
}

/// A line-oriented host for human players.
pub struct TerminalDriver<R: BufRead, W: Write, S: Sampler> {
    game: GameController<S>,
    input: R,
    output: W,
}

impl<S: Sampler> TerminalDriver<StdinLock<'static>, Stdout, S> {
    /// Play on the process's stdin and stdout.
    pub fn stdio(game: GameController<S>) -> Self {
        TerminalDriver::new(game, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write, S: Sampler> TerminalDriver<R, W, S> {
    pub fn new(game: GameController<S>, input: R, output: W) -> Self {
        TerminalDriver {
            game,
            input,
            output,
        }
    }

    /// Consume the driver, returning the output it wrote to.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Apply one line of input. Returns false once the player quits.
    fn handle_line(&mut self, line: &str) -> Result<bool, DriverError> {
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        let command = match serde_plain::from_str::<Command>(&word.to_lowercase()) {
            Ok(command) => command,
            // A bare number is a guess
            Err(_) if line.parse::<i64>().is_ok() => Command::Guess,
            Err(e) => {
                debug!("Unknown command {:?}: {}", word, e);
                writeln!(
                    self.output,
                    "Unknown command {:?}. Try one of: {}.",
                    word, COMMANDS
                )?;
                return Ok(true);
            }
        };

        let view = match command {
            Command::Start => self.game.start(),
            Command::Pause => self.game.pause(),
            Command::Resume => self.game.resume(),
            Command::Guess if line.parse::<i64>().is_ok() => self.game.submit_guess(line),
            Command::Guess => self.game.submit_guess(rest),
            Command::Reset => self.game.reset(),
            Command::Status => {
                let json = serde_json::to_string(&self.game.view())?;
                writeln!(self.output, "{}", json)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        };
        write!(self.output, "{}", render(&view))?;
        Ok(true)
    }
}

impl<R: BufRead, W: Write, S: Sampler> Driver for TerminalDriver<R, W, S> {
    fn play(&mut self) -> Result<SessionView, DriverError> {
        writeln!(self.output, "Number Guessing Game")?;
        write!(self.output, "{}", render(&self.game.view()))?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let keep_playing = self.handle_line(trimmed).map_err(|e| {
                warn!("Failed to handle {:?}: {}", trimmed, e);
                e
            })?;
            self.output.flush()?;
            if !keep_playing {
                break;
            }
        }
        Ok(self.game.view())
    }
}

/// Describe a view to the player.
pub fn render(view: &SessionView) -> String {
    let mut text = String::new();
    match view.phase {
        Phase::NotStarted => {
            text.push_str(&format!(
                "Try to guess the number between {} and {}\n",
                view.range.min, view.range.max
            ));
            text.push_str("Type `start` to begin.\n");
        }
        Phase::Playing => {
            match (view.feedback, view.current_guess.as_deref()) {
                (Feedback::Miss, Some(guess)) => {
                    text.push_str(&format!("{} is wrong, try again.\n", guess.trim()))
                }
                (Feedback::Invalid, Some(guess)) => {
                    text.push_str(&format!("{:?} is not a number.\n", guess))
                }
                _ => text.push_str("Enter your guess.\n"),
            }
            text.push_str(&format!("Attempts: {}\n", view.attempts));
        }
        Phase::Paused => {
            text.push_str("Paused. Type `resume` to keep guessing.\n");
            text.push_str(&format!("Attempts: {}\n", view.attempts));
        }
        Phase::Won => {
            text.push_str("Game Over!\n");
            text.push_str(&format!(
                "You guessed the number in {} attempts.\n",
                view.attempts
            ));
            text.push_str("Type `reset` to try again.\n");
        }
    }
    text
}
