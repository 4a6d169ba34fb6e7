//! A single round: the hidden secret, the attempt counter, and the guess loop.

use core::cmp::Ordering;
use core::fmt;

use serde::Serialize;

use crate::common::{ConsoleError, GuessError};
use crate::console::{LineSink, LineSource};
use crate::range::Range;
use crate::rng::{draw_secret, SecretSource};

/// Answer to one valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooLow,
    TooHigh,
    Correct { secret: i64, attempts: u32 },
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub range: Range,
    pub secret: i64,
    pub attempts: u32,
}

/// Round state. The secret is fixed at construction and never changes.
pub struct Round {
    range: Range,
    secret: i64,
    attempts: u32,
    finished: bool,
}

impl Round {
    /// Start a round, drawing the secret uniformly from `range`.
    pub fn new<S: SecretSource + ?Sized>(range: Range, source: &mut S) -> Self {
        Self {
            range,
            secret: draw_secret(source, range),
            attempts: 0,
            finished: false,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    /// Valid guesses submitted so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether `guess` lies inside the round's range. Guesses outside it are
    /// still accepted by [`Round::submit`].
    pub fn contains(&self, guess: i64) -> bool {
        self.range.contains(guess)
    }

    /// Score a guess. Every call before the secret is found counts as one
    /// attempt, including guesses outside the range. Once finished, the
    /// round keeps answering `Correct` without counting further.
    pub fn submit(&mut self, guess: i64) -> Feedback {
        if self.finished {
            return self.correct();
        }
        self.attempts = self.attempts.saturating_add(1);
        match guess.cmp(&self.secret) {
            Ordering::Less => Feedback::TooLow,
            Ordering::Greater => Feedback::TooHigh,
            Ordering::Equal => {
                self.finished = true;
                self.correct()
            }
        }
    }

    /// `None` until the secret has been guessed.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.finished.then_some(RoundOutcome {
            range: self.range,
            secret: self.secret,
            attempts: self.attempts,
        })
    }

    fn correct(&self) -> Feedback {
        Feedback::Correct {
            secret: self.secret,
            attempts: self.attempts,
        }
    }
}

impl fmt::Debug for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Round")
            .field("range", &self.range)
            .field("secret", &"<hidden>")
            .field("attempts", &self.attempts)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Parse one line of guess text, ignoring surrounding whitespace.
pub fn parse_guess(raw: &str) -> Result<i64, GuessError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| GuessError::NotAnInteger(raw.to_string()))
}

/// Player-facing text for a piece of feedback.
pub fn describe(feedback: Feedback, range: Range) -> String {
    match feedback {
        Feedback::TooLow => format!(
            "Too low! Try a number between {} and {}.",
            range.min(),
            range.max()
        ),
        Feedback::TooHigh => format!(
            "Too high! Try a number between {} and {}.",
            range.min(),
            range.max()
        ),
        Feedback::Correct { secret, attempts } => format!(
            "Correct! You guessed the number {} in {} {}!",
            secret,
            attempts,
            if attempts == 1 { "attempt" } else { "attempts" }
        ),
    }
}

/// Play one round to completion and return the number of valid guesses.
///
/// Loops until the secret is guessed; only a console failure ends it early.
pub fn play_round<S, I, O>(
    range: Range,
    source: &mut S,
    input: &mut I,
    output: &mut O,
) -> Result<RoundOutcome, ConsoleError>
where
    S: SecretSource + ?Sized,
    I: LineSource + ?Sized,
    O: LineSink + ?Sized,
{
    let mut round = Round::new(range, source);
    log::debug!("round started in {}", range);
    output.write_line(&format!(
        "I'm thinking of a number between {} and {}. Try to guess it.",
        range.min(),
        range.max()
    ))?;

    loop {
        output.prompt("Your guess:")?;
        let line = input.read_line()?;
        let guess = match parse_guess(&line) {
            Ok(g) => g,
            Err(e) => {
                log::debug!("ignored guess: {}", e);
                output.write_line("Invalid input. Please enter a number.")?;
                continue;
            }
        };
        let feedback = round.submit(guess);
        output.write_line(&describe(feedback, range))?;
        if let Some(outcome) = round.outcome() {
            log::debug!("round finished after {} attempt(s)", outcome.attempts);
            return Ok(outcome);
        }
    }
}
