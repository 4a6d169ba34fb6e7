//! The replay loop around rounds.

use crate::common::ConsoleError;
use crate::config::GameConfig;
use crate::console::{LineSink, LineSource};
use crate::game::{play_round, RoundOutcome};
use crate::range::select_range;
use crate::rng::SecretSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Ended,
}

/// `true` only for `y` or `yes`, in any case, ignoring surrounding whitespace.
pub fn is_affirmative(reply: &str) -> bool {
    let reply = reply.trim().to_lowercase();
    reply == "y" || reply == "yes"
}

/// Run rounds until the player declines to play again.
///
/// Each round starts from `config.default_range` unless the player enters a
/// custom interval for that round. Returns the outcome of every round played.
pub fn run_session<S, I, O>(
    config: &GameConfig,
    source: &mut S,
    input: &mut I,
    output: &mut O,
) -> Result<Vec<RoundOutcome>, ConsoleError>
where
    S: SecretSource + ?Sized,
    I: LineSource + ?Sized,
    O: LineSink + ?Sized,
{
    let default = config.default_range;
    let mut outcomes = Vec::new();
    let mut state = SessionState::Playing;

    output.write_line("Welcome to the number guessing game!")?;
    while state == SessionState::Playing {
        output.write_line(&format!(
            "You can enter your own interval (e.g., '1-50') or press Enter for the default interval ({}-{}).",
            default.min(),
            default.max()
        ))?;
        output.prompt("Your interval choice:")?;
        let choice = select_range(&input.read_line()?, default);
        if let Some(e) = &choice.warning {
            output.write_line(&format!(
                "Invalid interval format ({}). Using the default interval {}-{}.",
                e,
                default.min(),
                default.max()
            ))?;
        }

        outcomes.push(play_round(choice.range, source, input, output)?);

        output.prompt("Do you want to play again? (y/n):")?;
        state = match input.read_line() {
            Ok(reply) if is_affirmative(&reply) => SessionState::Playing,
            Ok(_) => SessionState::Ended,
            Err(ConsoleError::Closed) => {
                log::debug!("input closed at replay prompt");
                SessionState::Ended
            }
            Err(e) => return Err(e),
        };
    }

    output.write_line("Thanks for playing. Goodbye!")?;
    log::debug!("session ended after {} round(s)", outcomes.len());
    Ok(outcomes)
}
