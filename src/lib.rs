mod common;
pub mod config;
pub mod console;
pub mod game;
mod logging;
pub mod prelude;
pub mod range;
pub mod rng;
pub mod session;

pub use common::*;
pub use config::*;
pub use console::{
    in_memory::{CapturedOutput, ScriptedInput},
    stdio::{StdinSource, StdoutSink},
    LineSink, LineSource,
};
pub use game::{describe, parse_guess, play_round, Feedback, Round, RoundOutcome};
pub use logging::{init_logging, level_from};
pub use range::{parse_range, select_range, Range, RangeChoice};
pub use rng::{draw_secret, make_rng, ScriptedSecrets, SecretSource};
pub use session::{is_affirmative, run_session, SessionState};
