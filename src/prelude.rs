//! Commonly used types and utilities for ease of import.

pub use crate::{
    play_round, run_session, select_range, CapturedOutput, ConsoleError, GameConfig, LineSink,
    LineSource, Range, Round, ScriptedInput, ScriptedSecrets, SecretSource, StdinSource,
    StdoutSink,
};
