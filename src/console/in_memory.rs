use std::collections::VecDeque;

use crate::common::ConsoleError;

use super::{LineSink, LineSource};

/// Feeds pre-recorded lines, then reports the stream as closed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.lines.pop_front().ok_or(ConsoleError::Closed)
    }
}

/// Records everything written, prompts included.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    lines: Vec<String>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines containing `needle`, in order.
    pub fn matching<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(move |l| l.contains(needle))
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.matching(needle).next().is_some()
    }
}

impl LineSink for CapturedOutput {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
