//! Line-oriented player I/O.
//!
//! The game only ever reads whole lines and writes whole lines, so the
//! terminal is reached through these two traits and tests swap in the
//! in-memory implementations.

use crate::common::ConsoleError;

pub trait LineSource {
    /// Next line without its trailing newline. `Err(ConsoleError::Closed)` at end of input.
    fn read_line(&mut self) -> Result<String, ConsoleError>;
}

pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Text shown right before reading input. Defaults to a full line.
    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write_line(text)
    }
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        (**self).read_line()
    }
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        (**self).write_line(line)
    }

    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        (**self).prompt(text)
    }
}

pub mod in_memory;
pub mod stdio;
