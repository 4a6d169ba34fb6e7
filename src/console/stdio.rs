use std::io::{self, BufRead, Write};

use crate::common::ConsoleError;

use super::{LineSink, LineSource};

/// Reads lines from any buffered reader; `StdinSource::stdin()` for the terminal.
pub struct StdinSource<R> {
    reader: R,
}

impl StdinSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> StdinSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StdinSource<R> {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::Closed);
        }
        // undecodable bytes become U+FFFD and fail parsing like any other bad text
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Writes to any writer; prompts stay on the same line as the answer.
pub struct StdoutSink<W> {
    writer: W,
}

impl StdoutSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for StdoutSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.writer, "{} ", text)?;
        self.writer.flush()?;
        Ok(())
    }
}
