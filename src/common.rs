//! Error types shared by the range selector, the guess loop and the console.

use core::fmt;

/// Reasons a custom interval is rejected. Always recovered by falling back
/// to the default range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Splitting on the delimiter did not give exactly two parts.
    WrongPartCount(usize),
    /// A bound is not an integer.
    NotAnInteger(String),
    /// The lower bound is not strictly below the upper bound.
    NotIncreasing { min: i64, max: i64 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::WrongPartCount(n) => {
                write!(f, "expected two bounds separated by '-', found {} part(s)", n)
            }
            RangeError::NotAnInteger(s) => write!(f, "'{}' is not a whole number", s),
            RangeError::NotIncreasing { min, max } => {
                write!(f, "{} must be smaller than {}", min, max)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// A guess that is not an integer. Does not count as an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    NotAnInteger(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::NotAnInteger(s) => write!(f, "'{}' is not a whole number", s),
        }
    }
}

impl std::error::Error for GuessError {}

/// Failures of the underlying line source or sink.
#[derive(Debug)]
pub enum ConsoleError {
    /// The input stream reached end-of-file.
    Closed,
    Io(std::io::Error),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Closed => write!(f, "input stream closed"),
            ConsoleError::Io(e) => write!(f, "console I/O error: {}", e),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Closed => None,
            ConsoleError::Io(e) => Some(e),
        }
    }
}
