//! Guessing interval and the parser for player-supplied intervals.

use core::fmt;

use serde::Serialize;

use crate::common::RangeError;
use crate::config::RANGE_DELIMITER;

/// Inclusive interval the secret is drawn from. `min < max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    /// Build a range, rejecting empty or inverted bounds.
    pub fn new(min: i64, max: i64) -> Result<Self, RangeError> {
        if min < max {
            Ok(Self { min, max })
        } else {
            Err(RangeError::NotIncreasing { min, max })
        }
    }

    /// Callers must guarantee `min < max`.
    pub(crate) const fn new_unchecked(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Distance `max - min`. The number of candidates is one more than this,
    /// which does not fit in a `u64` for the full `i64` domain.
    pub fn span(&self) -> u64 {
        self.max.abs_diff(self.min)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.min, RANGE_DELIMITER, self.max)
    }
}

/// Parse interval text such as `"1-50"` or `" 3 - 9 "`.
///
/// Returns `Ok(None)` for blank input, meaning "use the default".
pub fn parse_range(raw: &str) -> Result<Option<Range>, RangeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let parts: Vec<&str> = raw.split(RANGE_DELIMITER).collect();
    let [lo, hi] = parts.as_slice() else {
        return Err(RangeError::WrongPartCount(parts.len()));
    };
    let min = parse_bound(lo)?;
    let max = parse_bound(hi)?;
    Range::new(min, max).map(Some)
}

fn parse_bound(part: &str) -> Result<i64, RangeError> {
    let part = part.trim();
    part.parse()
        .map_err(|_| RangeError::NotAnInteger(part.to_string()))
}

/// Outcome of range selection: the range to play with, and the reason the
/// player's text was rejected, if it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeChoice {
    pub range: Range,
    pub warning: Option<RangeError>,
}

impl RangeChoice {
    pub fn fell_back(&self) -> bool {
        self.warning.is_some()
    }
}

/// Pick the range for a round. Never fails: malformed text yields `default`
/// together with the parse error so the caller can warn the player.
pub fn select_range(raw: &str, default: Range) -> RangeChoice {
    match parse_range(raw) {
        Ok(Some(range)) => RangeChoice {
            range,
            warning: None,
        },
        Ok(None) => RangeChoice {
            range: default,
            warning: None,
        },
        Err(e) => {
            log::debug!("rejected interval {:?}: {}", raw, e);
            RangeChoice {
                range: default,
                warning: Some(e),
            }
        }
    }
}
