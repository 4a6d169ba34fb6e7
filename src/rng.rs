//! Randomness behind the secret number.
//!
//! Rounds draw their secret through [`SecretSource`] so tests can script the
//! outcome instead of depending on process-wide seeding.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::range::Range;

/// Supplies offsets uniformly distributed in `[0, span]`.
pub trait SecretSource {
    fn offset(&mut self, span: u64) -> u64;
}

impl SecretSource for SmallRng {
    fn offset(&mut self, span: u64) -> u64 {
        // rejection sampling inside rand; no modulo bias
        self.random_range(0..=span)
    }
}

impl<S: SecretSource + ?Sized> SecretSource for &mut S {
    fn offset(&mut self, span: u64) -> u64 {
        (**self).offset(span)
    }
}

/// Draw a secret from `range`, inclusive on both ends.
pub fn draw_secret<S: SecretSource + ?Sized>(source: &mut S, range: Range) -> i64 {
    let offset = source.offset(range.span());
    range.min().wrapping_add_unsigned(offset.min(range.span()))
}

/// Seeded RNG when `seed` is given, otherwise one seeded from the thread RNG.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Replays queued offsets; once drained, keeps returning the last one.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSecrets {
    queue: VecDeque<u64>,
    last: u64,
}

impl ScriptedSecrets {
    pub fn new<I: IntoIterator<Item = u64>>(offsets: I) -> Self {
        Self {
            queue: offsets.into_iter().collect(),
            last: 0,
        }
    }

    /// Source whose next draw from `range` yields `secret`.
    ///
    /// Panics if `secret` lies outside `range`.
    pub fn fixed_secret(range: Range, secret: i64) -> Self {
        assert!(range.contains(secret), "secret {} outside {}", secret, range);
        Self::new([secret.abs_diff(range.min())])
    }

    /// Queue one more secret for a later round played in `range`.
    pub fn then_secret(mut self, range: Range, secret: i64) -> Self {
        assert!(range.contains(secret), "secret {} outside {}", secret, range);
        self.queue.push_back(secret.abs_diff(range.min()));
        self
    }
}

impl SecretSource for ScriptedSecrets {
    fn offset(&mut self, span: u64) -> u64 {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last.min(span)
    }
}
