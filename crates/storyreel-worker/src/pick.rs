//! Seedable selection for source collaborators.
//!
//! Source implementations pick communities, submissions, or background
//! footage at random. That randomness is injected through this helper so a
//! fixed seed reproduces a full run; the planning core itself never sees an
//! RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic random chooser backed by a caller-supplied seed.
#[derive(Debug)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    /// Create a picker from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose one item from a slice, or `None` when it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..items.len());
        items.get(index)
    }
}
