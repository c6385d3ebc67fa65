//! RNG module - deck shuffling
//!
//! Wraps a seedable [`StdRng`] so every deck permutation is equally likely in
//! play, while tests can pin a seed and get the same deck every time.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Random source used by the deck builder
#[derive(Debug, Clone)]
pub struct DeckRng {
    inner: StdRng,
}

impl DeckRng {
    /// Create a deterministic RNG from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system
    pub fn from_os() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Uniform Fisher-Yates shuffle of a slice
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::from_os()
    }
}
