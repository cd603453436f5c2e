//! An injected, seedable random source for the tournament reductions.
//!
//! Carried explicitly rather than reaching for thread-local or global
//! randomness, so that tests (and callers who want reproducible trees)
//! can pin a seed. A `rand_chacha::ChaCha8Rng` is threaded through
//! partitioning for this reason.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seedable source of randomness for the antipole/median tournament
/// reductions.
#[derive(Debug, Clone)]
pub struct TournamentRng {
    rng: ChaCha8Rng,
}

impl TournamentRng {
    /// Builds a new RNG seeded from the given value, for reproducible
    /// tournament outcomes across runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds a new RNG seeded from entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Returns a uniformly random index in `0..bound`.
    ///
    /// Panics if `bound == 0`, mirroring the precondition every caller in
    /// this crate already upholds (it is only ever called with a
    /// non-empty pool size).
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
