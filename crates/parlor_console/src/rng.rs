//! Seedable randomness for shuffling and sampling.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// The only source of non-determinism in the games.
///
/// Same seed, same shuffles, same picks. Production runs seed from OS
/// entropy; tests pass a fixed seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl GameRng {
    /// Creates a deterministic RNG from `seed`.
    #[must_use]
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates an RNG seeded from the operating system.
    #[must_use]
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Shuffles a slice in place, uniformly.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Picks one element uniformly. `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
