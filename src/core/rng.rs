//! Deterministic random number generation for rounds.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Forkable**: Each round gets its own independent stream
//! - **Context streams**: Digit generation, first-turn choice and the
//!   opponent draw from separate sequences, so changing one never shifts
//!   the others
//!
//! ## Usage
//!
//! ```
//! use numstring::core::GameRng;
//!
//! let mut engine_rng = GameRng::new(42);
//!
//! // Fork a stream for the next round
//! let round_rng = engine_rng.fork();
//! let mut digits = round_rng.for_context("digits");
//! let value: u8 = digits.gen_range(1..=4);
//! assert!((1..=4).contains(&value));
//!
//! // Same seed, same fork counter, same round
//! let mut again = GameRng::new(42);
//! let mut digits_again = again.fork().for_context("digits");
//! assert_eq!(value, digits_again.gen_range(1..=4));
//! ```

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic RNG with forking and context streams.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// The engine forks once per round.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The context seed is FNV-1a over the seed bytes and the context name,
    /// so it does not depend on the toolchain's hasher.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = self
            .seed
            .to_le_bytes()
            .iter()
            .chain(context.as_bytes())
            .fold(FNV_OFFSET, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME));

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Generate a uniformly distributed value in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
