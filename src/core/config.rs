//! Round configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Round configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Random seed for the engine RNG.
    /// Same seed produces the same sequence of rounds.
    pub seed: u64,

    /// Shortest digit string a round may start with.
    pub min_length: usize,

    /// Longest digit string a round may start with.
    pub max_length: usize,

    /// Score both sides start each round with.
    pub starting_score: i64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            min_length: 15,
            max_length: 25,
            starting_score: 100,
        }
    }
}

impl RoundConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom length bounds (inclusive).
    #[must_use]
    pub fn with_length_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Create a new config with custom starting score.
    #[must_use]
    pub fn with_starting_score(mut self, score: i64) -> Self {
        self.starting_score = score;
        self
    }

    /// Check a requested digit-string length against the bounds.
    pub fn validate_length(&self, length: usize) -> Result<()> {
        if (self.min_length..=self.max_length).contains(&length) {
            Ok(())
        } else {
            Err(GameError::InvalidLength {
                length,
                min: self.min_length,
                max: self.max_length,
            })
        }
    }
}
