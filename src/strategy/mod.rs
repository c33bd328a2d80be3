//! Opponent move selection.
//!
//! The computer chooses its move through an `OpponentStrategy`. The game's
//! own opponent is `CoinFlip`; `FirstDigit` and `RandomDigit` can be
//! installed on their own to pin behavior.

pub mod policy;

pub use policy::{CoinFlip, FirstDigit, OpponentStrategy, RandomDigit, Selection};

use serde::{Deserialize, Serialize};

/// Named opponent policies, for callers that pick one from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyChoice {
    /// Re-roll between first and random every turn.
    #[default]
    CoinFlip,
    /// Always the leftmost digit.
    First,
    /// Uniformly random position.
    Random,
}

impl StrategyChoice {
    /// Build the policy.
    #[must_use]
    pub fn build(self) -> Box<dyn OpponentStrategy> {
        match self {
            StrategyChoice::CoinFlip => Box::new(CoinFlip),
            StrategyChoice::First => Box::new(FirstDigit),
            StrategyChoice::Random => Box::new(RandomDigit),
        }
    }
}
