//! Core round types: sides, digits, state, moves, RNG, configuration.
//!
//! Everything here is pure data with invariant-preserving mutators.
//! `GameEngine` in `rules` is the only component that drives a round.

pub mod player;
pub mod digit;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Side, SideMap};
pub use digit::Digit;
pub use rng::GameRng;
pub use config::RoundConfig;
pub use action::{MoveRecord, MoveResult, ScoreChange, StrategyKind};
pub use state::{GameState, Status};
