//! Game rules and the round driver.
//!
//! - `scoring`: the parity rule applied after every removal
//! - `engine`: `GameEngine`, which validates and applies moves, runs the
//!   opponent, and decides the winner

pub mod engine;
pub mod scoring;

pub use engine::{GameEngine, GameResult, Phase, RoundSummary};
pub use scoring::{apply_removal, score_removal};
