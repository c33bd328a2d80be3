//! # numstring
//!
//! Engine for a two-party number-string game. A shared string of digits
//! `1..=4` is depleted one digit at a time by a human player and a computer
//! opponent taking turns.
//!
//! ## Rules
//!
//! - Removing an even digit `d` costs the remover `2 * d` points.
//! - Removing an odd digit `d` adds `d` points to the other side.
//! - The round ends when the string is empty; the **lower** score wins.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the round**: callers read `GameState` and submit moves,
//!    they never mutate state directly. Rejected moves change nothing.
//!
//! 2. **Deterministic**: all randomness (digits, first turn, opponent) comes
//!    from a seeded `GameRng`, so a seed reproduces a round exactly.
//!
//! 3. **Presentation-free**: the terminal shell in `src/bin` derives its
//!    prompts from `GameEngine::phase`; no UI state lives in the engine.
//!
//! ## Modules
//!
//! - `core`: sides, digits, state, move records, RNG, configuration
//! - `rules`: scoring and the `GameEngine` round driver
//! - `strategy`: opponent move selection
//! - `error`: `GameError`
//!
//! ## Example
//!
//! ```
//! use numstring::{GameEngine, RoundConfig, Side};
//!
//! let mut engine = GameEngine::new(RoundConfig::default().with_seed(7));
//! engine.start_round(15).unwrap();
//!
//! while !engine.is_finished() {
//!     let turn = engine.state().unwrap().turn();
//!     match turn {
//!         Side::Player => engine.submit_player_move(1).unwrap(),
//!         Side::Computer => engine.computer_move().unwrap(),
//!     };
//! }
//!
//! let summary = engine.summary().unwrap();
//! assert_eq!(summary.moves_played, 15);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Digit, GameRng, GameState, MoveRecord, MoveResult, RoundConfig, ScoreChange, Side, SideMap,
    Status, StrategyKind,
};

pub use crate::error::{GameError, Result};

pub use crate::rules::{GameEngine, GameResult, Phase, RoundSummary};

pub use crate::strategy::{
    CoinFlip, FirstDigit, OpponentStrategy, RandomDigit, Selection, StrategyChoice,
};
