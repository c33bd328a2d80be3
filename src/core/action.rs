//! Move representation: what was removed, by whom, and what it changed.
//!
//! - `MoveRecord` is the history entry kept in `GameState`.
//! - `MoveResult` is what the engine hands back to the caller after an
//!   accepted move: the record plus the updated scores, turn and
//!   finished flag.

use serde::{Deserialize, Serialize};

use super::digit::Digit;
use super::player::{Side, SideMap};

/// Opponent policy that picked a computer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Always the leftmost digit.
    First,
    /// Uniformly random position.
    Random,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::First => write!(f, "first"),
            StrategyKind::Random => write!(f, "random"),
        }
    }
}

/// A score adjustment caused by one removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChange {
    /// Whose score changed.
    pub side: Side,
    /// Signed amount added to that score.
    pub delta: i64,
}

/// A recorded move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that removed the digit.
    pub actor: Side,

    /// 0-based index the digit was removed from.
    pub index: usize,

    /// The removed digit.
    pub digit: Digit,

    /// Opponent policy used, `None` for player moves.
    pub strategy: Option<StrategyKind>,

    /// Score adjustment applied.
    pub change: ScoreChange,
}

impl MoveRecord {
    /// 1-based position as the caller addressed it.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index + 1
    }
}

/// Outcome of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// What happened.
    pub record: MoveRecord,

    /// Scores after the move.
    pub scores: SideMap<i64>,

    /// Side to act next. Unchanged when the move finished the round.
    pub turn: Side,

    /// Did this move empty the digit string?
    pub finished: bool,
}

impl MoveResult {
    /// The removed digit.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.record.digit
    }

    /// Player score after the move.
    #[must_use]
    pub fn player_score(&self) -> i64 {
        self.scores[Side::Player]
    }

    /// Computer score after the move.
    #[must_use]
    pub fn computer_score(&self) -> i64 {
        self.scores[Side::Computer]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MoveRecord {
        MoveRecord {
            actor: Side::Computer,
            index: 0,
            digit: Digit::new(2).unwrap(),
            strategy: Some(StrategyKind::First),
            change: ScoreChange {
                side: Side::Computer,
                delta: -4,
            },
        }
    }

    #[test]
    fn test_position_is_one_based() {
        let record = sample_record();
        assert_eq!(record.position(), 1);
    }

    #[test]
    fn test_move_result_accessors() {
        let mut scores = SideMap::with_value(100);
        scores[Side::Computer] = 96;

        let result = MoveResult {
            record: sample_record(),
            scores,
            turn: Side::Player,
            finished: false,
        };

        assert_eq!(result.digit().value(), 2);
        assert_eq!(result.player_score(), 100);
        assert_eq!(result.computer_score(), 96);
    }

    #[test]
    fn test_record_serialization() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
