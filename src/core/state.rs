//! Round state: the digit string, scores, turn and status.
//!
//! `GameState` only offers operations that keep its invariants:
//! - every digit is in `1..=4`
//! - each removal shortens the string by exactly one
//! - `status` is `Finished` exactly when the string is empty
//! - `history.len() + digits.len()` is the length the round started with
//!
//! Uses `im` persistent vectors so snapshots handed to callers are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::RoundConfig;
use super::digit::Digit;
use super::player::{Side, SideMap};
use super::rng::GameRng;
use crate::error::{GameError, Result};

/// Whether a round still accepts moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Digits remain; the side holding the turn may move.
    InProgress,
    /// The digit string is empty.
    Finished,
}

/// Authoritative data for one round.
///
/// Deserializing rejects a `status` that disagrees with the digit count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    digits: Vector<Digit>,
    scores: SideMap<i64>,
    turn: Side,
    status: Status,
    history: Vector<MoveRecord>,
}

#[derive(Deserialize)]
struct RawGameState {
    digits: Vector<Digit>,
    scores: SideMap<i64>,
    turn: Side,
    status: Status,
    history: Vector<MoveRecord>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = String;

    fn try_from(raw: RawGameState) -> std::result::Result<Self, Self::Error> {
        let expected = if raw.digits.is_empty() {
            Status::Finished
        } else {
            Status::InProgress
        };
        if raw.status != expected {
            return Err(format!(
                "status {:?} does not match {} remaining digits",
                raw.status,
                raw.digits.len()
            ));
        }

        Ok(Self {
            digits: raw.digits,
            scores: raw.scores,
            turn: raw.turn,
            status: raw.status,
            history: raw.history,
        })
    }
}

impl GameState {
    /// Start a round with a random digit string of `length`.
    ///
    /// Digits and the first turn are drawn from separate context streams
    /// of `rng`, so the same round RNG always produces the same round.
    pub fn initialize(length: usize, config: &RoundConfig, rng: &GameRng) -> Result<Self> {
        config.validate_length(length)?;

        let mut digit_rng = rng.for_context("digits");
        let digits: Vec<Digit> = (0..length)
            .map(|_| Digit::ALL[usize::from(digit_rng.gen_range(0..Digit::ALL.len() as u8))])
            .collect();

        let first_turn = if rng.for_context("turn").gen_bool(0.5) {
            Side::Player
        } else {
            Side::Computer
        };

        Ok(Self::from_digits(digits, first_turn, config.starting_score))
    }

    /// Build a round from a known digit string.
    ///
    /// Length bounds are not checked here; an empty string yields a
    /// finished round.
    #[must_use]
    pub fn from_digits(digits: impl IntoIterator<Item = Digit>, first_turn: Side, starting_score: i64) -> Self {
        let digits: Vector<Digit> = digits.into_iter().collect();
        let status = if digits.is_empty() {
            Status::Finished
        } else {
            Status::InProgress
        };

        Self {
            digits,
            scores: SideMap::with_value(starting_score),
            turn: first_turn,
            status,
            history: Vector::new(),
        }
    }

    // === Digits ===

    /// Remove and return the digit at `index`, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Result<Digit> {
        if index >= self.digits.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.digits.len(),
            });
        }

        let digit = self.digits.remove(index);
        if self.digits.is_empty() {
            self.status = Status::Finished;
        }
        Ok(digit)
    }

    /// True iff no digits remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Remaining digits in order.
    pub fn digits(&self) -> impl Iterator<Item = Digit> + '_ {
        self.digits.iter().copied()
    }

    /// Digit at a 0-based index.
    #[must_use]
    pub fn digit_at(&self, index: usize) -> Option<Digit> {
        self.digits.get(index).copied()
    }

    /// Remaining digits rendered as a string, e.g. `"1342"`.
    #[must_use]
    pub fn digit_string(&self) -> String {
        self.digits.iter().map(ToString::to_string).collect()
    }

    /// Length the round started with.
    #[must_use]
    pub fn initial_length(&self) -> usize {
        self.digits.len() + self.history.len()
    }

    // === Scores ===

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> SideMap<i64> {
        self.scores
    }

    /// One side's score.
    #[must_use]
    pub fn score(&self, side: Side) -> i64 {
        self.scores[side]
    }

    pub(crate) fn scores_mut(&mut self) -> &mut SideMap<i64> {
        &mut self.scores
    }

    // === Turn and status ===

    /// Side holding the turn.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Convenience for `status() == Status::Finished`.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == Status::Finished
    }

    /// Mark the round finished if no digits remain. Returns true if the
    /// status changed.
    pub(crate) fn finish_if_empty(&mut self) -> bool {
        if self.digits.is_empty() && self.status != Status::Finished {
            self.status = Status::Finished;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub(crate) fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Hand the turn to the other side. No-op once finished.
    pub(crate) fn pass_turn(&mut self) {
        if self.status == Status::InProgress {
            self.turn = self.turn.opponent();
        }
    }

    // === History ===

    /// Accepted moves in order.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.iter()
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}
