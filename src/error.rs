//! Error taxonomy for round operations.
//!
//! Every variant except `IndexOutOfRange` is a recoverable caller error:
//! the rejected operation leaves the round untouched and the caller should
//! re-prompt. `IndexOutOfRange` signals a broken contract inside
//! `GameState` and is unreachable through `GameEngine`.

use thiserror::Error;

use crate::core::Side;

/// Errors returned by round operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid length {length}. Please enter a number between {min} and {max}.")]
    InvalidLength { length: usize, min: usize, max: usize },
    #[error("Invalid move {input:?}. Please enter a valid position.")]
    InvalidMove { input: String },
    #[error("It's not your turn yet!")]
    NotPlayerTurn,
    #[error("It's not the computer's turn")]
    NotComputerTurn,
    #[error("No round has been started")]
    NoRound,
    #[error("The round is still in progress")]
    RoundNotFinished,
    #[error("{side} score would overflow")]
    ScoreOverflow { side: Side },
    #[error("Index {index} out of range for {len} digits")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GameError {
    /// Can the caller recover by re-prompting?
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::IndexOutOfRange { .. })
    }
}

/// Result alias for round operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::InvalidLength { length: 30, min: 15, max: 25 };
        assert_eq!(
            err.to_string(),
            "Invalid length 30. Please enter a number between 15 and 25."
        );
        assert_eq!(GameError::NotPlayerTurn.to_string(), "It's not your turn yet!");
    }

    #[test]
    fn test_recoverable() {
        assert!(GameError::NotPlayerTurn.is_recoverable());
        assert!(GameError::InvalidMove { input: "x".into() }.is_recoverable());
        assert!(!GameError::IndexOutOfRange { index: 3, len: 2 }.is_recoverable());
        assert!(GameError::ScoreOverflow { side: Side::Player }.is_recoverable());
    }
}
