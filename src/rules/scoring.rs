//! Parity scoring.
//!
//! Removing an even digit `d` costs the actor `2 * d`. Removing an odd
//! digit `d` adds `d` to the other side's score. Lower scores win, so both
//! outcomes are bad for the side on the receiving end.

use crate::core::{Digit, ScoreChange, Side, SideMap};
use crate::error::{GameError, Result};

/// Score adjustment for `actor` removing `digit`.
#[must_use]
pub fn score_removal(actor: Side, digit: Digit) -> ScoreChange {
    let value = i64::from(digit.value());
    if digit.is_even() {
        ScoreChange {
            side: actor,
            delta: -2 * value,
        }
    } else {
        ScoreChange {
            side: actor.opponent(),
            delta: value,
        }
    }
}

/// Apply the adjustment for `actor` removing `digit` and return it.
///
/// Fails without touching `scores` if the result does not fit in `i64`.
pub fn apply_removal(scores: &mut SideMap<i64>, actor: Side, digit: Digit) -> Result<ScoreChange> {
    let change = score_removal(actor, digit);
    let updated = scores[change.side]
        .checked_add(change.delta)
        .ok_or(GameError::ScoreOverflow { side: change.side })?;
    scores[change.side] = updated;
    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_player_even_penalizes_player() {
        let mut scores = SideMap::with_value(100);
        apply_removal(&mut scores, Side::Player, d(4)).unwrap();
        assert_eq!(scores[Side::Player], 92);
        assert_eq!(scores[Side::Computer], 100);
    }

    #[test]
    fn test_player_odd_credits_computer() {
        let mut scores = SideMap::with_value(100);
        apply_removal(&mut scores, Side::Player, d(3)).unwrap();
        assert_eq!(scores[Side::Player], 100);
        assert_eq!(scores[Side::Computer], 103);
    }

    #[test]
    fn test_computer_even_penalizes_computer() {
        let mut scores = SideMap::with_value(100);
        apply_removal(&mut scores, Side::Computer, d(2)).unwrap();
        assert_eq!(scores[Side::Player], 100);
        assert_eq!(scores[Side::Computer], 96);
    }

    #[test]
    fn test_computer_odd_credits_player() {
        let mut scores = SideMap::with_value(100);
        apply_removal(&mut scores, Side::Computer, d(1)).unwrap();
        assert_eq!(scores[Side::Player], 101);
        assert_eq!(scores[Side::Computer], 100);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut scores = SideMap::with_value(i64::MAX);
        assert_eq!(
            apply_removal(&mut scores, Side::Player, d(3)),
            Err(GameError::ScoreOverflow { side: Side::Computer })
        );
        assert_eq!(scores, SideMap::with_value(i64::MAX));

        let mut scores = SideMap::with_value(i64::MIN);
        assert_eq!(
            apply_removal(&mut scores, Side::Computer, d(4)),
            Err(GameError::ScoreOverflow { side: Side::Computer })
        );
        assert_eq!(scores, SideMap::with_value(i64::MIN));
    }

    #[test]
    fn test_full_table() {
        let expected = [
            (Side::Player, 1, Side::Computer, 1),
            (Side::Player, 2, Side::Player, -4),
            (Side::Player, 3, Side::Computer, 3),
            (Side::Player, 4, Side::Player, -8),
            (Side::Computer, 1, Side::Player, 1),
            (Side::Computer, 2, Side::Computer, -4),
            (Side::Computer, 3, Side::Player, 3),
            (Side::Computer, 4, Side::Computer, -8),
        ];

        for (actor, value, side, delta) in expected {
            assert_eq!(score_removal(actor, d(value)), ScoreChange { side, delta });
        }
    }
}
