//! Opponent policies for choosing which digit the computer removes.
//!
//! - `FirstDigit`: always the leftmost digit
//! - `RandomDigit`: a uniformly random position
//! - `CoinFlip`: re-rolls between the two on every computer turn

use crate::core::{GameRng, GameState, StrategyKind};

/// A position picked by an opponent policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// 0-based index into the digit string.
    pub index: usize,
    /// Policy that produced the index.
    pub kind: StrategyKind,
}

/// Policy for choosing the computer's move.
pub trait OpponentStrategy: Send + Sync {
    /// Choose a position to remove.
    ///
    /// Returns `None` if no digits remain. Otherwise the index is always
    /// `< state.len()`.
    fn choose_position(&self, state: &GameState, rng: &mut GameRng) -> Option<Selection>;
}

/// Always removes index 0.
#[derive(Clone, Debug, Default)]
pub struct FirstDigit;

impl OpponentStrategy for FirstDigit {
    fn choose_position(&self, state: &GameState, _rng: &mut GameRng) -> Option<Selection> {
        if state.is_empty() {
            return None;
        }
        Some(Selection {
            index: 0,
            kind: StrategyKind::First,
        })
    }
}

/// Removes a uniformly random index.
#[derive(Clone, Debug, Default)]
pub struct RandomDigit;

impl OpponentStrategy for RandomDigit {
    fn choose_position(&self, state: &GameState, rng: &mut GameRng) -> Option<Selection> {
        if state.is_empty() {
            return None;
        }
        Some(Selection {
            index: rng.gen_range(0..state.len()),
            kind: StrategyKind::Random,
        })
    }
}

/// Picks `FirstDigit` or `RandomDigit` with equal probability each turn.
///
/// The draw happens on every call, never once per round.
#[derive(Clone, Debug, Default)]
pub struct CoinFlip;

impl OpponentStrategy for CoinFlip {
    fn choose_position(&self, state: &GameState, rng: &mut GameRng) -> Option<Selection> {
        if state.is_empty() {
            return None;
        }
        let selection = if rng.gen_bool(0.5) {
            FirstDigit.choose_position(state, rng)
        } else {
            RandomDigit.choose_position(state, rng)
        };
        if let Some(sel) = &selection {
            log::trace!("coin flip picked {} strategy, index {}", sel.kind, sel.index);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Side};

    fn state(text: &str) -> GameState {
        GameState::from_digits(Digit::parse_string(text).unwrap(), Side::Computer, 100)
    }

    #[test]
    fn test_first_digit() {
        let mut rng = GameRng::new(42);
        let s = state("4321");

        for _ in 0..10 {
            assert_eq!(
                FirstDigit.choose_position(&s, &mut rng),
                Some(Selection { index: 0, kind: StrategyKind::First })
            );
        }
    }

    #[test]
    fn test_random_digit_in_range() {
        let mut rng = GameRng::new(42);
        let s = state("1234123");
        let mut seen = [false; 7];

        for _ in 0..500 {
            let sel = RandomDigit.choose_position(&s, &mut rng).unwrap();
            assert_eq!(sel.kind, StrategyKind::Random);
            assert!(sel.index < s.len());
            seen[sel.index] = true;
        }

        assert!(seen.iter().all(|&hit| hit), "every position should be reachable");
    }

    #[test]
    fn test_empty_state_has_no_selection() {
        let mut rng = GameRng::new(42);
        let empty = GameState::from_digits(Vec::new(), Side::Computer, 100);

        assert_eq!(FirstDigit.choose_position(&empty, &mut rng), None);
        assert_eq!(RandomDigit.choose_position(&empty, &mut rng), None);
        assert_eq!(CoinFlip.choose_position(&empty, &mut rng), None);
    }

    #[test]
    fn test_coin_flip_rerolls_each_turn() {
        let mut rng = GameRng::new(42);
        let s = state("2222222222");

        let kinds: Vec<StrategyKind> = (0..64)
            .map(|_| CoinFlip.choose_position(&s, &mut rng).unwrap().kind)
            .collect();

        assert!(kinds.contains(&StrategyKind::First));
        assert!(kinds.contains(&StrategyKind::Random));
    }

    #[test]
    fn test_coin_flip_is_deterministic() {
        let s = state("1234123412");
        let mut rng1 = GameRng::new(5);
        let mut rng2 = GameRng::new(5);

        for _ in 0..20 {
            assert_eq!(
                CoinFlip.choose_position(&s, &mut rng1),
                CoinFlip.choose_position(&s, &mut rng2)
            );
        }
    }
}
