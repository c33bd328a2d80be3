//! Property tests over random seeds and player choices.

use numstring::{
    GameEngine, GameError, GameResult, RoundConfig, ScoreChange, Side, SideMap, Status,
};
use proptest::prelude::*;

proptest! {
    /// Every valid length yields exactly that many digits, all in 1..=4.
    #[test]
    fn prop_start_round_digit_domain(length in 15usize..=25, seed in any::<u64>()) {
        let mut engine = GameEngine::new(RoundConfig::default().with_seed(seed));
        let state = engine.start_round(length).unwrap();

        prop_assert_eq!(state.len(), length);
        prop_assert!(state.digits().all(|d| (1..=4).contains(&d.value())));
        prop_assert_eq!(state.status(), Status::InProgress);
        prop_assert_eq!(state.scores(), SideMap::with_value(100));
    }

    /// Lengths outside 15..=25 are always rejected.
    #[test]
    fn prop_invalid_length_rejected(length in prop_oneof![0usize..15, 26usize..500]) {
        let mut engine = GameEngine::new(RoundConfig::default());
        prop_assert_eq!(
            engine.start_round(length).err(),
            Some(GameError::InvalidLength { length, min: 15, max: 25 })
        );
        prop_assert!(engine.state().is_none());
    }

    /// A full round: one digit per accepted move, strict alternation,
    /// termination exactly at zero digits, scores consistent with the
    /// recorded changes and the winner consistent with the scores.
    #[test]
    fn prop_full_round_invariants(
        length in 15usize..=25,
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<usize>(), 25),
    ) {
        let mut engine = GameEngine::new(RoundConfig::default().with_seed(seed));
        engine.start_round(length).unwrap();

        let mut expected_turn = engine.state().unwrap().turn();
        let mut expected_len = length;
        let mut scores = SideMap::with_value(100i64);
        let mut player_picks = picks.into_iter();
        let mut accepted = 0;

        while !engine.is_finished() {
            prop_assert_eq!(engine.check_termination(), Ok(Status::InProgress));
            prop_assert_eq!(engine.state().unwrap().turn(), expected_turn);

            let result = match expected_turn {
                Side::Player => {
                    // Wrong side is rejected without side effects
                    prop_assert_eq!(engine.computer_move(), Err(GameError::NotComputerTurn));
                    let pick = player_picks.next().unwrap_or(0) % expected_len + 1;
                    engine.submit_player_move(pick).unwrap()
                }
                Side::Computer => {
                    prop_assert_eq!(engine.submit_player_move(1), Err(GameError::NotPlayerTurn));
                    engine.computer_move().unwrap()
                }
            };
            accepted += 1;
            expected_len -= 1;

            let ScoreChange { side, delta } = result.record.change;
            scores[side] += delta;

            prop_assert_eq!(result.record.actor, expected_turn);
            prop_assert_eq!(engine.state().unwrap().len(), expected_len);
            prop_assert_eq!(result.scores, scores);
            prop_assert_eq!(result.finished, expected_len == 0);

            if expected_len > 0 {
                prop_assert_eq!(result.turn, expected_turn.opponent());
                expected_turn = expected_turn.opponent();
            } else {
                prop_assert_eq!(result.turn, expected_turn);
            }
        }

        prop_assert_eq!(accepted, length);
        prop_assert_eq!(engine.state().unwrap().moves_played(), length);
        prop_assert_eq!(engine.state().unwrap().initial_length(), length);
        prop_assert_eq!(engine.check_termination(), Ok(Status::Finished));

        let winner = engine.resolve_winner().unwrap();
        let expected = if scores[Side::Player] < scores[Side::Computer] {
            GameResult::Winner(Side::Player)
        } else if scores[Side::Computer] < scores[Side::Player] {
            GameResult::Winner(Side::Computer)
        } else {
            GameResult::Draw
        };
        prop_assert_eq!(winner, expected);
    }
}
