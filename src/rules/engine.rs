//! Round driver.
//!
//! `GameEngine` owns the current `GameState` and is the only thing that
//! mutates it. Each accepted move is applied in one call: remove the digit,
//! score it, record it, pass the turn. Rejected calls return an error and
//! leave the round exactly as it was.
//!
//! ## Round lifecycle
//!
//! ```text
//! NotStarted --start_round--> InProgress(turn) --moves--> Finished
//!      ^                                                      |
//!      +------------------------reset_round-------------------+
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{
    GameRng, GameState, MoveRecord, MoveResult, RoundConfig, Side, SideMap, Status, StrategyKind,
};
use crate::error::{GameError, Result};
use crate::strategy::{CoinFlip, OpponentStrategy};

use super::scoring;

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Decide a round from final scores. The lower score wins.
    ///
    /// ```
    /// use numstring::core::{Side, SideMap};
    /// use numstring::rules::GameResult;
    ///
    /// let mut scores = SideMap::with_value(100);
    /// scores[Side::Player] = 90;
    /// scores[Side::Computer] = 96;
    /// assert_eq!(GameResult::from_scores(&scores), GameResult::Winner(Side::Player));
    /// ```
    #[must_use]
    pub fn from_scores(scores: &SideMap<i64>) -> Self {
        let player = scores[Side::Player];
        let computer = scores[Side::Computer];
        if player < computer {
            GameResult::Winner(Side::Player)
        } else if computer < player {
            GameResult::Winner(Side::Computer)
        } else {
            GameResult::Draw
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side} wins!"),
            GameResult::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Where the engine is in the round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round, or the last one was reset.
    NotStarted,
    /// Digits remain and `turn` may move.
    InProgress { turn: Side },
    /// All digits removed.
    Finished,
}

/// Final report of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub result: GameResult,
    pub scores: SideMap<i64>,
    pub moves_played: usize,
}

impl std::fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.result)?;
        writeln!(f, "Final Scores:")?;
        writeln!(f, "Player: {}", self.scores[Side::Player])?;
        write!(f, "Computer: {}", self.scores[Side::Computer])
    }
}

struct Round {
    state: GameState,
    opponent_rng: GameRng,
}

/// Drives rounds: validation, scoring, opponent moves, termination.
pub struct GameEngine {
    config: RoundConfig,
    rng: GameRng,
    strategy: Box<dyn OpponentStrategy>,
    round: Option<Round>,
}

impl GameEngine {
    /// Create an engine with the coin-flip opponent.
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            strategy: Box::new(CoinFlip),
            round: None,
        }
    }

    /// Replace the opponent policy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn OpponentStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Current round, or `None` before the first start or after a reset.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.round.as_ref().map(|r| &r.state)
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state() {
            None => Phase::NotStarted,
            Some(state) if state.is_finished() => Phase::Finished,
            Some(state) => Phase::InProgress { turn: state.turn() },
        }
    }

    // === Round control ===

    /// Start a new round with a random digit string of `length`.
    ///
    /// Replaces any round in progress. On error the current round is kept.
    pub fn start_round(&mut self, length: usize) -> Result<&GameState> {
        self.config.validate_length(length)?;

        let round_rng = self.rng.fork();
        let state = GameState::initialize(length, &self.config, &round_rng)?;
        info!(
            "round started: {} digits, {} moves first",
            state.len(),
            state.turn()
        );
        debug!("digit string {}", state.digit_string());

        let round = self.round.insert(Round {
            state,
            opponent_rng: round_rng.for_context("opponent"),
        });
        Ok(&round.state)
    }

    /// Start a round from a state the caller built, e.g. a fixed digit string.
    pub fn start_prepared_round(&mut self, state: GameState) -> &GameState {
        let round_rng = self.rng.fork();
        info!(
            "prepared round started: {} digits, {} moves first",
            state.len(),
            state.turn()
        );

        let round = self.round.insert(Round {
            state,
            opponent_rng: round_rng.for_context("opponent"),
        });
        &round.state
    }

    /// Discard the current round.
    pub fn reset_round(&mut self) {
        if self.round.take().is_some() {
            info!("round reset");
        }
    }

    // === Moves ===

    /// Remove the digit at a 1-based `position` on the player's behalf.
    pub fn submit_player_move(&mut self, position: usize) -> Result<MoveResult> {
        let state = self.player_state_mut()?;

        if position == 0 || position > state.len() {
            return Err(GameError::InvalidMove {
                input: position.to_string(),
            });
        }

        apply_move(state, Side::Player, position - 1, None)
    }

    /// Like `submit_player_move`, but parses the position from raw input.
    ///
    /// Only plain decimal digits are accepted (surrounding whitespace is
    /// ignored); anything else is an invalid move.
    pub fn submit_player_input(&mut self, input: &str) -> Result<MoveResult> {
        self.player_state_mut()?;

        let text = input.trim();
        let position = if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            text.parse::<usize>().ok()
        } else {
            None
        };

        match position {
            Some(position) => self.submit_player_move(position),
            None => Err(GameError::InvalidMove {
                input: text.to_string(),
            }),
        }
    }

    /// Let the opponent pick and remove a digit.
    ///
    /// An empty digit string finishes the round without consulting the
    /// strategy.
    pub fn computer_move(&mut self) -> Result<MoveResult> {
        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        if round.state.finish_if_empty() {
            info!("round finished: no digits left for the computer");
            return Err(GameError::NotComputerTurn);
        }
        if round.state.is_finished() || round.state.turn() != Side::Computer {
            return Err(GameError::NotComputerTurn);
        }

        let selection = self
            .strategy
            .choose_position(&round.state, &mut round.opponent_rng)
            .ok_or(GameError::NotComputerTurn)?;

        apply_move(
            &mut round.state,
            Side::Computer,
            selection.index,
            Some(selection.kind),
        )
    }

    // === Termination ===

    /// `Finished` iff the digit string is empty.
    pub fn check_termination(&self) -> Result<Status> {
        self.state().map(GameState::status).ok_or(GameError::NoRound)
    }

    /// Is there a round and is it over?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state().is_some_and(GameState::is_finished)
    }

    /// Winner of the finished round. The lower score wins.
    pub fn resolve_winner(&self) -> Result<GameResult> {
        let state = self.state().ok_or(GameError::NoRound)?;
        if !state.is_finished() {
            return Err(GameError::RoundNotFinished);
        }
        Ok(GameResult::from_scores(&state.scores()))
    }

    /// Final report of the finished round.
    pub fn summary(&self) -> Result<RoundSummary> {
        let result = self.resolve_winner()?;
        let state = self.state().ok_or(GameError::NoRound)?;
        Ok(RoundSummary {
            result,
            scores: state.scores(),
            moves_played: state.moves_played(),
        })
    }

    fn player_state_mut(&mut self) -> Result<&mut GameState> {
        match self.round.as_mut() {
            Some(round) if !round.state.is_finished() && round.state.turn() == Side::Player => {
                Ok(&mut round.state)
            }
            _ => Err(GameError::NotPlayerTurn),
        }
    }
}

/// Remove, score, record and pass the turn as one step.
fn apply_move(
    state: &mut GameState,
    actor: Side,
    index: usize,
    strategy: Option<StrategyKind>,
) -> Result<MoveResult> {
    let digit = state.digit_at(index).ok_or(GameError::IndexOutOfRange {
        index,
        len: state.len(),
    })?;
    // Scores first: an overflow must leave the digit string untouched
    let change = scoring::apply_removal(state.scores_mut(), actor, digit)?;
    state.remove_at(index)?;

    let record = MoveRecord {
        actor,
        index,
        digit,
        strategy,
        change,
    };
    state.record_move(record.clone());
    state.pass_turn();

    debug!(
        "{actor} removed {digit} at position {}: {} {:+} (player {}, computer {})",
        record.position(),
        change.side,
        change.delta,
        state.score(Side::Player),
        state.score(Side::Computer)
    );

    if state.is_finished() {
        info!(
            "round finished after {} moves: player {}, computer {}",
            state.moves_played(),
            state.score(Side::Player),
            state.score(Side::Computer)
        );
    }

    Ok(MoveResult {
        record,
        scores: state.scores(),
        turn: state.turn(),
        finished: state.is_finished(),
    })
}
