//! Game state: one immutable value per point in the game.
//!
//! The engine never mutates a `GameState` it was handed. Every accepted
//! action builds a new value; no-ops hand back the caller's `Arc`.
//!
//! ## Invariants
//!
//! - `can_take <= tokens_left <= starting_total` and `can_take <= max_taken`
//! - `winner` is set iff `tokens_left == 0`
//! - an in-progress state has `can_take >= 1`
//! - a finished game's `winner` is the side that took the last token
//! - the agent always holds the turn with a planned take
//! - a set `top_move` lies in `1..=max_taken` and is never below `can_take`
//!
//! `GameState::validate` checks all of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::GameConfig;
use super::player::Side;

/// A state that breaks one of the invariants above.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("tokens_left {tokens_left} exceeds starting_total {starting_total}")]
    PoolOverflow {
        tokens_left: u32,
        starting_total: u32,
    },
    #[error("winner is set but {tokens_left} tokens remain")]
    WinnerBeforeEnd { tokens_left: u32 },
    #[error("pool is empty but no winner is set")]
    MissingWinner,
    #[error("{winner} is recorded as winner but {side} took the last token")]
    WinnerNotMover { winner: Side, side: Side },
    #[error("AI holds the turn without a planned take")]
    AgentWithoutPlan,
    #[error("can_take {can_take} exceeds tokens_left {tokens_left}")]
    AllotmentExceedsPool { can_take: u32, tokens_left: u32 },
    #[error("can_take {can_take} exceeds max_taken {max_taken}")]
    AllotmentExceedsMax { can_take: u32, max_taken: u32 },
    #[error("game in progress but the current side cannot take a token")]
    StalledTurn,
    #[error("top_move {top_move} outside 1..={max_taken}")]
    PlannedTakeOutOfRange { top_move: u32, max_taken: u32 },
    #[error("can_take {can_take} exceeds top_move {top_move}")]
    AllotmentExceedsPlan { can_take: u32, top_move: u32 },
}

/// Where the current side stands within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// The side was just given the turn and has not taken a token.
    JustAssigned,
    /// The side has taken at least one token this turn.
    MidTurn,
}

/// Coarse view of a state, for callers that branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress { side: Side, turn: TurnPhase },
    Terminal { winner: Side },
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Tokens remaining in the pool.
    pub tokens_left: u32,

    /// How many more tokens the current side may take this turn.
    pub can_take: u32,

    /// Whose turn it is.
    pub side: Side,

    /// The take-count the current side committed to when its turn began.
    /// Unset until the first hand-off.
    pub top_move: Option<u32>,

    /// Narration for this state. Derived; never edited on its own.
    pub feedback: String,

    /// Set once the last token is taken. The state is then terminal.
    pub winner: Option<Side>,
}

impl GameState {
    #[must_use]
    pub fn player_is_human(&self) -> bool {
        self.side.is_human()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// The take-count the current side started this turn with.
    ///
    /// Before the first hand-off `top_move` is unset and the human holds
    /// the opening allotment.
    #[must_use]
    pub fn turn_allotment(&self, config: &GameConfig) -> u32 {
        self.top_move.unwrap_or_else(|| config.opening_allotment())
    }

    /// True if the current side has not taken a token this turn.
    #[must_use]
    pub fn turn_untouched(&self, config: &GameConfig) -> bool {
        self.can_take == self.turn_allotment(config)
    }

    #[must_use]
    pub fn phase(&self, config: &GameConfig) -> Phase {
        match self.winner {
            Some(winner) => Phase::Terminal { winner },
            None => Phase::InProgress {
                side: self.side,
                turn: if self.turn_untouched(config) {
                    TurnPhase::JustAssigned
                } else {
                    TurnPhase::MidTurn
                },
            },
        }
    }

    /// Check every state invariant against the given rules.
    pub fn validate(&self, config: &GameConfig) -> Result<(), StateError> {
        if self.tokens_left > config.starting_total {
            return Err(StateError::PoolOverflow {
                tokens_left: self.tokens_left,
                starting_total: config.starting_total,
            });
        }
        match (self.winner.is_some(), self.tokens_left == 0) {
            (true, false) => {
                return Err(StateError::WinnerBeforeEnd {
                    tokens_left: self.tokens_left,
                })
            }
            (false, true) => return Err(StateError::MissingWinner),
            _ => {}
        }
        if let Some(winner) = self.winner {
            if winner != self.side {
                return Err(StateError::WinnerNotMover {
                    winner,
                    side: self.side,
                });
            }
        }
        if self.can_take > self.tokens_left {
            return Err(StateError::AllotmentExceedsPool {
                can_take: self.can_take,
                tokens_left: self.tokens_left,
            });
        }
        if self.can_take > config.max_taken {
            return Err(StateError::AllotmentExceedsMax {
                can_take: self.can_take,
                max_taken: config.max_taken,
            });
        }
        if self.winner.is_none() && self.can_take == 0 {
            return Err(StateError::StalledTurn);
        }
        if self.side == Side::Agent && self.top_move.is_none() {
            return Err(StateError::AgentWithoutPlan);
        }
        if let Some(top_move) = self.top_move {
            if top_move == 0 || top_move > config.max_taken {
                return Err(StateError::PlannedTakeOutOfRange {
                    top_move,
                    max_taken: config.max_taken,
                });
            }
            if self.can_take > top_move {
                return Err(StateError::AllotmentExceedsPlan {
                    can_take: self.can_take,
                    top_move,
                });
            }
        }
        Ok(())
    }
}
