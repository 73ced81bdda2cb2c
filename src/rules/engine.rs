//! The game engine: a pure reducer over `Arc<GameState>`.
//!
//! Every operation takes the current state by reference and returns the
//! next one. When a request changes nothing (the game is over, or the
//! requested side already holds the turn) the caller's own `Arc` comes
//! back, so `Arc::ptr_eq` tells a no-op apart from a real transition.

use std::sync::Arc;

use tracing::{debug, trace};

use super::narrator::{narrate, MESSAGES};
use super::planner::{human_allotment, planned_take};
use crate::core::{Action, ConfigError, GameConfig, GameState, Phase, Side, StateError};

/// Game engine for one set of house rules.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: GameConfig,
}

impl Engine {
    /// Create an engine, rejecting rules that cannot be played or narrated.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh game: full pool, human to move, nothing planned yet.
    #[must_use]
    pub fn initial_state(&self) -> Arc<GameState> {
        Arc::new(GameState {
            tokens_left: self.config.starting_total,
            can_take: self.config.opening_allotment(),
            side: Side::Human,
            top_move: None,
            feedback: MESSAGES.start.to_string(),
            winner: None,
        })
    }

    /// Accept a caller-built state (e.g. a deserialized snapshot).
    pub fn resume(&self, state: GameState) -> Result<Arc<GameState>, StateError> {
        state.validate(&self.config)?;
        Ok(Arc::new(state))
    }

    #[must_use]
    pub fn phase(&self, state: &GameState) -> Phase {
        state.phase(&self.config)
    }

    /// Narration for `state` under these rules.
    #[must_use]
    pub fn narrate(&self, state: &GameState) -> String {
        narrate(&self.config, state)
    }

    /// Apply one action.
    #[must_use]
    pub fn reduce(&self, state: &Arc<GameState>, action: Action) -> Arc<GameState> {
        match action {
            Action::NewGame => self.initial_state(),
            Action::AssignSide(side) => self.assign_side(state, side),
            Action::TakeToken => self.take_token(state),
        }
    }

    /// The side holding the turn removes one token.
    ///
    /// Taking the last token wins. Exhausting the turn's allotment passes
    /// the turn to the other side.
    ///
    /// # Panics
    ///
    /// If the game is in progress but `can_take` is 0.
    #[must_use]
    pub fn take_token(&self, state: &Arc<GameState>) -> Arc<GameState> {
        if state.is_terminal() {
            trace!("take_token after game over ignored");
            return Arc::clone(state);
        }
        assert!(
            state.can_take > 0 && state.tokens_left > 0,
            "take_token with nothing left to take (tokens_left {}, can_take {})",
            state.tokens_left,
            state.can_take
        );

        let mut next = GameState {
            tokens_left: state.tokens_left - 1,
            can_take: state.can_take - 1,
            ..GameState::clone(state)
        };
        debug!(
            side = %next.side,
            tokens_left = next.tokens_left,
            can_take = next.can_take,
            "token taken"
        );

        if next.tokens_left == 0 {
            next.winner = Some(next.side);
            debug!(winner = %next.side, "game over");
        } else if next.can_take == 0 {
            // The agent closes its turn with a sentence; the human's
            // exhausted turn has nothing to report.
            let prior = match next.side {
                Side::Agent => Some(self.narrate(&next)),
                Side::Human => None,
            };
            let to = next.side.other();
            return Arc::new(self.hand_over(next, to, prior));
        }

        next.feedback = self.narrate(&next);
        self.checked(next)
    }

    /// Hand the turn to `side`.
    ///
    /// No-op (same `Arc`) if the game is over or `side` already holds the turn.
    #[must_use]
    pub fn assign_side(&self, state: &Arc<GameState>, side: Side) -> Arc<GameState> {
        if state.is_terminal() || state.side == side {
            trace!(requested = %side, "assign_side is a no-op");
            return Arc::clone(state);
        }
        Arc::new(self.hand_over(GameState::clone(state), side, None))
    }

    /// Give `to` a fresh turn, optionally prefixing the narration with
    /// the closing sentence of the side that just finished.
    fn hand_over(&self, mut state: GameState, to: Side, prior: Option<String>) -> GameState {
        let top_move = match to {
            Side::Human => human_allotment(state.tokens_left, self.config.max_taken),
            Side::Agent => planned_take(state.tokens_left, self.config.max_taken),
        };
        state.side = to;
        state.top_move = Some(top_move);
        state.can_take = top_move;

        let current = self.narrate(&state);
        state.feedback = match prior {
            Some(prior) => format!("{} {}", prior, current),
            None => current,
        };
        debug!(side = %to, top_move, tokens_left = state.tokens_left, "turn assigned");
        self.debug_validate(&state);
        state
    }

    fn checked(&self, state: GameState) -> Arc<GameState> {
        self.debug_validate(&state);
        Arc::new(state)
    }

    fn debug_validate(&self, state: &GameState) {
        debug_assert!(
            state.validate(&self.config).is_ok(),
            "transition produced an invalid state: {:?}",
            state
        );
    }
}
