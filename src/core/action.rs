//! Actions: the closed vocabulary of requests the engine accepts.
//!
//! There are exactly three:
//! - `NewGame`: discard the current state and start over
//! - `AssignSide(side)`: hand the turn to `side` (no-op if it already has it)
//! - `TakeToken`: the side holding the turn removes one token
//!
//! The enum is exhaustive, so an unknown request cannot be constructed.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// A request to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Start a fresh game.
    NewGame,
    /// Give the turn to the given side.
    AssignSide(Side),
    /// Remove one token on behalf of the side holding the turn.
    TakeToken,
}

impl Action {
    /// "Let the AI play": hand the turn to the agent.
    pub const LET_AGENT_PLAY: Action = Action::AssignSide(Side::Agent);
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side holding the turn when the action was dispatched.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Position in the game's history (starts at 0).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, sequence: u32) -> Self {
        Self {
            side,
            action,
            sequence,
        }
    }
}
