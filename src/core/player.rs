//! The two sides of the game.
//!
//! The human makes any legal choice; the agent always plays the
//! planner's move.

use serde::{Deserialize, Serialize};

/// One of the two participants in a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Human,
    /// The optimal-play agent.
    Agent,
}

impl Side {
    /// Build a side from the "is it the human?" flag used by UI callers.
    #[must_use]
    pub const fn from_is_human(is_human: bool) -> Self {
        if is_human {
            Side::Human
        } else {
            Side::Agent
        }
    }

    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, Side::Human)
    }

    /// The side that moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Human => Side::Agent,
            Side::Agent => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Agent => write!(f, "AI"),
        }
    }
}
