//! Core engine types: sides, configuration, actions, state.
//!
//! Everything here is plain data. The transition logic lives in `rules`.

pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use player::Side;
pub use config::{ConfigError, GameConfig, ORDINALS};
pub use action::{Action, ActionRecord};
pub use state::{GameState, Phase, StateError, TurnPhase};
