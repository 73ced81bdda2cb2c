//! # token-nim
//!
//! A turn/state engine for a two-player token game (a Nim variant).
//!
//! Play starts with a pool of 12 tokens. Each turn a side removes 1 to 3
//! of them, and the side that takes the last token wins. One side is a
//! human; the other is an agent that always plays the optimal move.
//!
//! ## Design Principles
//!
//! 1. **Pure reducer**: `Engine::reduce` maps `(&Arc<GameState>, Action)`
//!    to the next `Arc<GameState>`. States are never mutated in place.
//!
//! 2. **Total functions**: out-of-turn and post-game requests are no-ops
//!    that return the caller's own `Arc`, never errors.
//!
//! 3. **Configuration over convention**: pool size and per-turn maximum
//!    come from `GameConfig`; the planner's modulus follows from them.
//!
//! ## Modules
//!
//! - `core`: sides, configuration, actions, state
//! - `rules`: engine, optimal-play planner, narrator
//! - `session`: history-keeping driver for presentation layers
//!
//! ## Example
//!
//! ```
//! use token_nim::{Action, Engine, Side};
//!
//! let engine = Engine::default();
//! let state = engine.initial_state();
//! let state = engine.reduce(&state, Action::AssignSide(Side::Agent));
//!
//! assert_eq!(state.top_move, Some(1));
//! assert_eq!(state.feedback, "You let the AI play first.");
//! ```

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameState, Phase, Side, StateError, TurnPhase,
};

pub use crate::rules::{narrate, planned_take, Engine};

pub use crate::session::Session;
