//! Game rules: the engine and its two pure helpers.
//!
//! - `engine`: turn controller and side assignment over `Arc<GameState>`
//! - `planner`: the agent's optimal take-count
//! - `narrator`: the status line for any state
//!
//! Callers go through `Engine`; the helpers are public for testing and
//! for UIs that want to preview a plan.

pub mod engine;
pub mod narrator;
pub mod planner;

pub use engine::Engine;
pub use narrator::{narrate, Messages, MESSAGES};
pub use planner::{human_allotment, is_losing_residue, planned_take};
