//! Session driver for presentation layers.
//!
//! A UI holds one `Session`: the current state, the engine that advances
//! it, and the history of accepted actions. It answers the questions a
//! UI asks every frame (is the agent to move? may the human hand over?)
//! without owning any timing. Pacing the agent's moves stays with the UI.

mod driver;

pub use driver::Session;
