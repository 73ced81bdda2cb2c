//! Optimal-play planner.
//!
//! A pool of size `n` with `n % (max_taken + 1) == 0` is a losing residue:
//! whatever the mover takes, the opponent can restore the residue. The
//! agent therefore takes `n % (max_taken + 1)` tokens, which hands the
//! opponent a losing residue. When the agent itself faces one it has no
//! winning move and takes a single token.

/// How many tokens the agent commits to taking from a pool of `tokens_left`.
///
/// Never zero. Never more than `tokens_left` while the pool is non-empty.
#[must_use]
pub fn planned_take(tokens_left: u32, max_taken: u32) -> u32 {
    match residue(tokens_left, max_taken) {
        0 => 1,
        take => take,
    }
}

/// True if the side about to move from `tokens_left` loses against optimal play.
#[must_use]
pub fn is_losing_residue(tokens_left: u32, max_taken: u32) -> bool {
    residue(tokens_left, max_taken) == 0
}

/// `tokens_left % (max_taken + 1)`. With `max_taken == u32::MAX` no pool
/// reaches the modulus, so the pool itself is the residue.
fn residue(tokens_left: u32, max_taken: u32) -> u32 {
    match max_taken.checked_add(1) {
        Some(modulus) => tokens_left % modulus,
        None => tokens_left,
    }
}

/// The human's allotment for a freshly assigned turn.
#[must_use]
pub fn human_allotment(tokens_left: u32, max_taken: u32) -> u32 {
    max_taken.min(tokens_left)
}
