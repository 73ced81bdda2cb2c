use std::sync::Arc;

use im::Vector;
use tracing::debug;

use crate::core::{Action, ActionRecord, GameState, Side};
use crate::rules::Engine;

/// One game in progress plus its linear history.
///
/// Cloning is cheap: the state is an `Arc` and the history an `im::Vector`.
#[derive(Clone, Debug)]
pub struct Session {
    engine: Engine,
    state: Arc<GameState>,
    history: Vector<ActionRecord>,
}

impl Session {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        let state = engine.initial_state();
        Self {
            engine,
            state,
            history: Vector::new(),
        }
    }

    /// Rebuild a session by replaying recorded actions from a fresh game.
    ///
    /// Pairs with a serialized `history()` to restore a game in progress.
    pub fn replay<'a>(
        engine: Engine,
        records: impl IntoIterator<Item = &'a ActionRecord>,
    ) -> Self {
        let mut session = Self::new(engine);
        for record in records {
            session.dispatch(record.action);
        }
        session
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &Arc<GameState> {
        &self.state
    }

    /// Accepted actions since the last restart, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Apply an action and return the resulting state.
    ///
    /// Only actions that produced a new state are recorded. `NewGame`
    /// starts a new history.
    pub fn dispatch(&mut self, action: Action) -> Arc<GameState> {
        let next = self.engine.reduce(&self.state, action);

        if action == Action::NewGame {
            self.history.clear();
            debug!("new game");
        } else if !Arc::ptr_eq(&next, &self.state) {
            let sequence = self.history.len() as u32;
            self.history
                .push_back(ActionRecord::new(self.state.side, action, sequence));
        }

        self.state = Arc::clone(&next);
        next
    }

    /// Discard the current game and start a new one.
    pub fn restart(&mut self) -> Arc<GameState> {
        self.dispatch(Action::NewGame)
    }

    /// True when the UI should schedule a `TakeToken` for the agent.
    #[must_use]
    pub fn agent_to_move(&self) -> bool {
        self.state.side == Side::Agent && !self.state.is_terminal()
    }

    /// Play out the agent's whole turn with no delay.
    ///
    /// Returns how many tokens the agent took.
    pub fn play_agent_turn(&mut self) -> u32 {
        let mut taken = 0;
        while self.agent_to_move() {
            self.dispatch(Action::TakeToken);
            taken += 1;
        }
        taken
    }

    /// Whether the "let the AI play" control should be enabled.
    ///
    /// Once the game is underway the human must take at least one token
    /// before handing over, and cannot hand over during the agent's turn.
    #[must_use]
    pub fn can_hand_to_agent(&self) -> bool {
        let state = &self.state;
        if state.is_terminal() {
            return false;
        }
        if state.tokens_left == self.engine.config().starting_total {
            return true;
        }
        state.side == Side::Human && !state.turn_untouched(self.engine.config())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Engine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::default();

        assert_eq!(session.state().tokens_left, 12);
        assert!(session.history().is_empty());
        assert!(!session.agent_to_move());
        assert!(session.can_hand_to_agent());
    }

    #[test]
    fn test_noop_not_recorded() {
        let mut session = Session::default();

        let before = Arc::clone(session.state());
        let after = session.dispatch(Action::AssignSide(Side::Human));

        assert!(Arc::ptr_eq(&before, &after));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_history_sequence() {
        let mut session = Session::default();
        session.dispatch(Action::TakeToken);
        session.dispatch(Action::LET_AGENT_PLAY);

        let records: Vec<_> = session.history().iter().cloned().collect();
        assert_eq!(
            records,
            vec![
                ActionRecord::new(Side::Human, Action::TakeToken, 0),
                ActionRecord::new(Side::Human, Action::LET_AGENT_PLAY, 1),
            ]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut session = Session::default();
        session.dispatch(Action::TakeToken);

        let snapshot = session.clone();
        session.dispatch(Action::TakeToken);

        assert_eq!(snapshot.state().tokens_left, 11);
        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(session.state().tokens_left, 10);
        assert_eq!(session.history().len(), 2);
    }
}
