//! Session driver tests: the controls a UI enables and the history it keeps.

use std::sync::Arc;

use im::Vector;
use token_nim::{Action, ActionRecord, Engine, GameConfig, Session, Side};

#[test]
fn test_hand_over_guard_follows_the_turn() {
    let mut session = Session::default();
    assert!(session.can_hand_to_agent(), "full pool: AI may start");

    session.dispatch(Action::TakeToken);
    assert!(session.can_hand_to_agent());

    session.dispatch(Action::LET_AGENT_PLAY);
    assert!(session.agent_to_move());
    assert!(!session.can_hand_to_agent(), "already the AI's turn");

    assert_eq!(session.play_agent_turn(), 3);
    assert_eq!(session.state().tokens_left, 8);
    assert!(!session.agent_to_move());
    assert!(!session.can_hand_to_agent(), "human must take a token first");

    session.dispatch(Action::TakeToken);
    assert!(session.can_hand_to_agent());
}

#[test]
fn test_agent_turn_plays_planned_take() {
    let mut session = Session::default();
    session.dispatch(Action::LET_AGENT_PLAY);

    assert_eq!(session.play_agent_turn(), 1);
    assert_eq!(session.state().tokens_left, 11);
    assert_eq!(session.state().side, Side::Human);
    assert_eq!(
        session.state().feedback,
        "The AI took just one token. It's your turn now. You can take up to 3 tokens."
    );

    // Nothing to play on the human's turn.
    assert_eq!(session.play_agent_turn(), 0);
}

#[test]
fn test_full_game_and_restart() {
    let mut session = Session::default();

    while session.state().winner.is_none() {
        session.dispatch(Action::TakeToken);
        if session.state().winner.is_none() && session.state().side == Side::Human {
            session.dispatch(Action::LET_AGENT_PLAY);
        }
        session.play_agent_turn();
    }

    assert_eq!(session.state().winner, Some(Side::Agent));
    assert!(!session.can_hand_to_agent());
    assert!(!session.agent_to_move());
    assert!(!session.history().is_empty());

    let finished = Arc::clone(session.state());
    let same = session.dispatch(Action::TakeToken);
    assert!(Arc::ptr_eq(&finished, &same));

    let fresh = session.restart();
    assert_eq!(*fresh, *Engine::default().initial_state());
    assert!(session.history().is_empty());
}

#[test]
fn test_history_counts_tokens() {
    let mut session = Session::default();
    session.dispatch(Action::LET_AGENT_PLAY);
    session.play_agent_turn();
    session.dispatch(Action::TakeToken);
    session.dispatch(Action::TakeToken);

    let takes = session
        .history()
        .iter()
        .filter(|r| r.action == Action::TakeToken)
        .count() as u32;
    assert_eq!(takes, 12 - session.state().tokens_left);

    let sequences: Vec<u32> = session.history().iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2, 3]);
    assert_eq!(session.history()[1].side, Side::Agent);
}

#[test]
fn test_custom_rules() {
    let engine = Engine::new(GameConfig::new(21, 4)).unwrap();
    let mut session = Session::new(engine);

    assert_eq!(session.state().can_take, 4);
    session.dispatch(Action::LET_AGENT_PLAY);
    assert_eq!(session.state().top_move, Some(1));
    assert_eq!(session.play_agent_turn(), 1);
    assert_eq!(session.state().tokens_left, 20);
    assert_eq!(session.state().can_take, 4);
}

#[test]
fn test_history_round_trips_through_json() {
    let mut session = Session::default();
    session.dispatch(Action::TakeToken);
    session.dispatch(Action::TakeToken);
    session.dispatch(Action::LET_AGENT_PLAY);
    session.play_agent_turn();
    session.dispatch(Action::TakeToken);

    let json = serde_json::to_string(session.history()).unwrap();
    let history: Vector<ActionRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(&history, session.history());

    let restored = Session::replay(Engine::default(), &history);
    assert_eq!(**restored.state(), **session.state());
    assert_eq!(restored.history(), session.history());
}
