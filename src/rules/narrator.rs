//! Narrator: the status line shown for each state.
//!
//! `narrate` is a pure function of the rules and a state. The human's
//! option sentence is assembled from a small table of clauses, each a
//! predicate with the fragment to use when it holds and when it doesn't.

use crate::core::{GameConfig, GameState, Side, ORDINALS};

/// Fixed wording.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    pub start: &'static str,
    pub agent_starts: &'static str,
    pub agent_turn: &'static str,
    pub just_one: &'static str,
    pub you_win: &'static str,
    pub agent_wins: &'static str,
}

pub const MESSAGES: Messages = Messages {
    start: "Start the game. Take a token or let the AI play first.",
    agent_starts: "You let the AI play first.",
    agent_turn: "Now it's the AI's turn to play.",
    just_one: "The AI took just one token.",
    you_win: "You took the last token. You win!",
    agent_wins: "The AI took the last token. The AI wins.",
};

/// What the human's option sentence depends on.
#[derive(Clone, Copy, Debug)]
struct HumanTurn {
    can_take: u32,
    untouched: bool,
}

struct Clause {
    holds: fn(&HumanTurn) -> bool,
    then: &'static str,
    otherwise: &'static str,
}

impl Clause {
    fn render(&self, turn: &HumanTurn) -> &'static str {
        if (self.holds)(turn) {
            self.then
        } else {
            self.otherwise
        }
    }
}

fn untouched(turn: &HumanTurn) -> bool {
    turn.untouched
}

fn touched(turn: &HumanTurn) -> bool {
    !turn.untouched
}

fn plural(turn: &HumanTurn) -> bool {
    turn.can_take > 1
}

const OPENING: Clause = Clause {
    holds: untouched,
    then: "It's your turn now. ",
    otherwise: "",
};
const UP_TO: Clause = Clause {
    holds: plural,
    then: " up to",
    otherwise: "",
};
const MORE: Clause = Clause {
    holds: touched,
    then: " more",
    otherwise: "",
};
const NOUN: Clause = Clause {
    holds: plural,
    then: "tokens",
    otherwise: "token",
};
const CLOSING: Clause = Clause {
    holds: untouched,
    then: ".",
    otherwise: " or let the AI play.",
};

/// Describe `state`: what just happened and what the current side may do.
#[must_use]
pub fn narrate(config: &GameConfig, state: &GameState) -> String {
    match state.side {
        Side::Human => narrate_human(config, state),
        Side::Agent => narrate_agent(config, state),
    }
}

fn narrate_human(config: &GameConfig, state: &GameState) -> String {
    if state.winner == Some(Side::Human) {
        return MESSAGES.you_win.to_string();
    }
    if state.top_move.is_none() && state.tokens_left == config.starting_total {
        return MESSAGES.start.to_string();
    }

    let turn = HumanTurn {
        can_take: state.can_take,
        untouched: state.turn_untouched(config),
    };
    format!(
        "{}You can take{} {}{} {}{}",
        OPENING.render(&turn),
        UP_TO.render(&turn),
        turn.can_take,
        MORE.render(&turn),
        NOUN.render(&turn),
        CLOSING.render(&turn),
    )
}

fn narrate_agent(config: &GameConfig, state: &GameState) -> String {
    if state.winner == Some(Side::Agent) {
        return MESSAGES.agent_wins.to_string();
    }
    if state.tokens_left == config.starting_total {
        return MESSAGES.agent_starts.to_string();
    }

    let top_move = state.turn_allotment(config);
    if state.can_take == top_move {
        return MESSAGES.agent_turn.to_string();
    }
    if top_move == 1 {
        return MESSAGES.just_one.to_string();
    }

    assert!(
        top_move > state.can_take,
        "agent narration needs top_move ({}) above can_take ({})",
        top_move,
        state.can_take
    );
    let taken = (top_move - state.can_take) as usize;
    format!("The AI took a {} token.", ORDINALS[taken - 1])
}
