use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::card::Card;

/// The four observable table events. This union is closed: every move a
/// session can ever see is one of these, so dispatch is a total match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Seat the table and lay down the ground rules everyone knows.
    Init {
        players: Vec<Card>,
        me: Option<Card>,
    },
    /// Declare complete knowledge of one seat's hand, ours or a revealed
    /// opponent's.
    Hand {
        owner: Card,
        cards: BTreeSet<Card>,
    },
    /// One turn of play: a suggested murder and who, if anyone, refuted it.
    /// `card_shown` is only ever known when we were the suggester.
    Suggest {
        suggester: Card,
        suspect: Card,
        weapon: Card,
        room: Card,
        refuter: Option<Card>,
        card_shown: Option<Card>,
    },
    /// A formal accusation. Right or wrong, the game ends here.
    Accuse {
        accuser: Card,
        suspect: Card,
        weapon: Card,
        room: Card,
        is_correct: bool,
    },
}

impl Move {
    /// Stable lowercase kind name, as it appears in event logs.
    pub fn name(&self) -> &'static str {
        match self {
            Move::Init { .. } => "init",
            Move::Hand { .. } => "hand",
            Move::Suggest { .. } => "suggest",
            Move::Accuse { .. } => "accuse",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Move::Accuse { .. })
    }
}
