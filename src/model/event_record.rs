use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clause::Clause;
use super::game_move::Move;
use super::notepad::Notepad;

/// One applied move, frozen at append time: what happened, the clauses it
/// taught, and the notepad as it stood afterwards. Records are immutable
/// once written; the log only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Fresh per append; replays mint new ones.
    pub id: Uuid,
    /// Position in the log, from 0, no gaps.
    pub seq: u64,
    pub game_move: Move,
    /// The clause delta this move contributed, in emission order.
    pub clauses: Vec<Clause>,
    /// Total stored clauses after this move.
    pub knowledge_size: usize,
    pub notepad: Notepad,
}

impl EventRecord {
    pub fn kind(&self) -> &'static str {
        self.game_move.name()
    }
}
