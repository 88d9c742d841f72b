use serde::{Deserialize, Serialize};

use super::card::Card;

/// Lifecycle of a session. The terminal states carry the accusing seat;
/// either way the session stays readable but accepts no further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    Won(Card),
    Lost(Card),
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::InProgress
    }
}
