use thiserror::Error;
use uuid::Uuid;

use crate::model::{Card, Clause};

/// Everything that can go wrong while tracking a game. Validation errors
/// reject a move before it produces clauses; `Contradiction` rejects one
/// after, when its clauses cannot coexist with accumulated knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid seating: {0}")]
    InvalidSeating(String),

    #[error("{0} is not seated at this table")]
    UnknownSeat(Card),

    #[error("{0} does not fit where this move used it")]
    InvalidCard(Card),

    #[error("{0} cannot refute their own suggestion")]
    InvalidRefuter(Card),

    #[error("literal {0} does not decode to a card and location")]
    InvalidLiteral(i32),

    #[error("session has no seated players yet")]
    SessionNotInitialized,

    #[error("session is already initialized")]
    AlreadyInitialized,

    #[error("game is over; no further moves are accepted")]
    GameOver,

    /// The rejected clause delta is carried along for diagnosis. Nothing
    /// from it reaches the knowledge base.
    #[error("move contradicts established knowledge ({} clauses rejected)", .clauses.len())]
    Contradiction { clauses: Vec<Clause> },

    #[error("no session stored under {0}")]
    SessionNotFound(Uuid),

    #[error("session store failure: {0}")]
    Store(String),
}
