use log::{info, trace};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::model::{
    Card, Clause, EventRecord, Literal, Location, Move, Notepad, SessionStatus, TriState,
};
use crate::solver::{self, KnowledgeBase};

use super::rules;

/// One tracked game: the seated table, everything deduced so far, and the
/// full move history. All mutation funnels through `append`, which either
/// commits a move whole or leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    seats: Vec<Card>,
    me: Option<Card>,
    knowledge: KnowledgeBase,
    events: Vec<EventRecord>,
    status: SessionStatus,
    notepad: Notepad,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            seats: Vec::new(),
            me: None,
            knowledge: KnowledgeBase::new(),
            events: Vec::new(),
            status: SessionStatus::InProgress,
            notepad: Notepad::empty(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Seating order, empty until the init move lands.
    pub fn seats(&self) -> &[Card] {
        &self.seats
    }

    pub fn me(&self) -> Option<Card> {
        self.me
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// The deduction sheet as of the last committed move.
    pub fn notepad(&self) -> &Notepad {
        &self.notepad
    }

    pub fn initialized(&self) -> bool {
        !self.seats.is_empty()
    }

    /// Ask what the accumulated knowledge says about one card sitting at
    /// one place. A seat location must name a suspect; anything else cannot
    /// encode and is rejected.
    pub fn query(&self, card: Card, location: Location) -> Result<TriState, Error> {
        if let Location::Seat(seat) = location {
            if !seat.is_suspect() {
                return Err(Error::InvalidCard(seat));
            }
        }
        Ok(solver::test(&self.knowledge, Literal::encode(card, location)))
    }

    /// Apply one move: validate, compile, vet the clauses against what is
    /// already known, commit, refresh the notepad, and freeze an event
    /// record. All or nothing; any failure leaves no trace.
    pub fn append(&mut self, game_move: Move) -> Result<&EventRecord, Error> {
        trace!(target: "session", "append {}: {:?}", game_move.name(), game_move);
        if self.status.is_terminal() {
            return Err(Error::GameOver);
        }
        match &game_move {
            Move::Init { .. } if self.initialized() => return Err(Error::AlreadyInitialized),
            Move::Init { .. } => {}
            _ if !self.initialized() => return Err(Error::SessionNotInitialized),
            _ => {}
        }

        let clauses = rules::compile(&game_move, &self.seats)?;

        if let Move::Accuse {
            accuser,
            is_correct,
            ..
        } = &game_move
        {
            self.status = if *is_correct {
                SessionStatus::Won(*accuser)
            } else {
                SessionStatus::Lost(*accuser)
            };
            info!(target: "session", "accusation by {}, {:?}", accuser, self.status);
            return Ok(self.record(game_move, clauses));
        }

        if !solver::solve_with(&self.knowledge, &clauses) {
            return Err(Error::Contradiction { clauses });
        }

        if let Move::Init { players, me } = &game_move {
            self.seats = players.clone();
            self.me = *me;
        }

        self.knowledge.extend(clauses.iter().cloned());
        self.notepad = self.recompute_notepad();
        trace!(
            target: "session",
            "committed {} clauses, knowledge at {}",
            clauses.len(),
            self.knowledge.len()
        );
        Ok(self.record(game_move, clauses))
    }

    /// Rebuild a session by replaying a move history. The rebuilt log
    /// carries the same clause deltas and notepads cell for cell; only the
    /// record ids are minted fresh.
    pub fn replay<'a>(events: impl IntoIterator<Item = &'a EventRecord>) -> Result<Self, Error> {
        let mut session = Self::new();
        for event in events {
            session.append(event.game_move.clone())?;
        }
        Ok(session)
    }

    fn record(&mut self, game_move: Move, clauses: Vec<Clause>) -> &EventRecord {
        let record = EventRecord {
            id: Uuid::new_v4(),
            seq: self.events.len() as u64,
            game_move,
            clauses,
            knowledge_size: self.knowledge.len(),
            notepad: self.notepad.clone(),
        };
        self.events.push(record);
        &self.events[self.events.len() - 1]
    }

    fn recompute_notepad(&self) -> Notepad {
        let knowledge = &self.knowledge;
        Notepad::compute(rules::places(&self.seats), |card, place| {
            solver::test(knowledge, Literal::encode(card, place))
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
