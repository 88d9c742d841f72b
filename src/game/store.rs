use std::collections::HashMap;
use std::sync::Mutex;

use log::trace;
use uuid::Uuid;

use crate::error::Error;

use super::session::Session;

pub type SessionId = Uuid;

/// Durable home for sessions, keyed by id. A save must be readable back by
/// the time it returns; beyond that the medium is the implementor's
/// business.
pub trait SessionStore {
    fn save(&self, session: &Session) -> Result<(), Error>;
    fn load(&self, id: SessionId) -> Result<Session, Error>;
    fn index(&self) -> Result<Vec<SessionId>, Error>;
}

/// In-memory store keeping each session as a serialized document, the same
/// shape an external document store would hold.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<SessionId, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, session: &Session) -> Result<(), Error> {
        let document =
            serde_json::to_string(session).map_err(|error| Error::Store(error.to_string()))?;
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| Error::Store("session table poisoned".into()))?;
        trace!(
            target: "store",
            "save {} ({} bytes)",
            session.id(),
            document.len()
        );
        sessions.insert(session.id(), document);
        Ok(())
    }

    fn load(&self, id: SessionId) -> Result<Session, Error> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| Error::Store("session table poisoned".into()))?;
        let document = sessions.get(&id).ok_or(Error::SessionNotFound(id))?;
        serde_json::from_str(document).map_err(|error| Error::Store(error.to_string()))
    }

    fn index(&self) -> Result<Vec<SessionId>, Error> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| Error::Store("session table poisoned".into()))?;
        Ok(sessions.keys().copied().collect())
    }
}
