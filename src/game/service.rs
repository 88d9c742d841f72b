use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::info;

use crate::error::Error;
use crate::model::{Card, Move};

use super::session::Session;
use super::store::{SessionId, SessionStore};

/// Front door for stored games: creates sessions and funnels every move
/// through load, append, save. A per-session lock serializes writers to
/// the same game; distinct games never contend.
pub struct GameService<S: SessionStore> {
    store: S,
    locks: Mutex<HashMap<SessionId, Arc<Mutex<()>>>>,
}

impl<S: SessionStore> GameService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Seat a table and persist the opening state.
    pub fn create(&self, players: Vec<Card>, me: Option<Card>) -> Result<Session, Error> {
        let mut session = Session::new();
        session.append(Move::Init { players, me })?;
        self.store.save(&session)?;
        info!(target: "service", "created session {}", session.id());
        Ok(session)
    }

    /// Apply one move to a stored session. The new state is saved before
    /// it is acknowledged; a rejected move persists nothing.
    pub fn apply(&self, id: SessionId, game_move: Move) -> Result<Session, Error> {
        let lock = self.session_lock(id)?;
        let _guard = lock
            .lock()
            .map_err(|_| Error::Store("session lock poisoned".into()))?;
        let mut session = self.store.load(id)?;
        session.append(game_move)?;
        self.store.save(&session)?;
        Ok(session)
    }

    pub fn show(&self, id: SessionId) -> Result<Session, Error> {
        self.store.load(id)
    }

    pub fn index(&self) -> Result<Vec<SessionId>, Error> {
        self.store.index()
    }

    fn session_lock(&self, id: SessionId) -> Result<Arc<Mutex<()>>, Error> {
        let mut locks = self
            .locks
            .lock()
            .map_err(|_| Error::Store("lock table poisoned".into()))?;
        Ok(Arc::clone(locks.entry(id).or_default()))
    }
}
