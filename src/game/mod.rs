mod rules;
mod service;
mod session;
mod store;

pub use rules::{compile, MAX_PLAYERS, MIN_PLAYERS};
pub use service::GameService;
pub use session::Session;
pub use store::{MemoryStore, SessionId, SessionStore};
