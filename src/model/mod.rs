mod card;
mod clause;
mod event_record;
mod game_move;
mod literal;
mod location;
mod notepad;
mod session_status;
mod tri_state;

pub use card::{Card, Category, DECK, ROOMS, SUSPECTS, WEAPONS};
pub use clause::Clause;
pub use event_record::EventRecord;
pub use game_move::Move;
pub use literal::Literal;
pub use location::Location;
pub use notepad::Notepad;
pub use session_status::SessionStatus;
pub use tri_state::TriState;
