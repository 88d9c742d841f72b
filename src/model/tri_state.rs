use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer to an entailment query. `Unknown` is the resting state of any
/// fact the table has not pinned down yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriState {
    True,
    False,
    Unknown,
}

impl TriState {
    pub fn is_known(self) -> bool {
        !matches!(self, TriState::Unknown)
    }

    /// Notepad mark: deduced present, deduced absent, undecided.
    pub fn mark(self) -> &'static str {
        match self {
            TriState::True => "1",
            TriState::False => "0",
            TriState::Unknown => "-",
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}
