use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::Card;

/// Where a card can sit: the hidden case file, or the hand of the player
/// seated as a given suspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    CaseFile,
    Seat(Card),
}

impl Location {
    /// Three-bit location index: 0 for the case file, the suspect's card
    /// index (1..=6) for a seat.
    pub fn index(self) -> u8 {
        match self {
            Location::CaseFile => 0,
            Location::Seat(card) => card.index(),
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Location::CaseFile),
            1..=6 => Card::from_index(index).map(Location::Seat),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::CaseFile => write!(f, "file"),
            Location::Seat(card) => write!(f, "{}", card),
        }
    }
}
