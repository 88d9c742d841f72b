use serde::{Deserialize, Serialize};
use std::fmt;

/// The three kinds of deck card. Category order is fixed so anything that
/// iterates categories produces the same result run to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

impl Category {
    pub fn all() -> [Category; 3] {
        [Category::Suspect, Category::Weapon, Category::Room]
    }

    /// Deck cards of this category, in deck order.
    pub fn members(self) -> &'static [Card] {
        match self {
            Category::Suspect => &SUSPECTS,
            Category::Weapon => &WEAPONS,
            Category::Room => &ROOMS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Suspect => "suspect",
            Category::Weapon => "weapon",
            Category::Room => "room",
        };
        write!(f, "{}", name)
    }
}

/// One card of the standard 22-card deck. Discriminants are the wire
/// indices: suspects 1..=6, weapons 7..=12, rooms 13..=22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Scarlett = 1,
    Green,
    Mustard,
    Plum,
    Peacock,
    White,
    Candlestick,
    Dagger,
    Pipe,
    Revolver,
    Rope,
    Wrench,
    Kitchen,
    Ballroom,
    Conservatory,
    DiningRoom,
    Cellar,
    BilliardRoom,
    Library,
    Lounge,
    Hall,
    Study,
}

pub const SUSPECTS: [Card; 6] = [
    Card::Scarlett,
    Card::Green,
    Card::Mustard,
    Card::Plum,
    Card::Peacock,
    Card::White,
];

pub const WEAPONS: [Card; 6] = [
    Card::Candlestick,
    Card::Dagger,
    Card::Pipe,
    Card::Revolver,
    Card::Rope,
    Card::Wrench,
];

pub const ROOMS: [Card; 10] = [
    Card::Kitchen,
    Card::Ballroom,
    Card::Conservatory,
    Card::DiningRoom,
    Card::Cellar,
    Card::BilliardRoom,
    Card::Library,
    Card::Lounge,
    Card::Hall,
    Card::Study,
];

/// The full deck in index order. Notepad rows follow this order.
pub const DECK: [Card; 22] = [
    Card::Scarlett,
    Card::Green,
    Card::Mustard,
    Card::Plum,
    Card::Peacock,
    Card::White,
    Card::Candlestick,
    Card::Dagger,
    Card::Pipe,
    Card::Revolver,
    Card::Rope,
    Card::Wrench,
    Card::Kitchen,
    Card::Ballroom,
    Card::Conservatory,
    Card::DiningRoom,
    Card::Cellar,
    Card::BilliardRoom,
    Card::Library,
    Card::Lounge,
    Card::Hall,
    Card::Study,
];

impl Card {
    /// Stable wire index, 1..=22.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1..=22 => Some(DECK[index as usize - 1]),
            _ => None,
        }
    }

    pub fn category(self) -> Category {
        match self.index() {
            1..=6 => Category::Suspect,
            7..=12 => Category::Weapon,
            _ => Category::Room,
        }
    }

    pub fn is_suspect(self) -> bool {
        self.category() == Category::Suspect
    }

    pub fn name(self) -> &'static str {
        match self {
            Card::Scarlett => "scarlett",
            Card::Green => "green",
            Card::Mustard => "mustard",
            Card::Plum => "plum",
            Card::Peacock => "peacock",
            Card::White => "white",
            Card::Candlestick => "candlestick",
            Card::Dagger => "dagger",
            Card::Pipe => "pipe",
            Card::Revolver => "revolver",
            Card::Rope => "rope",
            Card::Wrench => "wrench",
            Card::Kitchen => "kitchen",
            Card::Ballroom => "ballroom",
            Card::Conservatory => "conservatory",
            Card::DiningRoom => "dining_room",
            Card::Cellar => "cellar",
            Card::BilliardRoom => "billiard_room",
            Card::Library => "library",
            Card::Lounge => "lounge",
            Card::Hall => "hall",
            Card::Study => "study",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
