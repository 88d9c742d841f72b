use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

use crate::error::Error;

use super::card::Card;
use super::location::Location;

const LOCATION_BITS: u32 = 3;
const LOCATION_MASK: i32 = 0b111;

/// One atomic proposition, "card C sits at location L", packed into an
/// integer: card index in the high bits, location index in the low three.
/// A negative value asserts the negation. Zero is not a literal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Literal(i32);

impl Literal {
    /// Encode a card/location pair as a positive literal.
    pub fn encode(card: Card, location: Location) -> Self {
        debug_assert!(location.index() <= 6, "seat location must be a suspect");
        Self((card.index() as i32) << LOCATION_BITS | location.index() as i32)
    }

    /// Recover the card/location pair. Succeeds exactly for values `encode`
    /// can produce; negations decode through `var` first.
    pub fn decode(self) -> Result<(Card, Location), Error> {
        if self.0 <= 0 {
            return Err(Error::InvalidLiteral(self.0));
        }
        let card = u8::try_from(self.0 >> LOCATION_BITS)
            .ok()
            .and_then(Card::from_index)
            .ok_or(Error::InvalidLiteral(self.0))?;
        let location = Location::from_index((self.0 & LOCATION_MASK) as u8)
            .ok_or(Error::InvalidLiteral(self.0))?;
        Ok((card, location))
    }

    pub fn from_raw(raw: i32) -> Result<Self, Error> {
        let literal = Self(raw);
        literal.var().decode()?;
        Ok(literal)
    }

    pub fn raw(self) -> i32 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The positive literal carrying this literal's proposition.
    pub fn var(self) -> Literal {
        Literal(self.0.abs())
    }
}

impl Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Literal {
        Literal(-self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.var().decode() {
            Ok((card, location)) => {
                let sign = if self.is_positive() { "" } else { "-" };
                write!(f, "{}{}@{}", sign, card, location)
            }
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::card::DECK;

    #[test]
    fn test_encoding_packs_card_and_location_bits() {
        let literal = Literal::encode(Card::Scarlett, Location::CaseFile);
        assert_eq!(literal.raw(), 8);
        let literal = Literal::encode(Card::White, Location::Seat(Card::White));
        assert_eq!(literal.raw(), 6 << 3 | 6);
        let literal = Literal::encode(Card::Study, Location::Seat(Card::Scarlett));
        assert_eq!(literal.raw(), 22 << 3 | 1);
    }

    #[test]
    fn test_every_deck_card_round_trips_through_every_place() {
        let mut places = vec![Location::CaseFile];
        places.extend(crate::model::card::SUSPECTS.map(Location::Seat));
        for card in DECK {
            for &place in &places {
                let literal = Literal::encode(card, place);
                assert!(literal.is_positive());
                assert_eq!(literal.decode().unwrap(), (card, place));
            }
        }
    }

    #[test]
    fn test_negation_flips_sign_only() {
        let literal = Literal::encode(Card::Rope, Location::CaseFile);
        let negated = -literal;
        assert!(!negated.is_positive());
        assert_eq!(negated.var(), literal);
        assert_eq!(-negated, literal);
    }

    #[test]
    fn test_invalid_raw_values_do_not_decode() {
        assert!(matches!(Literal(0).decode(), Err(Error::InvalidLiteral(0))));
        assert!(matches!(Literal(-9).decode(), Err(Error::InvalidLiteral(-9))));
        // location index 7 is unused
        assert!(Literal(1 << 3 | 7).decode().is_err());
        // card index 23 is off the end of the deck
        assert!(Literal(23 << 3).decode().is_err());
        assert!(Literal::from_raw(7).is_err());
        assert!(Literal::from_raw(9).is_ok());
    }

    #[test]
    fn test_display_reads_as_card_at_place() {
        let literal = Literal::encode(Card::Kitchen, Location::Seat(Card::White));
        assert_eq!(literal.to_string(), "kitchen@white");
        assert_eq!((-literal).to_string(), "-kitchen@white");
    }
}
