use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::{Card, DECK};
use super::location::Location;
use super::tri_state::TriState;

/// The deduction sheet: one tri-state cell for every card and place. Rows
/// follow deck order; columns are the case file first, then seats in
/// seating order. A snapshot, not a live view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notepad {
    places: Vec<Location>,
    rows: Vec<Vec<TriState>>,
}

impl Notepad {
    /// The sheet of a table with nobody seated: no columns at all.
    pub fn empty() -> Self {
        Self {
            places: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Fill a sheet by asking `cell` about every card/place pair, in row
    /// then column order.
    pub(crate) fn compute(
        places: Vec<Location>,
        mut cell: impl FnMut(Card, Location) -> TriState,
    ) -> Self {
        let mut rows = Vec::with_capacity(DECK.len());
        for card in DECK {
            let mut row = Vec::with_capacity(places.len());
            for &place in &places {
                row.push(cell(card, place));
            }
            rows.push(row);
        }
        Self { places, rows }
    }

    pub fn places(&self) -> &[Location] {
        &self.places
    }

    pub fn get(&self, card: Card, location: Location) -> Option<TriState> {
        let row = DECK.iter().position(|&c| c == card)?;
        let column = self.places.iter().position(|&p| p == location)?;
        Some(self.rows[row][column])
    }

    /// Every cell, in deck then place order.
    pub fn entries(&self) -> impl Iterator<Item = (Card, Location, TriState)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, states)| {
            states
                .iter()
                .enumerate()
                .map(move |(column, &state)| (DECK[row], self.places[column], state))
        })
    }
}

impl fmt::Display for Notepad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.places.is_empty() {
            return write!(f, "(no seats)");
        }
        let label_width = DECK
            .iter()
            .map(|card| card.name().len())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .places
            .iter()
            .map(|place| place.to_string().len())
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (place, &width) in self.places.iter().zip(&widths) {
            write!(f, "  {:>width$}", place.to_string())?;
        }
        for (states, card) in self.rows.iter().zip(DECK.iter()) {
            write!(f, "\n{:<label_width$}", card.name())?;
            for (state, &width) in states.iter().zip(&widths) {
                write!(f, "  {:>width$}", state.mark())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_places() -> Vec<Location> {
        vec![
            Location::CaseFile,
            Location::Seat(Card::Scarlett),
            Location::Seat(Card::Green),
        ]
    }

    #[test]
    fn test_compute_walks_deck_rows_and_place_columns() {
        let notepad = Notepad::compute(sample_places(), |card, place| {
            if card == Card::Dagger && place == Location::Seat(Card::Scarlett) {
                TriState::True
            } else if card == Card::Dagger {
                TriState::False
            } else {
                TriState::Unknown
            }
        });
        assert_eq!(
            notepad.get(Card::Dagger, Location::Seat(Card::Scarlett)),
            Some(TriState::True)
        );
        assert_eq!(
            notepad.get(Card::Dagger, Location::CaseFile),
            Some(TriState::False)
        );
        assert_eq!(
            notepad.get(Card::Rope, Location::CaseFile),
            Some(TriState::Unknown)
        );
        assert_eq!(notepad.entries().count(), 22 * 3);
    }

    #[test]
    fn test_unknown_places_have_no_cell() {
        let notepad = Notepad::compute(sample_places(), |_, _| TriState::Unknown);
        assert_eq!(notepad.get(Card::Hall, Location::Seat(Card::White)), None);
        assert_eq!(Notepad::empty().get(Card::Hall, Location::CaseFile), None);
    }

    #[test]
    fn test_display_renders_one_row_per_card() {
        let notepad = Notepad::compute(sample_places(), |_, _| TriState::Unknown);
        let rendered = notepad.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 23);
        assert!(lines[0].contains("file"));
        assert!(lines[0].contains("scarlett"));
        assert!(lines[1].starts_with("scarlett"));
        assert!(lines[1].ends_with("-"));
        assert_eq!(Notepad::empty().to_string(), "(no seats)");
    }
}
