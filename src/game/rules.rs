use std::collections::BTreeSet;

use itertools::Itertools;
use log::trace;

use crate::error::Error;
use crate::model::{Card, Category, Clause, Literal, Location, Move, DECK};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Compile a move into the clauses it teaches, given the seats already at
/// the table. Pure and side-effect free, so a move can be vetted without
/// touching any session. A validation failure yields no clauses at all.
pub fn compile(game_move: &Move, seats: &[Card]) -> Result<Vec<Clause>, Error> {
    match game_move {
        Move::Init { players, me } => {
            validate_seating(players, *me)?;
            Ok(init_clauses(players))
        }
        Move::Hand { owner, cards } => {
            require_seated(seats, *owner)?;
            Ok(hand_clauses(*owner, cards))
        }
        Move::Suggest {
            suggester,
            suspect,
            weapon,
            room,
            refuter,
            card_shown,
        } => suggest_clauses(
            seats,
            *suggester,
            [*suspect, *weapon, *room],
            *refuter,
            *card_shown,
        ),
        Move::Accuse {
            accuser,
            suspect,
            weapon,
            room,
            ..
        } => {
            require_seated(seats, *accuser)?;
            require_trio([*suspect, *weapon, *room])?;
            // an accusation reveals nothing the table can use
            Ok(Vec::new())
        }
    }
}

/// Column order of a seated table: the case file first, then one place per
/// seat in seating order.
pub(crate) fn places(seats: &[Card]) -> Vec<Location> {
    let mut places = Vec::with_capacity(seats.len() + 1);
    places.push(Location::CaseFile);
    places.extend(seats.iter().copied().map(Location::Seat));
    places
}

fn validate_seating(players: &[Card], me: Option<Card>) -> Result<(), Error> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(Error::InvalidSeating(format!(
            "expected {} to {} seats, got {}",
            MIN_PLAYERS,
            MAX_PLAYERS,
            players.len()
        )));
    }
    for (position, player) in players.iter().enumerate() {
        if !player.is_suspect() {
            return Err(Error::InvalidSeating(format!("{} is not a suspect", player)));
        }
        if players[..position].contains(player) {
            return Err(Error::InvalidSeating(format!("duplicate seat: {}", player)));
        }
    }
    if let Some(me) = me {
        require_seated(players, me)?;
    }
    Ok(())
}

fn require_seated(seats: &[Card], seat: Card) -> Result<(), Error> {
    if seats.contains(&seat) {
        Ok(())
    } else {
        Err(Error::UnknownSeat(seat))
    }
}

fn require_trio([suspect, weapon, room]: [Card; 3]) -> Result<(), Error> {
    require_category(suspect, Category::Suspect)?;
    require_category(weapon, Category::Weapon)?;
    require_category(room, Category::Room)
}

fn require_category(card: Card, category: Category) -> Result<(), Error> {
    if card.category() == category {
        Ok(())
    } else {
        Err(Error::InvalidCard(card))
    }
}

/// The ground rules every player knows before the first turn: each deck
/// card sits in exactly one place, and the case file holds exactly one
/// card of each category.
fn init_clauses(players: &[Card]) -> Vec<Clause> {
    let places = places(players);
    let mut clauses = Vec::new();

    // each card somewhere
    for card in DECK {
        clauses.push(
            places
                .iter()
                .map(|&place| Literal::encode(card, place))
                .collect(),
        );
    }

    // and nowhere else
    for card in DECK {
        for (a, b) in places.iter().copied().tuple_combinations() {
            clauses.push(Clause::new([
                -Literal::encode(card, a),
                -Literal::encode(card, b),
            ]));
        }
    }

    // the file holds a suspect, a weapon and a room
    for category in Category::all() {
        clauses.push(
            category
                .members()
                .iter()
                .map(|&card| Literal::encode(card, Location::CaseFile))
                .collect(),
        );
    }

    // and only one of each
    for category in Category::all() {
        for (a, b) in category.members().iter().copied().tuple_combinations() {
            clauses.push(Clause::new([
                -Literal::encode(a, Location::CaseFile),
                -Literal::encode(b, Location::CaseFile),
            ]));
        }
    }

    trace!(
        target: "rules",
        "init compiled {} clauses for {} seats",
        clauses.len(),
        players.len()
    );
    clauses
}

/// A declaration of one complete hand: one unit clause per deck card,
/// positive for the cards held, negative for all the rest.
fn hand_clauses(owner: Card, cards: &BTreeSet<Card>) -> Vec<Clause> {
    let seat = Location::Seat(owner);
    DECK.iter()
        .map(|&card| {
            let literal = Literal::encode(card, seat);
            Clause::unit(if cards.contains(&card) {
                literal
            } else {
                -literal
            })
        })
        .collect()
}

fn suggest_clauses(
    seats: &[Card],
    suggester: Card,
    trio: [Card; 3],
    refuter: Option<Card>,
    card_shown: Option<Card>,
) -> Result<Vec<Clause>, Error> {
    require_seated(seats, suggester)?;
    require_trio(trio)?;
    if let Some(refuter) = refuter {
        require_seated(seats, refuter)?;
        if refuter == suggester {
            return Err(Error::InvalidRefuter(refuter));
        }
    }
    if let Some(shown) = card_shown {
        if !trio.contains(&shown) {
            return Err(Error::InvalidCard(shown));
        }
    }

    let mut clauses = Vec::new();
    match refuter {
        Some(refuter) => {
            match card_shown {
                // we saw the card ourselves
                Some(shown) => {
                    clauses.push(Clause::unit(Literal::encode(shown, Location::Seat(refuter))))
                }
                // the refuter holds at least one of the three
                None => clauses.push(
                    trio.iter()
                        .map(|&card| Literal::encode(card, Location::Seat(refuter)))
                        .collect(),
                ),
            }
            // every seat the suggestion passed over could not refute
            for seat in between(seats, suggester, refuter) {
                push_cannot_hold(&mut clauses, seat, trio);
            }
        }
        // nobody could refute, so no other seat holds any of the three
        None => {
            for &seat in seats.iter().filter(|&&seat| seat != suggester) {
                push_cannot_hold(&mut clauses, seat, trio);
            }
        }
    }
    trace!(
        target: "rules",
        "suggest by {} compiled {} clauses",
        suggester,
        clauses.len()
    );
    Ok(clauses)
}

fn push_cannot_hold(clauses: &mut Vec<Clause>, seat: Card, trio: [Card; 3]) {
    for card in trio {
        clauses.push(Clause::unit(-Literal::encode(card, Location::Seat(seat))));
    }
}

/// Seats strictly between suggester and refuter, walking forward around
/// the table from the suggester's chair. Empty when the refuter sits
/// immediately next.
fn between(seats: &[Card], suggester: Card, refuter: Card) -> Vec<Card> {
    let start = match seats.iter().position(|&seat| seat == suggester) {
        Some(position) => position,
        None => return Vec::new(),
    };
    let mut passed = Vec::new();
    let mut position = (start + 1) % seats.len();
    while seats[position] != refuter {
        passed.push(seats[position]);
        position = (position + 1) % seats.len();
    }
    passed
}
