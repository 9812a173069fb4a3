use std::ops::RangeInclusive;

use crate::domain::state::Seat;
use crate::domain::Suit;

pub const MIN_PLAYERS: u8 = 2;
/// Ceiling enforced by the setup form only; the engine accepts larger tables.
pub const SETUP_MAX_PLAYERS: u8 = 10;
pub const MIN_ROUNDS: u8 = 1;

pub const DEFAULT_PLAYERS: u8 = 4;
pub const DEFAULT_ROUNDS: u8 = 10;
pub const DEFAULT_NAMES: [&str; 10] = [
    "Fuzzy", "Duzzy", "Kasper", "Wesley", "Mili", "Tigger", "Tiger", "Goose", "Moose", "Fatty",
];

/// Bonus for taking exactly the number of hands bid.
pub const EXACT_BID_BONUS: u16 = 10;

// Round schedule: `round_count` rounds, trick count descending to 1.
pub fn trick_count_for_round(round_count: u8, round_index: usize) -> Option<u8> {
    if round_index >= round_count as usize {
        return None;
    }
    Some(round_count - round_index as u8)
}

/// Trump cycles from the first round: SPADES, HEARTS, DIAMONDS, CLUBS, NO_TRUMP, ...
pub fn suit_for_round(round_count: u8, number: u8) -> Suit {
    Suit::nth_in_cycle(round_count.saturating_sub(number) as usize)
}

/// Dealer for the round with trick count `number`.
///
/// The opening round is dealt by the last seat; after that the deal starts
/// at seat 0 and rotates clockwise.
pub fn dealer_for_round(players: u8, round_count: u8, number: u8) -> Seat {
    if number == round_count {
        return players - 1;
    }
    let k = (round_count - number) as usize;
    ((k - 1) % players as usize) as Seat
}

pub fn valid_bid_range(number: u8) -> RangeInclusive<u8> {
    0..=number
}
