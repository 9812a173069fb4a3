use serde::{Deserialize, Serialize};

use crate::domain::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

/// Seat index, 0-based, clockwise.
pub type Seat = u8;

/// One scored unit of play.
///
/// `bets` and `hands` hold one slot per seat; `None` means not entered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Trick count for this round.
    pub number: u8,
    /// Trump indicator, informational only.
    pub suit: Suit,
    pub bets: Vec<Option<u8>>,
    pub hands: Vec<Option<u8>>,
    /// Finalized when the round completes; zero until then.
    pub scores: Vec<u16>,
    pub dealer: Seat,
    pub is_complete: bool,
}

impl Round {
    pub fn new(number: u8, suit: Suit, dealer: Seat, players: u8) -> Self {
        let n = players as usize;
        Self {
            number,
            suit,
            bets: vec![None; n],
            hands: vec![None; n],
            scores: vec![0; n],
            dealer,
            is_complete: false,
        }
    }

    pub fn all_bets_set(&self) -> bool {
        self.bets.iter().all(Option::is_some)
    }

    pub fn all_hands_set(&self) -> bool {
        self.hands.iter().all(Option::is_some)
    }

    pub fn any_hands_set(&self) -> bool {
        self.hands.iter().any(Option::is_some)
    }

    /// Sum of entered bets; unset slots count as zero.
    pub fn bet_total(&self) -> u32 {
        self.bets.iter().flatten().map(|&b| b as u32).sum()
    }

    /// Sum of entered hand counts; unset slots count as zero.
    pub fn hand_total(&self) -> u32 {
        self.hands.iter().flatten().map(|&h| h as u32).sum()
    }

    pub fn clear_hands(&mut self) {
        self.hands.iter_mut().for_each(|h| *h = None);
    }
}

/// Entire game, as persisted.
///
/// Transient flags (phase, turn-holder) are never stored here; they are
/// re-derived from `rounds` by `recovery::restore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub players: u8,
    pub player_names: Vec<String>,
    /// Index of the active round. Persisted as a hint only.
    pub current_round: usize,
    /// Configured round count; the round numbered `max_round` opens bidding at seat 0.
    pub max_round: u8,
    /// Highest trick count first, descending to 1.
    pub rounds: Vec<Round>,
}

impl GameState {
    pub fn player_name(&self, seat: Seat) -> &str {
        self.player_names
            .get(seat as usize)
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// First incomplete round, or the last round once every round is complete.
    pub fn first_open_round(&self) -> usize {
        self.rounds
            .iter()
            .position(|r| !r.is_complete)
            .unwrap_or_else(|| self.rounds.len().saturating_sub(1))
    }

    pub fn is_game_complete(&self) -> bool {
        self.rounds.iter().all(|r| r.is_complete)
    }
}

/// Per-round progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Players bid in turn order. `turn` is `None` once every bet is in but
    /// bidding was reopened (cancelled confirmation or rejected total).
    Bidding { turn: Option<Seat> },
    /// All bets entered, waiting for confirmation.
    BidsPending,
    /// Bets locked; hand counts are recorded in any order.
    Hands,
    /// All hands recorded and summing to the trick count, waiting for confirmation.
    HandsPending,
    /// Every round is complete.
    GameOver,
}

impl Phase {
    pub fn bids_confirmed(&self) -> bool {
        matches!(self, Phase::Hands | Phase::HandsPending)
    }

    pub fn turn(&self) -> Option<Seat> {
        match self {
            Phase::Bidding { turn } => *turn,
            _ => None,
        }
    }
}

/// Live game: persisted state plus the derived phase of the active round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub state: GameState,
    pub phase: Phase,
}

impl Game {
    pub fn active_index(&self) -> usize {
        self.state.current_round
    }

    pub fn active_round(&self) -> &Round {
        &self.state.rounds[self.state.current_round]
    }

    pub fn active_round_mut(&mut self) -> &mut Round {
        let idx = self.state.current_round;
        &mut self.state.rounds[idx]
    }
}

/// Seat math helpers for an `n`-seat table.
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i16, players: u8) -> Seat {
    let n = players.max(1) as i16;
    ((seat as i16 + delta).rem_euclid(n)) as Seat
}

/// Returns the next seat clockwise.
#[inline]
pub fn next_seat(seat: Seat, players: u8) -> Seat {
    seat_offset(seat, 1, players)
}

/// Returns the previous seat counter-clockwise.
#[inline]
pub fn prev_seat(seat: Seat, players: u8) -> Seat {
    seat_offset(seat, -1, players)
}

/// Reject operations that target any round but the active one.
pub fn require_active_round(game: &Game, round_index: usize) -> Result<(), DomainError> {
    if round_index != game.active_index() {
        return Err(DomainError::validation(
            ValidationKind::RoundNotActive,
            format!(
                "Round {} is not the active round",
                game.state
                    .rounds
                    .get(round_index)
                    .map(|r| r.number.to_string())
                    .unwrap_or_else(|| format!("#{round_index}"))
            ),
        ));
    }
    Ok(())
}

pub fn require_seat(state: &GameState, who: Seat) -> Result<(), DomainError> {
    if who >= state.players {
        return Err(DomainError::validation(
            ValidationKind::UnknownPlayer,
            format!("No player in seat {who}"),
        ));
    }
    Ok(())
}
