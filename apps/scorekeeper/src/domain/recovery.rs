//! Re-derive transient state from persisted rounds.
//!
//! Phase and turn-holder are never read from storage. The same pure
//! functions used during live play compute them here, for new games and for
//! loaded snapshots alike.

use tracing::warn;

use crate::domain::bidding::next_bidder;
use crate::domain::state::{Game, GameState, Phase};
use crate::errors::domain::DomainError;

/// A rebuilt game, plus the correction applied on the way, if any.
#[derive(Debug, Clone)]
pub struct Restored {
    pub game: Game,
    pub recovered: Option<DomainError>,
}

/// Reject snapshots that cannot describe a game at all.
pub fn check_integrity(state: &GameState) -> Result<(), DomainError> {
    let n = state.players as usize;
    if state.players < 2 {
        return Err(DomainError::inconsistent("fewer than 2 players"));
    }
    if state.player_names.len() != n {
        return Err(DomainError::inconsistent(format!(
            "{} names for {n} players",
            state.player_names.len()
        )));
    }
    if state.rounds.is_empty() {
        return Err(DomainError::inconsistent("no rounds"));
    }
    if state.max_round as usize != state.rounds.len() {
        return Err(DomainError::inconsistent(format!(
            "{} rounds stored for a game of {}",
            state.rounds.len(),
            state.max_round
        )));
    }

    let mut seen_open = false;
    for (idx, round) in state.rounds.iter().enumerate() {
        if round.bets.len() != n || round.hands.len() != n || round.scores.len() != n {
            return Err(DomainError::inconsistent(format!(
                "round {idx} does not have {n} seats"
            )));
        }
        // rounds count down from max_round to 1
        let expected = state.rounds.len() - idx;
        if round.number as usize != expected {
            return Err(DomainError::inconsistent(format!(
                "round {idx} deals {} cards, expected {expected}",
                round.number
            )));
        }
        if round.dealer >= state.players {
            return Err(DomainError::inconsistent(format!(
                "round {idx} dealer {} out of range",
                round.dealer
            )));
        }
        let over = |v: &Option<u8>| v.is_some_and(|x| x > round.number);
        if round.bets.iter().any(over) || round.hands.iter().any(over) {
            return Err(DomainError::inconsistent(format!(
                "round {idx} has values above {}",
                round.number
            )));
        }
        if round.is_complete {
            if seen_open {
                return Err(DomainError::inconsistent(format!(
                    "round {idx} completed after an open round"
                )));
            }
            if !round.all_bets_set()
                || !round.all_hands_set()
                || round.hand_total() != round.number as u32
            {
                return Err(DomainError::inconsistent(format!(
                    "completed round {idx} is missing entries"
                )));
            }
        } else {
            seen_open = true;
        }
    }
    Ok(())
}

/// Phase of the round at `round_index`, from its entries alone.
pub fn derive_phase(state: &GameState, round_index: usize) -> Phase {
    if state.is_game_complete() {
        return Phase::GameOver;
    }
    let round = &state.rounds[round_index];
    if !round.all_bets_set() {
        return Phase::Bidding {
            turn: next_bidder(state, round),
        };
    }
    if !round.any_hands_set() {
        return Phase::BidsPending;
    }
    if round.all_hands_set() && round.hand_total() == round.number as u32 {
        return Phase::HandsPending;
    }
    Phase::Hands
}

/// Rebuild a live game. Expects `check_integrity` to have passed.
pub fn restore(mut state: GameState) -> Restored {
    let active = state.first_open_round();
    state.current_round = active;

    let mut recovered = None;
    let mut reopen_hands = false;
    if !state.is_game_complete() {
        let round = &mut state.rounds[active];
        if !round.all_bets_set() && round.any_hands_set() {
            round.clear_hands();
            recovered = Some(DomainError::inconsistent(
                "Bets are missing. Please re-enter all bets.",
            ));
        } else if round.all_hands_set() && round.hand_total() != round.number as u32 {
            let number = round.number;
            round.clear_hands();
            reopen_hands = true;
            recovered = Some(DomainError::inconsistent(format!(
                "Recorded hands must add up to {number}. Please record them again."
            )));
        }
    }
    if let Some(err) = &recovered {
        warn!(round = active, error = %err, "Recovered inconsistent round on load");
    }

    // bets were already confirmed before any hand was recorded
    let phase = if reopen_hands {
        Phase::Hands
    } else {
        derive_phase(&state, active)
    };
    Restored {
        game: Game { state, phase },
        recovered,
    }
}
