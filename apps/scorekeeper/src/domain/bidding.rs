//! Bidding protocol: turn order, legal bids, bid placement and confirmation.

use tracing::debug;

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{
    next_seat, prev_seat, require_active_round, require_seat, seat_offset, Game, GameState,
    Phase, Round, Seat,
};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Bid(pub u8);

/// Result of placing a bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidOutcome {
    /// Seat on turn after this bid, if any.
    pub next_turn: Option<Seat>,
    /// Every seat has a bet; the round now waits for confirmation.
    pub all_placed: bool,
}

/// Seat that opens bidding for `round`.
///
/// The round numbered like the configured round count always opens at seat 0;
/// every other round opens left of the dealer.
pub fn start_seat(state: &GameState, round: &Round) -> Seat {
    if round.number == state.max_round {
        0
    } else {
        next_seat(round.dealer, state.players)
    }
}

/// Every seat exactly once, clockwise from the start seat.
pub fn turn_order(state: &GameState, round: &Round) -> Vec<Seat> {
    let start = start_seat(state, round);
    (0..state.players as i16)
        .map(|i| seat_offset(start, i, state.players))
        .collect()
}

/// The seat that bids last and is subject to the forbidden-bid rule.
pub fn last_bidder(state: &GameState, round: &Round) -> Seat {
    prev_seat(start_seat(state, round), state.players)
}

/// First seat in turn order without a bet.
pub fn next_bidder(state: &GameState, round: &Round) -> Option<Seat> {
    turn_order(state, round)
        .into_iter()
        .find(|&seat| round.bets[seat as usize].is_none())
}

/// The value `who` may not bid if they bid last: the one that would make
/// total bets equal the trick count. `None` when no value in range does.
pub fn forbidden_bid(round: &Round, who: Seat) -> Option<u8> {
    let others: u32 = round
        .bets
        .iter()
        .enumerate()
        .filter(|(seat, _)| *seat != who as usize)
        .filter_map(|(_, b)| b.map(u32::from))
        .sum();
    (round.number as u32)
        .checked_sub(others)
        .and_then(|v| u8::try_from(v).ok())
}

/// Legal bids for `who`, independent of turn enforcement.
pub fn legal_bids(state: &GameState, round: &Round, who: Seat) -> Vec<Bid> {
    let forbidden = if who == last_bidder(state, round) {
        forbidden_bid(round, who)
    } else {
        None
    };
    valid_bid_range(round.number)
        .filter(|&v| Some(v) != forbidden)
        .map(Bid)
        .collect()
}

/// A seat may bid when it is on turn, or revise a bet it already placed.
///
/// Bets fill in turn order, so a placed bet always precedes the seat on turn.
pub fn may_bid(state: &GameState, round: &Round, who: Seat) -> bool {
    round.bets[who as usize].is_some() || next_bidder(state, round) == Some(who)
}

/// Place (or revise) a bid in the active round.
pub fn place_bid(
    game: &mut Game,
    round_index: usize,
    who: Seat,
    bid: Bid,
) -> Result<BidOutcome, DomainError> {
    let Phase::Bidding { .. } = game.phase else {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            match game.phase {
                Phase::BidsPending => "Bets are awaiting confirmation",
                Phase::GameOver => "The game is over",
                _ => "Bets are locked for this round",
            },
        ));
    };
    require_active_round(game, round_index)?;
    require_seat(&game.state, who)?;

    let state = &game.state;
    let round = &state.rounds[round_index];

    if !may_bid(state, round, who) {
        let on_turn = next_bidder(state, round);
        let detail = match on_turn {
            Some(seat) => format!("It's {}'s turn to bet", state.player_name(seat)),
            None => "Bidding is closed".to_string(),
        };
        return Err(DomainError::turn_violation(on_turn, detail));
    }

    if !legal_bids(state, round, who).contains(&bid) {
        let detail = match forbidden_bid(round, who) {
            Some(f) if f == bid.0 && who == last_bidder(state, round) => format!(
                "{} cannot bid {f}: total bets would equal {}",
                state.player_name(who),
                round.number
            ),
            _ => format!("Bid must be between 0 and {}", round.number),
        };
        return Err(DomainError::validation(ValidationKind::InvalidBid, detail));
    }

    game.state.rounds[round_index].bets[who as usize] = Some(bid.0);

    let next_turn = next_bidder(&game.state, &game.state.rounds[round_index]);
    game.phase = match next_turn {
        Some(seat) => Phase::Bidding { turn: Some(seat) },
        None => Phase::BidsPending,
    };
    debug!(round = round_index, player = who, bid = bid.0, next = ?next_turn, "Bid placed");

    Ok(BidOutcome {
        next_turn,
        all_placed: next_turn.is_none(),
    })
}

/// Lock the bids of the active round and open hand recording.
///
/// Re-validates that every bet is in and that the total differs from the
/// trick count; on failure bidding is reopened.
pub fn confirm_bids(game: &mut Game, round_index: usize) -> Result<(), DomainError> {
    if !matches!(game.phase, Phase::Bidding { .. } | Phase::BidsPending) {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Bets are already confirmed",
        ));
    }
    require_active_round(game, round_index)?;

    let round = &game.state.rounds[round_index];
    let turn = next_bidder(&game.state, round);

    if !round.all_bets_set() {
        game.phase = Phase::Bidding { turn };
        return Err(DomainError::validation(
            ValidationKind::BidsIncomplete,
            "All bets must be entered before confirming",
        ));
    }

    if round.bet_total() == round.number as u32 {
        let number = round.number;
        game.phase = Phase::Bidding { turn: None };
        return Err(DomainError::validation(
            ValidationKind::TotalBidsMatchTricks,
            format!("Total bets cannot equal {number}"),
        ));
    }

    game.phase = Phase::Hands;
    debug!(round = round_index, "Bets confirmed");
    Ok(())
}

/// Reopen bidding without clearing entered bets.
pub fn cancel_bids_confirmation(game: &mut Game, round_index: usize) -> Result<(), DomainError> {
    if game.phase != Phase::BidsPending {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "No bets are awaiting confirmation",
        ));
    }
    require_active_round(game, round_index)?;

    let turn = next_bidder(&game.state, &game.state.rounds[round_index]);
    game.phase = Phase::Bidding { turn };
    Ok(())
}
