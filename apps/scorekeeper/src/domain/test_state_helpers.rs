//! Test-only game builders for domain unit tests.

use crate::domain::bidding::{next_bidder, place_bid, Bid};
use crate::domain::recovery::restore;
use crate::domain::rules::DEFAULT_NAMES;
use crate::domain::setup::initialize_game;
use crate::domain::state::{Game, Phase, Seat};

pub fn names(players: u8) -> Vec<String> {
    (0..players as usize)
        .map(|i| {
            DEFAULT_NAMES
                .get(i)
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("P{i}"))
        })
        .collect()
}

/// Fresh game in the bidding phase of its first round.
pub fn new_game(players: u8, rounds: u8) -> Game {
    scorekeeper_test_support::logging::init();
    let state = initialize_game(players, rounds, &names(players)).expect("valid setup");
    restore(state).game
}

/// Place bids in turn order. `bids` is indexed by seat.
pub fn bid_in_order(game: &mut Game, bids: &[u8]) {
    let idx = game.active_index();
    while let Some(seat) = next_bidder(&game.state, game.active_round()) {
        place_bid(game, idx, seat, Bid(bids[seat as usize])).expect("legal bid");
    }
}

/// Write entries straight into the active round, bypassing validation.
pub fn force_bets(game: &mut Game, bets: &[Option<u8>]) {
    game.active_round_mut().bets = bets.to_vec();
}

/// Bid, confirm and record hands for the active round, then confirm.
pub fn play_round(game: &mut Game, bids: &[u8], hands: &[u8]) {
    let idx = game.active_index();
    bid_in_order(game, bids);
    crate::domain::bidding::confirm_bids(game, idx).expect("bids confirm");
    for (seat, &h) in hands.iter().enumerate() {
        crate::domain::hands::record_hands(game, idx, seat as Seat, h).expect("hands record");
    }
    assert_eq!(game.phase, Phase::HandsPending);
    crate::domain::hands::confirm_hands(game, idx).expect("hands confirm");
}
