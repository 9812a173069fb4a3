//! Property tests for the round factory and the bidding protocol.
//!
//! Properties tested:
//! - Rounds descend from the configured count to 1 with a valid dealer
//! - Turn order visits every seat once, opening left of the dealer
//! - The last bidder is never offered the value that makes total bets equal the trick count
//! - Bidders other than the last are offered the full range

use proptest::prelude::*;

use crate::domain::bidding::{
    forbidden_bid, last_bidder, legal_bids, next_bidder, place_bid, start_seat, turn_order, Bid,
};
use crate::domain::setup::build_rounds;
use crate::domain::state::{next_seat, Phase};
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::new_game;

fn table() -> impl Strategy<Value = (u8, u8)> {
    (2u8..=10, 1u8..=13)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: factory output is deterministic and well formed
    #[test]
    fn prop_round_factory_shape((players, rounds) in table()) {
        let built = build_rounds(players, rounds);
        prop_assert_eq!(&built, &build_rounds(players, rounds));
        prop_assert_eq!(built.len(), rounds as usize);
        for (idx, round) in built.iter().enumerate() {
            prop_assert_eq!(round.number as usize, rounds as usize - idx);
            prop_assert!(round.dealer < players);
            prop_assert_eq!(round.bets.len(), players as usize);
        }
        prop_assert_eq!(built[0].dealer, players - 1);
    }

    /// Property: each seat bids exactly once per round
    #[test]
    fn prop_turn_order_is_a_rotation((players, rounds) in table(), pick in any::<prop::sample::Index>()) {
        let game = new_game(players, rounds);
        let round = &game.state.rounds[pick.index(rounds as usize)];
        let order = turn_order(&game.state, round);

        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..players).collect::<Vec<_>>());

        let expected_start = if round.number == rounds { 0 } else { next_seat(round.dealer, players) };
        prop_assert_eq!(order[0], expected_start);
        prop_assert_eq!(start_seat(&game.state, round), expected_start);
        prop_assert_eq!(*order.last().unwrap(), last_bidder(&game.state, round));
    }

    /// Property: forbidden value is excluded for the last bidder only
    #[test]
    fn prop_last_bidder_cannot_make_total_match(
        (players, rounds) in table(),
        raw in prop::collection::vec(any::<u8>(), 10),
    ) {
        let mut game = new_game(players, rounds);
        let number = game.active_round().number;
        let last = last_bidder(&game.state, game.active_round());

        while let Some(seat) = next_bidder(&game.state, game.active_round()) {
            let round = game.active_round();
            let legal = legal_bids(&game.state, round, seat);
            prop_assert!(!legal.is_empty());

            if seat == last {
                let forbidden = forbidden_bid(round, seat);
                if let Some(f) = forbidden {
                    prop_assert!(!legal.contains(&Bid(f)));
                }
                let offered = legal.len() + usize::from(forbidden.is_some());
                prop_assert_eq!(offered, number as usize + 1);
            } else {
                prop_assert_eq!(legal.len(), number as usize + 1);
            }

            let choice = legal[raw[seat as usize] as usize % legal.len()];
            place_bid(&mut game, 0, seat, choice).unwrap();
        }

        prop_assert_eq!(game.phase, Phase::BidsPending);
        prop_assert_ne!(game.active_round().bet_total(), number as u32);
    }
}
