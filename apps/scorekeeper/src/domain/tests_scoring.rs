use crate::domain::scoring::{
    apply_round_scoring, compute_round_scores, highest_score, round_score, total_score,
    winning_players,
};
use crate::domain::state::Round;
use crate::domain::test_state_helpers::{new_game, play_round};
use crate::domain::Suit;

#[test]
fn scoring_bonus_only_on_exact_bid() {
    assert_eq!(round_score(Some(2), 2), 12);
    assert_eq!(round_score(Some(0), 0), 10);
    assert_eq!(round_score(Some(1), 3), 3);
    assert_eq!(round_score(Some(3), 0), 0);
    assert_eq!(round_score(None, 2), 2);
}

#[test]
fn scoring_exact_bid_bonus_applied_once() {
    // bids [3,2,4,1], hands [3,2,7,1] -> [13,12,7,11]
    let mut round = Round::new(13, Suit::Clubs, 0, 4);
    round.bets = vec![Some(3), Some(2), Some(4), Some(1)];
    round.hands = vec![Some(3), Some(2), Some(7), Some(1)];

    apply_round_scoring(&mut round);
    assert_eq!(round.scores, vec![13, 12, 7, 11]);
    assert!(round.is_complete);

    // second call is a no-op
    round.hands = vec![Some(0), Some(0), Some(13), Some(0)];
    apply_round_scoring(&mut round);
    assert_eq!(round.scores, vec![13, 12, 7, 11]);
}

#[test]
fn scoring_no_trump_does_not_affect_scoring_math() {
    let mut round = Round::new(13, Suit::NoTrump, 2, 4);
    round.bets = vec![Some(0), Some(5), Some(8), Some(0)];
    round.hands = vec![Some(0), Some(5), Some(8), Some(0)];
    assert_eq!(compute_round_scores(&round), vec![10, 15, 18, 10]);
}

#[test]
fn totals_accumulate_across_rounds() {
    let mut game = new_game(3, 2);
    // round of 2: bids [1,0,0], hands [1,1,0] -> [11,1,10]
    play_round(&mut game, &[1, 0, 0], &[1, 1, 0]);
    assert_eq!(total_score(&game.state, 0), 11);
    assert_eq!(highest_score(&game.state), 11);
    // winners stay empty while rounds remain
    assert!(winning_players(&game.state).is_empty());

    // round of 1: dealer 0, order 1,2,0; bids [0,1,1], hands [0,0,1] -> [10,0,11]
    play_round(&mut game, &[0, 1, 1], &[0, 0, 1]);
    assert_eq!(total_score(&game.state, 0), 21);
    assert_eq!(total_score(&game.state, 1), 1);
    assert_eq!(total_score(&game.state, 2), 21);
    assert!(game.state.is_game_complete());
    assert_eq!(winning_players(&game.state), vec![0, 2]);
}
