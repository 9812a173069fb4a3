use crate::domain::bidding::{confirm_bids, place_bid, Bid};
use crate::domain::hands::record_hands;
use crate::domain::recovery::{check_integrity, derive_phase, restore};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{bid_in_order, new_game, play_round};
use crate::errors::domain::DomainError;

#[test]
fn restore_recomputes_turn_from_bets() {
    let mut game = new_game(4, 3);
    place_bid(&mut game, 0, 0, Bid(1)).unwrap();
    place_bid(&mut game, 0, 1, Bid(0)).unwrap();

    let restored = restore(game.state.clone());
    assert!(restored.recovered.is_none());
    assert_eq!(restored.game, game);
    assert_eq!(restored.game.phase, Phase::Bidding { turn: Some(2) });
}

#[test]
fn restore_ignores_persisted_round_pointer() {
    let mut game = new_game(4, 3);
    play_round(&mut game, &[1, 2, 0, 1], &[1, 2, 0, 0]);

    let mut stale = game.state.clone();
    stale.current_round = 0;
    let restored = restore(stale);
    assert_eq!(restored.game.active_index(), 1);
    assert_eq!(restored.game.phase, Phase::Bidding { turn: Some(1) });
}

#[test]
fn all_bets_and_no_hands_restores_pending_confirmation() {
    let mut game = new_game(4, 3);
    bid_in_order(&mut game, &[1, 2, 0, 1]);
    confirm_bids(&mut game, 0).unwrap();

    // confirmed-but-empty is indistinguishable from pending once persisted
    let restored = restore(game.state.clone());
    assert_eq!(restored.game.phase, Phase::BidsPending);
}

#[test]
fn partial_hands_restore_hand_recording() {
    let mut game = new_game(4, 3);
    bid_in_order(&mut game, &[1, 2, 0, 1]);
    confirm_bids(&mut game, 0).unwrap();
    record_hands(&mut game, 0, 1, 2).unwrap();

    let restored = restore(game.state.clone());
    assert_eq!(restored.game.phase, Phase::Hands);
    assert_eq!(derive_phase(&game.state, 0), Phase::Hands);
}

#[test]
fn hands_without_bets_are_cleared_on_restore() {
    let mut game = new_game(4, 3);
    place_bid(&mut game, 0, 0, Bid(1)).unwrap();
    game.active_round_mut().hands[0] = Some(1);

    let restored = restore(game.state.clone());
    assert!(matches!(
        restored.recovered,
        Some(DomainError::InconsistentState(_))
    ));
    assert_eq!(restored.game.active_round().hands, vec![None; 4]);
    assert_eq!(restored.game.phase, Phase::Bidding { turn: Some(1) });
}

#[test]
fn wrong_hand_total_is_cleared_on_restore() {
    let mut game = new_game(4, 3);
    bid_in_order(&mut game, &[1, 2, 0, 1]);
    game.active_round_mut().hands = vec![Some(0), Some(1), Some(0), Some(0)];

    let restored = restore(game.state.clone());
    assert!(restored.recovered.is_some());
    assert_eq!(restored.game.active_round().hands, vec![None; 4]);
    assert_eq!(restored.game.phase, Phase::Hands);
}

#[test]
fn finished_game_restores_game_over_on_last_round() {
    let mut game = new_game(2, 1);
    play_round(&mut game, &[1, 1], &[1, 0]);
    let restored = restore(game.state.clone());
    assert_eq!(restored.game.phase, Phase::GameOver);
    assert_eq!(restored.game.active_index(), 0);
}

#[test]
fn integrity_rejects_malformed_snapshots() {
    let game = new_game(4, 3);
    assert!(check_integrity(&game.state).is_ok());

    let mut short = game.state.clone();
    short.rounds[1].bets.pop();
    assert!(check_integrity(&short).is_err());

    let mut dealer = game.state.clone();
    dealer.rounds[0].dealer = 7;
    assert!(check_integrity(&dealer).is_err());

    let mut too_big = game.state.clone();
    too_big.rounds[2].bets[0] = Some(5);
    assert!(check_integrity(&too_big).is_err());

    let mut gap = game.state.clone();
    gap.rounds[1].is_complete = true;
    assert!(check_integrity(&gap).is_err());

    let mut empty = game.state.clone();
    empty.rounds.clear();
    assert!(check_integrity(&empty).is_err());
}

#[test]
fn integrity_rejects_misnumbered_rounds() {
    let game = new_game(3, 3);

    let mut zero = game.state.clone();
    zero.rounds[2].number = 0;
    assert!(check_integrity(&zero).is_err());

    let mut swapped = game.state.clone();
    swapped.rounds[0].number = 2;
    swapped.rounds[1].number = 3;
    assert!(check_integrity(&swapped).is_err());

    let mut short = game.state.clone();
    short.max_round = 4;
    assert!(check_integrity(&short).is_err());
}
