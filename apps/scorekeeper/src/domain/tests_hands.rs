use crate::domain::bidding::confirm_bids;
use crate::domain::hands::{
    cancel_hands_confirmation, confirm_hands, describe_legal_hands, legal_hands, record_hands,
};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{bid_in_order, force_bets, new_game};
use crate::errors::domain::{DomainError, ValidationKind};

fn game_in_hands_phase() -> crate::domain::Game {
    // 4 players, 3 rounds; first round has 3 tricks
    let mut game = new_game(4, 3);
    bid_in_order(&mut game, &[1, 2, 0, 1]);
    confirm_bids(&mut game, 0).unwrap();
    game
}

#[test]
fn hands_need_confirmed_bets() {
    let mut game = new_game(4, 3);
    let err = record_hands(&mut game, 0, 0, 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
}

#[test]
fn legal_hands_shrink_with_assigned_total() {
    let mut game = game_in_hands_phase();
    assert_eq!(legal_hands(game.active_round(), 0), vec![0, 1, 2, 3]);

    record_hands(&mut game, 0, 2, 2).unwrap();
    let round = game.active_round();
    assert_eq!(legal_hands(round, 0), vec![0, 1]);
    // recording again for the same seat ignores its own entry
    assert_eq!(legal_hands(round, 2), vec![0, 1, 2, 3]);
}

#[test]
fn last_unrecorded_player_must_take_the_rest() {
    let mut game = game_in_hands_phase();
    record_hands(&mut game, 0, 0, 1).unwrap();
    record_hands(&mut game, 0, 1, 1).unwrap();
    record_hands(&mut game, 0, 3, 0).unwrap();
    assert_eq!(legal_hands(game.active_round(), 2), vec![1]);

    let err = record_hands(&mut game, 0, 2, 0).unwrap_err();
    assert_eq!(
        err,
        DomainError::validation(ValidationKind::InvalidHands, "Kasper must record 1 hand")
    );
    assert_eq!(game.active_round().hands[2], None);
    assert_eq!(game.phase, Phase::Hands);

    let outcome = record_hands(&mut game, 0, 2, 1).unwrap();
    assert!(outcome.awaiting_confirmation);
    assert_eq!(outcome.total_recorded, 3);
    assert_eq!(game.phase, Phase::HandsPending);
}

#[test]
fn exceeding_trick_count_reverts_the_entry() {
    let mut game = game_in_hands_phase();
    record_hands(&mut game, 0, 0, 2).unwrap();
    let err = record_hands(&mut game, 0, 1, 2).unwrap_err();
    assert_eq!(err, DomainError::capacity_exceeded(3));
    assert_eq!(err.to_string(), "Total hands cannot exceed 3");
    assert_eq!(game.active_round().hands, vec![Some(2), None, None, None]);
}

#[test]
fn missing_bets_reopen_bidding_and_clear_hands() {
    let mut game = game_in_hands_phase();
    record_hands(&mut game, 0, 0, 1).unwrap();
    force_bets(&mut game, &[Some(1), None, Some(0), Some(1)]);

    let err = record_hands(&mut game, 0, 1, 1).unwrap_err();
    assert!(matches!(err, DomainError::InconsistentState(_)));
    assert_eq!(game.active_round().hands, vec![None; 4]);
    assert_eq!(game.phase, Phase::Bidding { turn: Some(1) });
}

#[test]
fn cancel_clears_hands_but_keeps_bets_and_scores() {
    let mut game = game_in_hands_phase();
    for (seat, h) in [(0, 1), (1, 2), (2, 0), (3, 0)] {
        record_hands(&mut game, 0, seat, h).unwrap();
    }
    assert_eq!(game.phase, Phase::HandsPending);
    let bets = game.active_round().bets.clone();

    cancel_hands_confirmation(&mut game, 0).unwrap();
    assert_eq!(game.phase, Phase::Hands);
    assert_eq!(game.active_round().hands, vec![None; 4]);
    assert_eq!(game.active_round().bets, bets);
    assert_eq!(game.active_round().scores, vec![0; 4]);
}

#[test]
fn confirm_scores_and_advances() {
    let mut game = game_in_hands_phase();
    // bets [1,2,0,1], hands [1,2,0,0]
    for (seat, h) in [(0, 1), (1, 2), (2, 0), (3, 0)] {
        record_hands(&mut game, 0, seat, h).unwrap();
    }
    let done = confirm_hands(&mut game, 0).unwrap();
    assert_eq!(done.scores, vec![11, 12, 10, 0]);
    assert_eq!(done.next_round, Some(1));
    assert!(game.state.rounds[0].is_complete);
    assert_eq!(game.active_index(), 1);
    // round 2: dealer 0, bidding opens at seat 1
    assert_eq!(game.phase, Phase::Bidding { turn: Some(1) });
}

#[test]
fn confirm_requires_pending_hands() {
    let mut game = game_in_hands_phase();
    record_hands(&mut game, 0, 0, 1).unwrap();
    let err = confirm_hands(&mut game, 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    assert!(!game.state.rounds[0].is_complete);
}

#[test]
fn hint_messages() {
    assert_eq!(describe_legal_hands(&[2], true), "Must record 2 hands");
    assert_eq!(describe_legal_hands(&[1], true), "Must record 1 hand");
    assert_eq!(describe_legal_hands(&[0, 1], false), "Must record 0 or 1 hand");
    assert_eq!(
        describe_legal_hands(&[0, 1, 2], false),
        "Must record 0, 1, or 2 hands"
    );
    assert_eq!(describe_legal_hands(&[0, 1, 2, 3, 4], false), "Record 0-4 hands");
}
