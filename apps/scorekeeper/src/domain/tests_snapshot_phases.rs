use serde_json::json;

use crate::domain::bidding::confirm_bids;
use crate::domain::hands::record_hands;
use crate::domain::snapshot::{snapshot, PhaseSnapshot};
use crate::domain::test_state_helpers::{bid_in_order, new_game, play_round};

#[test]
fn bidding_snapshot_lists_legal_bids_for_the_seat_on_turn() {
    let game = new_game(4, 3);
    let snap = snapshot(&game, None);

    assert_eq!(snap.game.turn, Some(0));
    assert!(!snap.game.bids_confirmed);
    assert_eq!(snap.game.totals, vec![0; 4]);
    match snap.phase {
        PhaseSnapshot::Bidding(b) => {
            assert_eq!(b.to_act, Some(0));
            assert_eq!(b.legal_bids, vec![0, 1, 2, 3]);
            assert_eq!(b.last_bidder, 3);
            // dealer is seat 3, so seat 0 sits to the left
            assert!(b.opening_bidder);
        }
        other => panic!("expected Bidding, got {other:?}"),
    }
}

#[test]
fn pending_and_hands_snapshots() {
    let mut game = new_game(4, 3);
    bid_in_order(&mut game, &[1, 2, 0, 1]);
    let snap = snapshot(&game, None);
    assert_eq!(
        snap.phase,
        PhaseSnapshot::BidsPending(crate::domain::snapshot::BidsPendingSnapshot { total_bids: 4 })
    );

    confirm_bids(&mut game, 0).unwrap();
    record_hands(&mut game, 0, 0, 1).unwrap();
    record_hands(&mut game, 0, 1, 1).unwrap();
    record_hands(&mut game, 0, 2, 0).unwrap();
    let snap = snapshot(&game, None);
    assert!(snap.game.bids_confirmed);
    assert!(!snap.game.hands_confirmed);
    match snap.phase {
        PhaseSnapshot::Hands(h) => {
            assert_eq!(h.total_recorded, 2);
            assert_eq!(h.prompts.len(), 1);
            assert_eq!(h.prompts[0].seat, 3);
            assert_eq!(h.prompts[0].legal, vec![1]);
            assert_eq!(h.prompts[0].hint, "Must record 1 hand");
        }
        other => panic!("expected Hands, got {other:?}"),
    }

    record_hands(&mut game, 0, 3, 1).unwrap();
    let snap = snapshot(&game, None);
    assert!(snap.game.hands_confirmed);
    match snap.phase {
        PhaseSnapshot::HandsPending(p) => assert_eq!(p.round_scores, vec![11, 1, 10, 11]),
        other => panic!("expected HandsPending, got {other:?}"),
    }
    // preview does not write scores
    assert_eq!(snap.game.rounds[0].scores, vec![0; 4]);
}

#[test]
fn game_over_snapshot_names_winners() {
    let mut game = new_game(2, 1);
    play_round(&mut game, &[1, 1], &[1, 0]);
    let snap = snapshot(&game, None);
    assert_eq!(snap.game.totals, vec![11, 0]);
    assert_eq!(snap.game.highest_score, 11);
    match snap.phase {
        PhaseSnapshot::GameOver(g) => assert_eq!(g.winners, vec![0]),
        other => panic!("expected GameOver, got {other:?}"),
    }
}

#[test]
fn snapshot_json_is_adjacently_tagged() {
    let game = new_game(3, 2);
    let value = serde_json::to_value(snapshot(&game, Some("Total bets cannot equal 2"))).unwrap();
    assert_eq!(value["phase"]["phase"], json!("Bidding"));
    assert_eq!(value["phase"]["data"]["to_act"], json!(0));
    assert_eq!(value["error"], json!("Total bets cannot equal 2"));
    assert_eq!(value["game"]["rounds"][0]["bets"], json!([null, null, null]));

    let quiet = serde_json::to_value(snapshot(&game, None)).unwrap();
    assert!(quiet.get("error").is_none());
}
