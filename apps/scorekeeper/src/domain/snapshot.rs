//! Public snapshot API for the presentation layer.
//!
//! Read-only: building a snapshot never mutates the game.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{last_bidder, legal_bids};
use crate::domain::hands::{describe_legal_hands, is_last_unrecorded, legal_hands};
use crate::domain::scoring::{compute_round_scores, highest_score, totals, winning_players};
use crate::domain::state::{next_seat, Game, Phase, Round, Seat};
use crate::domain::Suit;

/// Public round facts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub number: u8,
    pub suit: Suit,
    pub dealer: Seat,
    pub bets: Vec<Option<u8>>,
    pub hands: Vec<Option<u8>>,
    pub scores: Vec<u16>,
    pub is_complete: bool,
}

impl From<&Round> for RoundPublic {
    fn from(round: &Round) -> Self {
        Self {
            number: round.number,
            suit: round.suit,
            dealer: round.dealer,
            bets: round.bets.clone(),
            hands: round.hands.clone(),
            scores: round.scores.clone(),
            is_complete: round.is_complete,
        }
    }
}

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    pub player_names: Vec<String>,
    pub active_round: usize,
    pub rounds: Vec<RoundPublic>,
    pub totals: Vec<u32>,
    pub highest_score: u32,
    pub bids_confirmed: bool,
    pub hands_confirmed: bool,
    pub turn: Option<Seat>,
}

/// Top-level snapshot combining header, phase data and the current error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Bidding(BiddingSnapshot),
    BidsPending(BidsPendingSnapshot),
    Hands(HandsSnapshot),
    HandsPending(HandsPendingSnapshot),
    GameOver(GameOverSnapshot),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub to_act: Option<Seat>,
    /// Legal bids for `to_act`; empty when nobody is on turn.
    pub legal_bids: Vec<u8>,
    pub last_bidder: Seat,
    /// The seat on turn sits left of the dealer.
    pub opening_bidder: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidsPendingSnapshot {
    pub total_bids: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandsPrompt {
    pub seat: Seat,
    pub legal: Vec<u8>,
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandsSnapshot {
    pub total_recorded: u32,
    /// One prompt per player who has not recorded yet.
    pub prompts: Vec<HandsPrompt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandsPendingSnapshot {
    pub round_scores: Vec<u16>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOverSnapshot {
    pub winners: Vec<Seat>,
}

/// Entry point: produce a snapshot of the current game.
pub fn snapshot(game: &Game, error: Option<&str>) -> GameSnapshot {
    let state = &game.state;
    let round = game.active_round();

    let header = GameHeader {
        player_names: state.player_names.clone(),
        active_round: game.active_index(),
        rounds: state.rounds.iter().map(RoundPublic::from).collect(),
        totals: totals(state),
        highest_score: highest_score(state),
        bids_confirmed: game.phase.bids_confirmed(),
        hands_confirmed: game.phase == Phase::HandsPending,
        turn: game.phase.turn(),
    };

    let phase = match game.phase {
        Phase::Bidding { turn } => PhaseSnapshot::Bidding(BiddingSnapshot {
            to_act: turn,
            legal_bids: turn
                .map(|seat| legal_bids(state, round, seat).iter().map(|b| b.0).collect())
                .unwrap_or_default(),
            last_bidder: last_bidder(state, round),
            opening_bidder: turn == Some(next_seat(round.dealer, state.players)),
        }),
        Phase::BidsPending => PhaseSnapshot::BidsPending(BidsPendingSnapshot {
            total_bids: round.bet_total(),
        }),
        Phase::Hands => PhaseSnapshot::Hands(HandsSnapshot {
            total_recorded: round.hand_total(),
            prompts: (0..state.players)
                .filter(|&seat| round.hands[seat as usize].is_none())
                .map(|seat| {
                    let legal = legal_hands(round, seat);
                    let hint = describe_legal_hands(&legal, is_last_unrecorded(round, seat));
                    HandsPrompt { seat, legal, hint }
                })
                .collect(),
        }),
        Phase::HandsPending => PhaseSnapshot::HandsPending(HandsPendingSnapshot {
            round_scores: compute_round_scores(round),
        }),
        Phase::GameOver => PhaseSnapshot::GameOver(GameOverSnapshot {
            winners: winning_players(state),
        }),
    };

    GameSnapshot {
        game: header,
        phase,
        error: error.map(str::to_string),
    }
}
