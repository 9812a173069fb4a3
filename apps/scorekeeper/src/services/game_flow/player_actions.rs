use tracing::debug;

use super::{GameFlowMutationResult, GameFlowService};
use crate::domain::bidding::{place_bid, Bid, BidOutcome};
use crate::domain::game_transition::Cue;
use crate::domain::hands::{record_hands, HandsOutcome};
use crate::domain::Seat;
use crate::error::AppError;

impl GameFlowService {
    /// Submit (or revise) a bet for `who` in the given round.
    ///
    /// Every accepted bet plays [`Cue::BetPlaced`], including one that repeats
    /// the value already recorded.
    pub fn submit_bid(
        &mut self,
        round_index: usize,
        who: Seat,
        value: u8,
    ) -> Result<GameFlowMutationResult<BidOutcome>, AppError> {
        debug!(round = round_index, player = who, value, "Submitting bid");
        self.run_mutation_with_cues("submit_bid", &[Cue::BetPlaced], |game| {
            place_bid(game, round_index, who, Bid(value))
        })
    }

    /// Record (or re-record) the hands taken by `who` in the given round.
    pub fn submit_hands(
        &mut self,
        round_index: usize,
        who: Seat,
        value: u8,
    ) -> Result<GameFlowMutationResult<HandsOutcome>, AppError> {
        debug!(round = round_index, player = who, value, "Submitting hands");
        self.run_mutation("submit_hands", |game| {
            record_hands(game, round_index, who, value)
        })
    }
}
