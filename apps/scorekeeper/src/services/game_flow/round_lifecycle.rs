use tracing::info;

use super::{GameFlowMutationResult, GameFlowService};
use crate::domain::bidding::{cancel_bids_confirmation, confirm_bids};
use crate::domain::hands::{cancel_hands_confirmation, confirm_hands, RoundCompletion};
use crate::error::AppError;

impl GameFlowService {
    /// Lock bets and open hand recording.
    pub fn confirm_bets(
        &mut self,
        round_index: usize,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        let result = self.run_mutation("confirm_bets", |game| confirm_bids(game, round_index))?;
        info!(round = round_index, "Bets locked");
        Ok(result)
    }

    /// Reopen bidding with the entered bets kept.
    pub fn cancel_bets_confirmation(
        &mut self,
        round_index: usize,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation("cancel_bets_confirmation", |game| {
            cancel_bids_confirmation(game, round_index)
        })
    }

    /// Score the round and advance, or finish the game after the last round.
    pub fn confirm_hands(
        &mut self,
        round_index: usize,
    ) -> Result<GameFlowMutationResult<RoundCompletion>, AppError> {
        let result = self.run_mutation("confirm_hands", |game| confirm_hands(game, round_index))?;
        if result.outcome.next_round.is_none() {
            info!(winners = ?self.winning_players(), "Game won");
        }
        Ok(result)
    }

    /// Discard the recorded hands and reopen hand recording.
    pub fn cancel_hands_confirmation(
        &mut self,
        round_index: usize,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation("cancel_hands_confirmation", |game| {
            cancel_hands_confirmation(game, round_index)
        })
    }
}
