use tracing::warn;

use crate::domain::game_transition::{derive_cues, Cue, LifecycleView};
use crate::domain::Game;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::services::game_flow::GameFlowService;

/// Outcome of one engine operation plus the cues it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFlowMutationResult<T> {
    pub outcome: T,
    pub cues: Vec<Cue>,
}

impl GameFlowService {
    /// Apply `mutation` to the live game.
    ///
    /// Domain errors may carry a local correction (reverted entry, reopened
    /// bidding), so the snapshot is saved whenever the state changed, even on
    /// failure. Cues are only played for successful operations.
    pub(super) fn run_mutation<T, F>(
        &mut self,
        op: &'static str,
        mutation: F,
    ) -> Result<GameFlowMutationResult<T>, AppError>
    where
        F: FnOnce(&mut Game) -> Result<T, DomainError>,
    {
        self.run_mutation_with_cues(op, &[], mutation)
    }

    /// Like [`Self::run_mutation`], but `explicit` cues are played on success
    /// ahead of the derived ones, whether or not the state changed.
    pub(super) fn run_mutation_with_cues<T, F>(
        &mut self,
        op: &'static str,
        explicit: &[Cue],
        mutation: F,
    ) -> Result<GameFlowMutationResult<T>, AppError>
    where
        F: FnOnce(&mut Game) -> Result<T, DomainError>,
    {
        let before = LifecycleView::of(&self.game);
        let state_before = self.game.state.clone();

        let result = mutation(&mut self.game);

        if self.game.state != state_before {
            self.persist();
        }

        match result {
            Ok(outcome) => {
                self.last_error = None;
                let after = LifecycleView::of(&self.game);
                let mut cues = explicit.to_vec();
                for cue in derive_cues(&before, &after) {
                    if !cues.contains(&cue) {
                        cues.push(cue);
                    }
                }
                for &cue in &cues {
                    self.sound.play(cue);
                }
                Ok(GameFlowMutationResult { outcome, cues })
            }
            Err(e) => {
                warn!(op, code = %e.code(), error = %e, "Operation rejected");
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Save the current state; failures are logged and swallowed.
    pub(super) fn persist(&self) {
        if let Err(e) = self.store.save(&self.game.state) {
            warn!(code = %e.code(), error = %e, "Failed to save snapshot");
        }
    }

    pub(super) fn discard_snapshot(&self) {
        if let Err(e) = self.store.clear() {
            warn!(code = %e.code(), error = %e, "Failed to clear snapshot");
        }
    }
}
