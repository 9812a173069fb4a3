//! Game flow service: owns the live game and routes every engine operation.
//!
//! After each operation the service diffs lifecycle views to emit sound cues,
//! saves the snapshot (best effort) and keeps the single current-error
//! message for the presentation layer.

mod mutation;
mod player_actions;
mod round_lifecycle;

use tracing::{info, warn};

pub use mutation::GameFlowMutationResult;

use crate::adapters::{SnapshotStore, SoundCue};
use crate::domain::recovery::check_integrity;
use crate::domain::scoring::{highest_score, total_score, winning_players};
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::{initialize_game, restore, Game, Phase, Restored, Seat};
use crate::error::AppError;

pub struct GameFlowService {
    game: Game,
    store: Box<dyn SnapshotStore>,
    sound: Box<dyn SoundCue>,
    last_error: Option<String>,
}

/// Read the stored game and rebuild its transient state.
///
/// `Ok(None)` when nothing is stored. Snapshots that fail the integrity
/// check are reported as `DataCorruption`.
pub fn load_game(store: &dyn SnapshotStore) -> Result<Option<Restored>, AppError> {
    let Some(state) = store.load()? else {
        return Ok(None);
    };
    check_integrity(&state).map_err(|e| AppError::corruption(e.to_string()))?;
    Ok(Some(restore(state)))
}

impl GameFlowService {
    /// Start a fresh game, discarding any stored snapshot.
    pub fn new_game(
        store: Box<dyn SnapshotStore>,
        sound: Box<dyn SoundCue>,
        player_count: u8,
        round_count: u8,
        names: &[String],
    ) -> Result<Self, AppError> {
        let state = initialize_game(player_count, round_count, names)?;
        let service = Self {
            game: restore(state).game,
            store,
            sound,
            last_error: None,
        };
        service.discard_snapshot();
        service.persist();
        info!(players = player_count, rounds = round_count, "New game started");
        Ok(service)
    }

    /// Continue a game produced by [`load_game`].
    pub fn from_restored(
        store: Box<dyn SnapshotStore>,
        sound: Box<dyn SoundCue>,
        restored: Restored,
    ) -> Self {
        let Restored { game, recovered } = restored;
        let service = Self {
            last_error: recovered.as_ref().map(ToString::to_string),
            game,
            store,
            sound,
        };
        if recovered.is_some() {
            service.persist();
        }
        info!(
            round = service.game.active_index(),
            phase = ?service.game.phase,
            "Game resumed"
        );
        service
    }

    /// Replace the current game with a new one. On invalid setup the
    /// current game is kept and the error becomes the current message.
    pub fn restart(
        &mut self,
        player_count: u8,
        round_count: u8,
        names: &[String],
    ) -> Result<(), AppError> {
        let state = match initialize_game(player_count, round_count, names) {
            Ok(state) => state,
            Err(e) => {
                warn!(code = %e.code(), error = %e, "Setup rejected");
                self.last_error = Some(e.to_string());
                return Err(e.into());
            }
        };
        self.discard_snapshot();
        self.game = restore(state).game;
        self.last_error = None;
        self.persist();
        info!(players = player_count, rounds = round_count, "New game started");
        Ok(())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn phase(&self) -> Phase {
        self.game.phase
    }

    pub fn active_round_index(&self) -> usize {
        self.game.active_index()
    }

    /// Message of the last failed operation, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_game_complete(&self) -> bool {
        self.game.state.is_game_complete()
    }

    pub fn total_score(&self, who: Seat) -> u32 {
        total_score(&self.game.state, who)
    }

    pub fn highest_score(&self) -> u32 {
        highest_score(&self.game.state)
    }

    pub fn winning_players(&self) -> Vec<Seat> {
        winning_players(&self.game.state)
    }

    /// Presentation snapshot, including the current error.
    pub fn view(&self) -> GameSnapshot {
        snapshot(&self.game, self.last_error())
    }

    /// Resolve a player given as a 1-based seat or a case-insensitive name.
    pub fn find_player(&self, token: &str) -> Option<Seat> {
        let names = &self.game.state.player_names;
        if let Ok(n) = token.parse::<usize>() {
            return (1..=names.len()).contains(&n).then(|| (n - 1) as Seat);
        }
        names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|i| i as Seat)
    }
}
