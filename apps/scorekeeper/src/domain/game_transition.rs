use crate::domain::state::{Game, Phase};

/// Discrete events the audio collaborator reacts to.
///
/// `BetPlaced` belongs to the bid operation itself and is never derived from
/// a state change; the other cues are lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    BetPlaced,
    BetsConfirmed,
    RoundCompleted,
    GameWon,
}

impl Cue {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Cue::BetPlaced => "bet",
            Cue::BetsConfirmed => "confirm",
            Cue::RoundCompleted => "complete",
            Cue::GameWon => "win",
        }
    }
}

/// The parts of a game that cues are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleView {
    pub active_round: usize,
    pub phase: Phase,
    pub completed_rounds: usize,
    pub game_complete: bool,
}

impl LifecycleView {
    pub fn of(game: &Game) -> Self {
        Self {
            active_round: game.active_index(),
            phase: game.phase,
            completed_rounds: game.state.rounds.iter().filter(|r| r.is_complete).count(),
            game_complete: game.state.is_game_complete(),
        }
    }
}

/// Derive cues from before/after views of one operation.
pub fn derive_cues(before: &LifecycleView, after: &LifecycleView) -> Vec<Cue> {
    let mut cues = Vec::new();

    // 1. Bets locked (-> Hands)
    if !before.phase.bids_confirmed()
        && after.phase == Phase::Hands
        && before.active_round == after.active_round
    {
        cues.push(Cue::BetsConfirmed);
    }

    // 2. Round completed
    if after.completed_rounds > before.completed_rounds {
        cues.push(Cue::RoundCompleted);
    }

    // 3. Game won (!complete -> complete)
    if !before.game_complete && after.game_complete {
        cues.push(Cue::GameWon);
    }

    cues
}
