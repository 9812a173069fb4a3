//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod game_transition;
pub mod hands;
pub mod recovery;
pub mod rules;
pub mod scoring;
pub mod setup;
pub mod snapshot;
pub mod state;
pub mod suit;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_hands;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_recovery;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot_phases;

// Re-exports for ergonomics
pub use bidding::Bid;
pub use recovery::{restore, Restored};
pub use setup::initialize_game;
pub use state::{Game, GameState, Phase, Round, Seat};
pub use suit::Suit;
