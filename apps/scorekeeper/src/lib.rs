#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod shell;

// Re-exports for public API
pub use adapters::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore, SoundCue};
pub use config::AppConfig;
pub use domain::snapshot::{snapshot, GameSnapshot};
pub use domain::{Game, GameState, Phase, Round, Seat, Suit};
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::{load_game, GameFlowService};
