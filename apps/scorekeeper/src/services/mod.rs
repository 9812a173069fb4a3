pub mod game_flow;

pub use game_flow::{load_game, GameFlowService};
