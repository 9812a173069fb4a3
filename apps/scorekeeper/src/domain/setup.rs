//! Round factory: builds the fixed round sequence for a new game.

use crate::domain::rules::{
    dealer_for_round, suit_for_round, trick_count_for_round, MIN_PLAYERS, MIN_ROUNDS,
};
use crate::domain::state::{GameState, Round};
use crate::errors::domain::{DomainError, ValidationKind};

/// Build the ordered rounds for `round_count` rounds at a table of `players`.
///
/// Deterministic in its inputs.
pub fn build_rounds(players: u8, round_count: u8) -> Vec<Round> {
    (0..round_count as usize)
        .filter_map(|idx| trick_count_for_round(round_count, idx))
        .map(|number| {
            Round::new(
                number,
                suit_for_round(round_count, number),
                dealer_for_round(players, round_count, number),
                players,
            )
        })
        .collect()
}

/// Create a new game. Names are trimmed before they are stored.
pub fn initialize_game(
    player_count: u8,
    round_count: u8,
    names: &[String],
) -> Result<GameState, DomainError> {
    if player_count < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidSetup,
            format!("At least {MIN_PLAYERS} players are required"),
        ));
    }
    if round_count < MIN_ROUNDS {
        return Err(DomainError::validation(
            ValidationKind::InvalidSetup,
            format!("At least {MIN_ROUNDS} round is required"),
        ));
    }
    if names.len() != player_count as usize {
        return Err(DomainError::validation(
            ValidationKind::InvalidSetup,
            format!(
                "Expected {player_count} player names, got {}",
                names.len()
            ),
        ));
    }

    let player_names: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
    if player_names.iter().any(String::is_empty) {
        return Err(DomainError::validation(
            ValidationKind::EmptyName,
            "All player names must be filled in",
        ));
    }

    Ok(GameState {
        players: player_count,
        player_names,
        current_round: 0,
        max_round: round_count,
        rounds: build_rounds(player_count, round_count),
    })
}
