use crate::domain::rules::EXACT_BID_BONUS;
use crate::domain::state::{GameState, Round, Seat};

/// Score for one player: the hands taken, plus the bonus on an exact bid.
pub fn round_score(bet: Option<u8>, hands: u8) -> u16 {
    let bonus = match bet {
        Some(b) if b == hands => EXACT_BID_BONUS,
        _ => 0,
    };
    hands as u16 + bonus
}

/// Compute per-round scores without mutating the round.
/// Unrecorded hands count as zero.
pub fn compute_round_scores(round: &Round) -> Vec<u16> {
    round
        .bets
        .iter()
        .zip(&round.hands)
        .map(|(&bet, &hands)| round_score(bet, hands.unwrap_or(0)))
        .collect()
}

/// Finalize the round's scores and mark it complete.
pub fn apply_round_scoring(round: &mut Round) {
    if round.is_complete {
        return;
    }
    round.scores = compute_round_scores(round);
    round.is_complete = true;
}

pub fn total_score(state: &GameState, who: Seat) -> u32 {
    state
        .rounds
        .iter()
        .filter_map(|r| r.scores.get(who as usize))
        .map(|&s| s as u32)
        .sum()
}

pub fn totals(state: &GameState) -> Vec<u32> {
    (0..state.players).map(|p| total_score(state, p)).collect()
}

/// Highest running total at the table.
pub fn highest_score(state: &GameState) -> u32 {
    totals(state).into_iter().max().unwrap_or(0)
}

/// Every seat tied for the highest total; empty until the game is complete.
pub fn winning_players(state: &GameState) -> Vec<Seat> {
    if !state.is_game_complete() {
        return Vec::new();
    }
    let totals = totals(state);
    let Some(&best) = totals.iter().max() else {
        return Vec::new();
    };
    totals
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t == best)
        .map(|(seat, _)| seat as Seat)
        .collect()
}
