//! Hand-recording protocol: legal hand counts, recording, confirmation and
//! round progression.

use tracing::{debug, info};

use crate::domain::bidding::next_bidder;
use crate::domain::scoring::apply_round_scoring;
use crate::domain::state::{require_active_round, require_seat, Game, Phase, Round, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of recording a hand count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandsOutcome {
    pub total_recorded: u32,
    /// Every count is in and sums to the trick count.
    pub awaiting_confirmation: bool,
}

/// Result of confirming a round's hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundCompletion {
    pub round_index: usize,
    pub scores: Vec<u16>,
    /// Index of the round that is now active, `None` when the game ended.
    pub next_round: Option<usize>,
}

/// Hand counts not yet claimed by other players.
pub fn remaining_hands(round: &Round, who: Seat) -> u8 {
    let assigned: u32 = round
        .hands
        .iter()
        .enumerate()
        .filter(|(seat, _)| *seat != who as usize)
        .filter_map(|(_, h)| h.map(u32::from))
        .sum();
    (round.number as u32).saturating_sub(assigned) as u8
}

/// True when every other player already has a hand count.
pub fn is_last_unrecorded(round: &Round, who: Seat) -> bool {
    round
        .hands
        .iter()
        .enumerate()
        .all(|(seat, h)| seat == who as usize || h.is_some())
}

/// Legal hand counts for `who`.
///
/// The last unrecorded player must take exactly what is left.
pub fn legal_hands(round: &Round, who: Seat) -> Vec<u8> {
    let remaining = remaining_hands(round, who);
    if is_last_unrecorded(round, who) {
        return vec![remaining];
    }
    (0..=remaining).collect()
}

fn plural(n: u8) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Short prompt describing the legal hand counts.
pub fn describe_legal_hands(values: &[u8], is_last: bool) -> String {
    match values {
        [] => String::new(),
        [only, ..] if is_last => format!("Must record {only} hand{}", plural(*only)),
        [only] => format!("Must record {only} hand{}", plural(*only)),
        [a, b] => format!("Must record {a} or {b} hand{}", plural(*b)),
        [a, b, c] => format!("Must record {a}, {b}, or {c} hand{}", plural(*c)),
        [.., last] => format!("Record 0-{last} hands"),
    }
}

/// Record (or re-record) the hands taken by `who` in the active round.
pub fn record_hands(
    game: &mut Game,
    round_index: usize,
    who: Seat,
    value: u8,
) -> Result<HandsOutcome, DomainError> {
    if game.phase != Phase::Hands {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            match game.phase {
                Phase::HandsPending => "Hands are awaiting confirmation",
                Phase::GameOver => "The game is over",
                _ => "Bets must be confirmed before recording hands",
            },
        ));
    }
    require_active_round(game, round_index)?;
    require_seat(&game.state, who)?;

    if !game.state.rounds[round_index].all_bets_set() {
        let round = &mut game.state.rounds[round_index];
        round.clear_hands();
        let turn = next_bidder(&game.state, &game.state.rounds[round_index]);
        game.phase = Phase::Bidding { turn };
        return Err(DomainError::inconsistent(
            "Cannot record hands because bets are missing. Please re-enter all bets.",
        ));
    }

    let round = &mut game.state.rounds[round_index];
    let previous = round.hands[who as usize];
    let was_last = is_last_unrecorded(round, who);
    let remaining = remaining_hands(round, who);

    round.hands[who as usize] = Some(value);
    let total = round.hand_total();
    if total > round.number as u32 {
        round.hands[who as usize] = None;
        return Err(DomainError::capacity_exceeded(round.number));
    }

    if was_last && value != remaining {
        round.hands[who as usize] = previous;
        return Err(DomainError::validation(
            ValidationKind::InvalidHands,
            format!(
                "{} must record {remaining} hand{}",
                game.state.player_name(who),
                plural(remaining)
            ),
        ));
    }

    let awaiting_confirmation = round.all_hands_set() && total == round.number as u32;
    if awaiting_confirmation {
        game.phase = Phase::HandsPending;
    }
    debug!(round = round_index, player = who, hands = value, total, "Hands recorded");

    Ok(HandsOutcome {
        total_recorded: total,
        awaiting_confirmation,
    })
}

/// Score the active round, mark it complete and advance to the next round.
pub fn confirm_hands(game: &mut Game, round_index: usize) -> Result<RoundCompletion, DomainError> {
    if game.phase != Phase::HandsPending {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "All hands must be recorded before confirming",
        ));
    }
    require_active_round(game, round_index)?;

    let round = &mut game.state.rounds[round_index];
    if !round.all_bets_set() {
        round.clear_hands();
        let turn = next_bidder(&game.state, &game.state.rounds[round_index]);
        game.phase = Phase::Bidding { turn };
        return Err(DomainError::inconsistent(
            "Bets are missing. Please re-enter all bets.",
        ));
    }
    if !round.all_hands_set() || round.hand_total() != round.number as u32 {
        let number = round.number;
        round.clear_hands();
        game.phase = Phase::Hands;
        return Err(DomainError::inconsistent(format!(
            "Recorded hands must add up to {number}. Please record them again."
        )));
    }

    apply_round_scoring(round);
    let scores = round.scores.clone();
    info!(round = round_index, number = round.number, ?scores, "Round complete");

    let next = round_index + 1;
    let next_round = if next < game.state.rounds.len() {
        game.state.current_round = next;
        let turn = next_bidder(&game.state, &game.state.rounds[next]);
        game.phase = Phase::Bidding { turn };
        Some(next)
    } else {
        game.phase = Phase::GameOver;
        info!("Game complete");
        None
    };

    Ok(RoundCompletion {
        round_index,
        scores,
        next_round,
    })
}

/// Discard every recorded hand count for the active round.
pub fn cancel_hands_confirmation(game: &mut Game, round_index: usize) -> Result<(), DomainError> {
    if game.phase != Phase::HandsPending {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "No hands are awaiting confirmation",
        ));
    }
    require_active_round(game, round_index)?;

    game.state.rounds[round_index].clear_hands();
    game.phase = Phase::Hands;
    Ok(())
}
