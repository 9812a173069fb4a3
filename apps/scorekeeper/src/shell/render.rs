//! Plain-text rendering of a [`GameSnapshot`].

use std::fmt::Write;

use crate::domain::snapshot::{GameSnapshot, PhaseSnapshot, RoundPublic};

const CELL: usize = 12;

fn name(view: &GameSnapshot, seat: u8) -> &str {
    view.game
        .player_names
        .get(seat as usize)
        .map(String::as_str)
        .unwrap_or("?")
}

fn slot(v: Option<u8>) -> String {
    v.map_or_else(|| "-".to_string(), |x| x.to_string())
}

fn cell(round: &RoundPublic, seat: usize) -> String {
    let entry = format!("{}/{}", slot(round.bets[seat]), slot(round.hands[seat]));
    if round.is_complete {
        format!("{entry} {}", round.scores[seat])
    } else {
        entry
    }
}

/// Score table: one row per round (bet/hands, score once complete), then totals.
pub fn table(view: &GameSnapshot) -> String {
    let game = &view.game;
    let mut out = String::new();

    let _ = write!(out, "{:>5} {:>5}  ", "Round", "Trump");
    for player in &game.player_names {
        let _ = write!(out, "{player:>CELL$}");
    }
    out.push('\n');

    for (idx, round) in game.rounds.iter().enumerate() {
        let marker = if idx == game.active_round && !round.is_complete {
            '>'
        } else {
            ' '
        };
        let _ = write!(out, "{marker}{:>4} {:>5}  ", round.number, round.suit.to_string());
        for seat in 0..game.player_names.len() {
            let mut text = cell(round, seat);
            if seat == round.dealer as usize {
                text.push('d');
            }
            let _ = write!(out, "{text:>CELL$}");
        }
        out.push('\n');
    }

    let _ = write!(out, "{:>5} {:>5}  ", "Total", "");
    for &total in &game.totals {
        let text = if total == game.highest_score && total > 0 {
            format!("*{total}")
        } else {
            total.to_string()
        };
        let _ = write!(out, "{text:>CELL$}");
    }
    out.push('\n');
    out
}

fn join_values(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the table is waiting for, plus the current error if any.
pub fn prompt(view: &GameSnapshot) -> String {
    let game = &view.game;
    let round = &game.rounds[game.active_round];
    let mut out = String::new();

    if let Some(err) = &view.error {
        let _ = writeln!(out, "! {err}");
    }

    match &view.phase {
        PhaseSnapshot::Bidding(b) => match b.to_act {
            Some(seat) => {
                let _ = write!(
                    out,
                    "Round of {}: {} to bet ({})",
                    round.number,
                    name(view, seat),
                    join_values(&b.legal_bids)
                );
                if b.opening_bidder {
                    let _ = write!(out, ", {} deals", name(view, round.dealer));
                }
            }
            None => out.push_str("All bets are in. Revise a bet or type 'confirm'"),
        },
        PhaseSnapshot::BidsPending(p) => {
            let _ = write!(
                out,
                "Bets total {} for {} tricks. 'confirm' to lock or 'cancel' to revise",
                p.total_bids, round.number
            );
        }
        PhaseSnapshot::Hands(h) => {
            let _ = write!(
                out,
                "Record hands ({} of {} so far)",
                h.total_recorded, round.number
            );
            for p in &h.prompts {
                let _ = write!(out, "\n  {}: {}", name(view, p.seat), p.hint);
            }
        }
        PhaseSnapshot::HandsPending(p) => {
            let scores: Vec<String> = p
                .round_scores
                .iter()
                .enumerate()
                .map(|(seat, s)| format!("{} +{s}", name(view, seat as u8)))
                .collect();
            let _ = write!(
                out,
                "Round scores: {}. 'confirm' to finish the round or 'cancel' to re-record",
                scores.join(", ")
            );
        }
        PhaseSnapshot::GameOver(g) => {
            let winners: Vec<&str> = g.winners.iter().map(|&s| name(view, s)).collect();
            let _ = write!(
                out,
                "Game over! Winner{}: {} with {} points",
                if winners.len() == 1 { "" } else { "s" },
                winners.join(" and "),
                game.highest_score
            );
        }
    }
    out
}
