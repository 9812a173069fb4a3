//! Text presentation shell: turns line commands into engine operations and
//! renders the resulting snapshot.

pub mod command;
pub mod render;

use crate::domain::{GameState, Phase};
use crate::error::AppError;
use crate::services::GameFlowService;

pub use command::{parse, Command, CommandError, HELP};

/// Table layout: player count, round count and names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub players: u8,
    pub rounds: u8,
    pub names: Vec<String>,
}

impl Setup {
    /// The layout a game was started with.
    pub fn of(state: &GameState) -> Self {
        Self {
            players: state.players,
            rounds: state.max_round,
            names: state.player_names.clone(),
        }
    }
}

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    service: GameFlowService,
}

impl Shell {
    pub fn new(service: GameFlowService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &GameFlowService {
        &self.service
    }

    /// Table plus prompt for the current state.
    pub fn screen(&self) -> String {
        let view = self.service.view();
        format!("{}\n{}", render::table(&view), render::prompt(&view))
    }

    /// Handle one input line and return the text to print.
    pub fn handle_line(&mut self, line: &str) -> (Flow, String) {
        match parse(line) {
            Ok(cmd) => self.execute(cmd),
            Err(e) => (Flow::Continue, format!("! {e}")),
        }
    }

    pub fn execute(&mut self, cmd: Command) -> (Flow, String) {
        let round = self.service.active_round_index();
        // Rejections are already stored as the current error and shown by the prompt
        let result: Result<(), AppError> = match cmd {
            Command::Quit => return (Flow::Quit, String::new()),
            Command::Help => return (Flow::Continue, HELP.to_string()),
            Command::Show => Ok(()),
            Command::Json => {
                return match serde_json::to_string_pretty(&self.service.view()) {
                    Ok(json) => (Flow::Continue, json),
                    Err(e) => (Flow::Continue, format!("! {e}")),
                };
            }
            Command::New => {
                let Setup {
                    players,
                    rounds,
                    names,
                } = Setup::of(&self.service.game().state);
                self.service.restart(players, rounds, &names)
            }
            Command::Bet { player, value } => match self.service.find_player(&player) {
                Some(seat) => self.service.submit_bid(round, seat, value).map(|_| ()),
                None => return (Flow::Continue, format!("! No player '{player}'")),
            },
            Command::Hands { player, value } => match self.service.find_player(&player) {
                Some(seat) => self.service.submit_hands(round, seat, value).map(|_| ()),
                None => return (Flow::Continue, format!("! No player '{player}'")),
            },
            Command::Confirm | Command::Cancel if self.service.phase() == Phase::GameOver => {
                return (Flow::Continue, "! The game is over, type 'new' to play again".into());
            }
            Command::Confirm => match self.service.phase() {
                Phase::Hands | Phase::HandsPending => {
                    self.service.confirm_hands(round).map(|_| ())
                }
                _ => self.service.confirm_bets(round).map(|_| ()),
            },
            Command::Cancel => match self.service.phase() {
                Phase::Hands | Phase::HandsPending => {
                    self.service.cancel_hands_confirmation(round).map(|_| ())
                }
                _ => self.service.cancel_bets_confirmation(round).map(|_| ()),
            },
        };
        // Non-domain failures have no slot in the snapshot; print them directly
        let mut out = self.screen();
        if let Err(e) = result {
            if !e.is_domain() {
                out = format!("! {e}\n{out}");
            }
        }
        (Flow::Continue, out)
    }
}
