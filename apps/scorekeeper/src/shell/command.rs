//! Line commands understood by the interactive shell.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `bet <player> <value>`
    Bet { player: String, value: u8 },
    /// `hands <player> <value>`
    Hands { player: String, value: u8 },
    Confirm,
    Cancel,
    Show,
    Json,
    New,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Type a command, or 'help' for the list")]
    Empty,
    #[error("Unknown command '{0}', type 'help' for the list")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a valid number")]
    NotANumber(String),
}

pub const HELP: &str = "\
Commands:
  bet <player> <value>     enter or revise a bet (player by seat number or name)
  hands <player> <value>   record the hands a player took
  confirm                  lock bets, or confirm recorded hands
  cancel                   reopen bets, or discard recorded hands
  show                     print the score table
  json                     print the game snapshot as JSON
  new                      start over with the same table
  help                     this text
  quit                     leave (the game is saved)";

fn entry(args: &[&str], usage: &'static str) -> Result<(String, u8), CommandError> {
    let [player, value] = args else {
        return Err(CommandError::Usage(usage));
    };
    let value = value
        .parse::<u8>()
        .map_err(|_| CommandError::NotANumber(value.to_string()))?;
    Ok((player.to_string(), value))
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((head, args)) = words.split_first() else {
        return Err(CommandError::Empty);
    };

    match head.to_ascii_lowercase().as_str() {
        "bet" | "b" => {
            let (player, value) = entry(args, "bet <player> <value>")?;
            Ok(Command::Bet { player, value })
        }
        "hands" | "h" => {
            let (player, value) = entry(args, "hands <player> <value>")?;
            Ok(Command::Hands { player, value })
        }
        "confirm" | "c" => Ok(Command::Confirm),
        "cancel" | "x" => Ok(Command::Cancel),
        "show" | "s" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "new" => Ok(Command::New),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
