use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use scorekeeper::adapters::sound;
use scorekeeper::domain::rules::{
    DEFAULT_NAMES, DEFAULT_PLAYERS, DEFAULT_ROUNDS, SETUP_MAX_PLAYERS,
};
use scorekeeper::shell::{Flow, Setup, Shell};
use scorekeeper::{
    load_game, AppConfig, AppError, FileSnapshotStore, GameFlowService, MemorySnapshotStore,
    SnapshotStore,
};
use tracing::{info, warn};

mod telemetry;

#[derive(Parser, Debug)]
#[command(name = "scorekeeper")]
#[command(about = "Score keeper for Dim, the Oh Hell trick-taking game")]
struct Args {
    /// Directory for the saved game (overrides SCOREKEEPER_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Turn sound cues off
    #[arg(long)]
    mute: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Keep the game in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Ignore any saved game and start a new one
    #[arg(long = "new")]
    fresh: bool,

    /// Number of players
    #[arg(long, default_value_t = DEFAULT_PLAYERS,
          value_parser = clap::value_parser!(u8).range(2..=SETUP_MAX_PLAYERS as i64))]
    players: u8,

    /// Number of rounds; the first round deals this many cards
    #[arg(long, default_value_t = DEFAULT_ROUNDS, value_parser = clap::value_parser!(u8).range(1..))]
    rounds: u8,

    /// Comma-separated player names, defaults fill the rest
    #[arg(long, value_delimiter = ',')]
    names: Vec<String>,
}

impl Args {
    fn setup(&self) -> Setup {
        let names = (0..self.players as usize)
            .map(|i| {
                self.names
                    .get(i)
                    .cloned()
                    .or_else(|| DEFAULT_NAMES.get(i).map(|s| s.to_string()))
                    .unwrap_or_else(|| format!("Player {}", i + 1))
            })
            .collect();
        Setup {
            players: self.players,
            rounds: self.rounds,
            names,
        }
    }
}

fn open_service(args: &Args, config: &AppConfig) -> Result<GameFlowService, AppError> {
    let store = || -> Box<dyn SnapshotStore> {
        if args.ephemeral {
            Box::new(MemorySnapshotStore::new())
        } else {
            Box::new(FileSnapshotStore::new(&config.data_dir))
        }
    };
    let sound = || sound::for_setting(config.sound);
    let setup = args.setup();

    if !args.fresh {
        match load_game(store().as_ref()) {
            Ok(Some(restored)) => {
                return Ok(GameFlowService::from_restored(store(), sound(), restored));
            }
            Ok(None) => info!("No saved game, starting a new one"),
            Err(e) => warn!(code = %e.code(), error = %e, "Saved game unusable, starting a new one"),
        }
    }
    GameFlowService::new_game(store(), sound(), setup.players, setup.rounds, &setup.names)
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    config.sound &= !args.mute;
    config.json_logs |= args.json_logs;

    telemetry::init_tracing(config.json_logs);
    info!(?config, ephemeral = args.ephemeral, "Starting scorekeeper");

    let service = open_service(&args, &config)?;
    let mut shell = Shell::new(service);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", shell.screen())?;
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let (flow, out) = shell.handle_line(&line);
        if !out.is_empty() {
            writeln!(stdout, "{out}")?;
        }
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
