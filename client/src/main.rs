mod config;
mod dashboard;
mod game_runner;
mod ui;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tictactoe_common::games::tictactoe::{GameMode, TicTacToeGameState};
use tictactoe_common::history::HistoryStore;
use tictactoe_common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use config::{Config, default_config_path, get_config_manager};
use dashboard::render_dashboard;
use game_runner::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-Tac-Toe against a friend or an unbeatable AI")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to tictactoe_client_config.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Two players taking turns on one terminal
    Pvp {
        #[arg(long)]
        player_x: Option<String>,
        #[arg(long)]
        player_o: Option<String>,
    },
    /// Play X against the minimax AI
    Computer {
        #[arg(long)]
        player_x: Option<String>,
    },
    /// Show win rates and recent matches
    Stats,
}

fn history_store(config: &Config, config_path: &Path) -> HistoryStore {
    let base_dir = config_path.parent().unwrap_or(Path::new("."));
    HistoryStore::new(
        config.history.resolve_location(base_dir),
        config.history.max_records,
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = get_config_manager(&config_path).get_config()?;
    log!("Loaded config from {}", config_path.display());

    let store = history_store(&config, &config_path);

    let game = match args.command {
        Command::Stats => {
            let history = store.load()?;
            print!(
                "{}",
                render_dashboard(&history, &config.players.x_name, &config.players.o_name)
            );
            return Ok(());
        }
        Command::Pvp { player_x, player_o } => {
            let players = config.players.with_overrides(player_x, player_o)?;
            TicTacToeGameState::new(GameMode::Pvp, players.x_name, players.o_name)
        }
        Command::Computer { player_x } => {
            let players = config.players.with_overrides(player_x, None)?;
            TicTacToeGameState::new(GameMode::Computer, players.x_name, players.ai_name)
        }
    };

    let mut runner = GameRunner::new(game, store, config.ai.think_delay());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    runner.run(&mut lines, &mut std::io::stdout()).await?;

    log!("Finished {} session", runner.mode());
    Ok(())
}
