use std::{io::stdout, path::PathBuf};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::Config;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use tictactoe::{parse_squares, Game};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod app;
pub mod board;
pub mod cell;
pub mod config;
pub mod moves;
pub mod popup;

/// Tic-tac-toe in the terminal, with a history you can jump around in.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// RON file with colours and logging settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file. Overrides the config file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Cells (1-9, comma separated) to play before the board is shown.
    #[arg(long, value_name = "LIST")]
    moves: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let theme = config.theme()?;
    let log_file = cli.log_file.or(config.log_file.clone());
    let _guard = match &log_file {
        Some(path) => Some(init_logging(path, &config.log_filter)?),
        None => None,
    };

    let mut game = Game::new();
    if let Some(list) = &cli.moves {
        let squares = parse_squares(list).context("parsing --moves")?;
        let requested = squares.len();
        let played = game.play_squares(squares);
        if played < requested {
            warn!(requested, played, "some scripted moves were ignored");
        }
    }

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .and_then(|()| App::new(game, theme).run(terminal));
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result.context("running the terminal UI")
}

/// Sends `tracing` output to `path`. `RUST_LOG` wins over `filter` when set.
fn init_logging(path: &std::path::Path, filter: &str) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    info!("logging to {}", path.display());
    Ok(guard)
}
