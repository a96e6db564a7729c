mod config;
mod food;
mod game;
mod grid;
mod input;
mod snake;
mod state;
mod term;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use config::{GameConfig, DEFAULT_TICK_RATE, MAX_TICK_RATE};
use term::TermManager;

pub type TermInt = u16;
pub type Coords = (u16, u16);
/// A grid position as `(column, row)`.
pub type Cell = (u16, u16);

#[derive(Parser)]
#[command(name = "wrapsnake")]
#[command(version, about = "Snake in the terminal, on a board whose edges wrap around")]
struct Cli {
    /// Grid columns (default: up to 32, fitted to the terminal)
    #[arg(long)]
    width: Option<u16>,

    /// Grid rows (default: up to 24, fitted to the terminal)
    #[arg(long)]
    height: Option<u16>,

    /// Snake moves per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE,
          value_parser = clap::value_parser!(u32).range(1..=MAX_TICK_RATE as i64))]
    tick_rate: u32,

    /// Seed for food placement and reset headings
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here; the terminal is busy drawing the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        // Anything written to stderr would land in the middle of the board
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let term = TermManager::new()?;
    let config = GameConfig::resolve(cli.width, cli.height, cli.tick_rate, cli.seed, term.get_terminal_size())?;
    info!("Starting on a {}x{} grid, tick every {:?}, seed {:?}",
          config.grid.width(), config.grid.height(), config.tick_interval, config.seed);

    let mut game = game::SnakeGame::new(config, term);

    // The terminal has to come back even when the game loop fails
    let result = game.setup()
        .and_then(|()| game.show_intro())
        .and_then(|start| if start { game.play() } else { Ok(()) });
    let restored = game.restore();

    merge_exit(result, restored)
}

/// The game's own error comes first; a failed restore is attached to it rather than replacing it.
fn merge_exit(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            Err(e.context(format!("Also failed to restore the terminal: {:#}", restore_err)))
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_merge_exit_keeps_both_errors() {
        let err = merge_exit(Err(anyhow!("loop broke")), Err(anyhow!("raw mode stuck"))).unwrap_err();
        let report = format!("{:#}", err);
        assert!(report.contains("loop broke"));
        assert!(report.contains("raw mode stuck"));
    }

    #[test]
    fn test_merge_exit_single_errors() {
        assert!(merge_exit(Ok(()), Ok(())).is_ok());
        let err = merge_exit(Ok(()), Err(anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode stuck");
        let err = merge_exit(Err(anyhow!("loop broke")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "loop broke");
    }
}
