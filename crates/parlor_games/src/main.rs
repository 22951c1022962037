//! Parlor Games - console tic-tac-toe and Twenty-One.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use parlor_console::{GameRng, TerminalConsole};
use parlor_games::{Cli, ParlorConfig, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ParlorConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_seed_override(cli.seed)
        .with_clear_disabled(cli.no_clear);

    // Game text owns stdout, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut rng = GameRng::from_seed_option(*config.seed());
    info!(game = ?cli.command, seed = ?rng.seed(), "Starting parlor_games");

    let mut console = TerminalConsole::stdio().with_clear_screen(*config.clear_screen());
    run(cli.command, &config, &mut console, &mut rng)?;
    Ok(())
}
