//! Runs the chosen game against any console.

use crate::cli::Command;
use crate::config::ParlorConfig;
use anyhow::{Context, Result};
use parlor_console::{Console, GameRng};
use parlor_tictactoe::{SessionSummary, TicTacToe};
use parlor_twentyone::{TableSummary, TwentyOne};
use tracing::{info, instrument};

/// What a finished game reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A tic-tac-toe session.
    TicTacToe(SessionSummary),
    /// A Twenty-One table.
    TwentyOne(TableSummary),
}

/// Plays `command` from setup to goodbye.
///
/// # Errors
///
/// Returns an error if the console fails or a game invariant breaks.
#[instrument(skip(config, console, rng), fields(seed = ?rng.seed()))]
pub fn run<C: Console>(
    command: Command,
    config: &ParlorConfig,
    console: &mut C,
    rng: &mut GameRng,
) -> Result<Report> {
    let report = match command {
        Command::Tictactoe => {
            let mut game = TicTacToe::setup(console, rng).context("Tic-tac-toe setup failed")?;
            let summary = game.play().context("Tic-tac-toe session failed")?;
            Report::TicTacToe(summary)
        }
        Command::Twentyone => {
            let mut game = TwentyOne::setup(console, rng)
                .context("Twenty-One setup failed")?
                .with_dealer_pause(config.dealer_pause());
            let summary = game.play().context("Twenty-One table failed")?;
            Report::TwentyOne(summary)
        }
    };
    info!(?report, "Game finished");
    Ok(report)
}
