//! Command-line interface for parlor_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parlor Games - tic-tac-toe and Twenty-One in the terminal
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Play tic-tac-toe or Twenty-One against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for shuffles and computer choices (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Never clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Tic-tac-toe, first to five round wins
    Tictactoe,

    /// Twenty-One against a dealer
    Twentyone,
}
