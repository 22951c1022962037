//! Parlor Games library - wiring for the `parlor_games` binary
//!
//! # Architecture
//!
//! - **CLI**: game selection and overrides ([`Cli`])
//! - **Config**: TOML settings with defaults ([`ParlorConfig`])
//! - **App**: runs a game over any [`parlor_console::Console`] ([`run`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;

pub use app::{Report, run};
pub use cli::{Cli, Command};
pub use config::{ConfigError, ParlorConfig};
