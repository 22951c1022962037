//! Player-facing settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings shared by both games.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ParlorConfig {
    /// Fixed seed for reproducible games. Entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Clear the terminal between turns.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Milliseconds to wait after each dealer draw in Twenty-One.
    #[serde(default = "default_dealer_pause_ms")]
    dealer_pause_ms: u64,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_clear_screen() -> bool {
    true
}

#[instrument]
fn default_dealer_pause_ms() -> u64 {
    3000
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ParlorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            clear_screen: default_clear_screen(),
            dealer_pause_ms: default_dealer_pause_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl ParlorConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the seed when `seed` is set.
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Turns screen clearing off when `disabled` is set.
    pub fn with_clear_disabled(mut self, disabled: bool) -> Self {
        if disabled {
            self.clear_screen = false;
        }
        self
    }

    /// Dealer pause as a [`Duration`].
    pub fn dealer_pause(&self) -> Duration {
        Duration::from_millis(self.dealer_pause_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParlorConfig::default();
        assert_eq!(*config.seed(), None);
        assert!(*config.clear_screen());
        assert_eq!(config.dealer_pause(), Duration::from_secs(3));
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: ParlorConfig = toml::from_str("").unwrap();
        assert_eq!(config, ParlorConfig::default());
    }

    #[test]
    fn test_seed_override() {
        let config: ParlorConfig = toml::from_str("seed = 5").unwrap();
        assert_eq!(*config.clone().with_seed_override(None).seed(), Some(5));
        assert_eq!(*config.with_seed_override(Some(9)).seed(), Some(9));
    }

    #[test]
    fn test_clear_disabled() {
        let config = ParlorConfig::default().with_clear_disabled(true);
        assert!(!*config.clear_screen());
        let config = ParlorConfig::default().with_clear_disabled(false);
        assert!(*config.clear_screen());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(ParlorConfig::load(None).unwrap(), ParlorConfig::default());
    }
}
