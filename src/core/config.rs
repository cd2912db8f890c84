//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - the grid shape (`rows` x `cols`) and the number of symbol pairs
//! - `Timings`: the reveal-settle, turn-switch and opponent thinking delays
//! - a seed for the deterministic RNG
//!
//! Configurations can be built in code with the `with_*` builders or loaded
//! from a TOML file, where any missing field keeps its default:
//!
//! ```toml
//! rows = 4
//! cols = 6
//! symbols = 12
//!
//! [timings]
//! switch_delay_ms = 1500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest number of distinct symbols a board can hold.
pub const MAX_SYMBOLS: usize = u8::MAX as usize + 1;

/// Delays that gate turn transitions, in game-clock milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// How long a completed pair stays face-up before it is settled.
    pub reveal_delay_ms: u64,

    /// Pause between settling a pair and handing the turn over.
    pub switch_delay_ms: u64,

    /// Minimum pause before the opponent acts.
    pub thinking_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1_000,
            switch_delay_ms: 2_000,
            thinking_delay_ms: 800,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid rows.
    pub rows: usize,

    /// Grid columns.
    pub cols: usize,

    /// Number of distinct symbols; each appears on exactly two cards.
    pub symbols: usize,

    /// Turn and opponent delays.
    pub timings: Timings,

    /// Seed for the deck shuffle and opponent exploration.
    /// Same seed produces the same sequence of games.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            symbols: 8,
            timings: Timings::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the grid shape and derive the symbol count from it.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self.symbols = rows * cols / 2;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set all delays.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of pairs to be found (K).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols
    }

    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the board shape and delays.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cards = self.card_count();
        if cards == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if cards % 2 != 0 {
            return Err(ConfigError::OddCardCount(cards));
        }
        if self.symbols * 2 != cards {
            return Err(ConfigError::SymbolCountMismatch {
                cards,
                symbols: self.symbols,
            });
        }
        if self.symbols > MAX_SYMBOLS {
            return Err(ConfigError::TooManySymbols {
                got: self.symbols,
                max: MAX_SYMBOLS,
            });
        }
        if self.timings.switch_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "timings.switch_delay_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_board() {
        let config = GameConfig::default();
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.pair_count(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_grid_derives_symbols() {
        let config = GameConfig::default().with_grid(3, 6);
        assert_eq!(config.symbols, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_odd_card_count_rejected() {
        let config = GameConfig::default().with_grid(3, 3);
        assert!(matches!(config.validate(), Err(ConfigError::OddCardCount(9))));
    }

    #[test]
    fn test_empty_board_rejected() {
        let config = GameConfig::default().with_grid(0, 4);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBoard { .. })));
    }

    #[test]
    fn test_symbol_mismatch_rejected() {
        let config = GameConfig {
            symbols: 7,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SymbolCountMismatch { cards: 16, symbols: 7 })
        ));
    }

    #[test]
    fn test_too_many_symbols_rejected() {
        let config = GameConfig::default().with_grid(2, 300);
        assert!(matches!(config.validate(), Err(ConfigError::TooManySymbols { .. })));
    }

    #[test]
    fn test_zero_switch_delay_rejected() {
        let config = GameConfig::default().with_timings(Timings {
            switch_delay_ms: 0,
            ..Timings::default()
        });
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_toml_partial_fields_use_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            rows = 2
            cols = 3
            symbols = 3

            [timings]
            switch_delay_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.card_count(), 6);
        assert_eq!(config.timings.switch_delay_ms, 500);
        assert_eq!(config.timings.reveal_delay_ms, 1_000);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_toml_invalid_board_rejected() {
        let result = GameConfig::from_toml_str("rows = 3\ncols = 3\nsymbols = 4\n");
        assert!(matches!(result, Err(ConfigError::OddCardCount(9))));
    }

    #[test]
    fn test_toml_syntax_error() {
        let result = GameConfig::from_toml_str("rows = = 3");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("/nonexistent/memory-match.toml");
        assert!(matches!(GameConfig::load(path), Err(ConfigError::FileRead { .. })));
        assert_eq!(GameConfig::load_or_default(path).unwrap(), GameConfig::default());
    }
}
