//! Structured error types.
//!
//! Gameplay never produces errors: invalid selections are normal UI races and
//! are rejected silently (see [`crate::turn::Rejection`]). The only failures
//! are configuration problems detected once at startup.

use std::path::PathBuf;

/// Errors that can occur when building or loading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("board has {0} cards, but a pair deck needs an even count")]
    OddCardCount(usize),

    #[error("{cards} cards cannot hold {symbols} symbol pairs")]
    SymbolCountMismatch { cards: usize, symbols: usize },

    #[error("symbol {symbol} appears {count} times (expected exactly 2)")]
    UnpairedSymbol { symbol: u8, count: usize },

    #[error("at most {max} distinct symbols are supported (got {got})")]
    TooManySymbols { got: usize, max: usize },

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_card_count_display() {
        let err = ConfigError::OddCardCount(15);
        assert_eq!(
            err.to_string(),
            "board has 15 cards, but a pair deck needs an even count"
        );
    }

    #[test]
    fn test_symbol_mismatch_display() {
        let err = ConfigError::SymbolCountMismatch { cards: 16, symbols: 7 };
        assert_eq!(err.to_string(), "16 cards cannot hold 7 symbol pairs");
    }

    #[test]
    fn test_unpaired_symbol_display() {
        let err = ConfigError::UnpairedSymbol { symbol: 3, count: 1 };
        assert_eq!(
            err.to_string(),
            "symbol 3 appears 1 times (expected exactly 2)"
        );
    }

    #[test]
    fn test_validation_display() {
        let err = ConfigError::Validation("switch_delay_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: switch_delay_ms must be > 0"
        );
    }
}
