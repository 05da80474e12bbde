//! Error types for the slot engine

use thiserror::Error;

use crate::symbols::SymbolKind;

/// Configuration defects, detected once when a `GameConfig` is built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Expected {expected} reels, found {found}")]
    ReelCount { expected: usize, found: usize },

    #[error("Reel {reel} has {found} symbols, expected {expected}")]
    ReelLength {
        reel: usize,
        expected: usize,
        found: usize,
    },

    #[error("Expected {expected} paylines, found {found}")]
    PaylineCount { expected: usize, found: usize },

    #[error("Payline {payline} has {found} positions, expected {expected}")]
    PaylineLength {
        payline: usize,
        expected: usize,
        found: usize,
    },

    #[error("Payline {payline} position {position} selects row {row}, rows are 1..=3")]
    RowOutOfRange {
        payline: usize,
        position: usize,
        row: u8,
    },

    #[error("Symbol name cannot be empty (reel {reel}, stop {stop})")]
    EmptySymbolName { reel: usize, stop: usize },

    #[error("Symbol '{name}' is {first:?} on one reel and {second:?} on another")]
    ConflictingSymbolKind {
        name: String,
        first: SymbolKind,
        second: SymbolKind,
    },

    #[error("Paytable entry '{name}' pays for {count} of a kind, counts are 3..=5")]
    PaytableCount { name: String, count: u8 },

    #[error("Paytable entry '{0}' names a wild symbol")]
    PaytableWild(String),

    #[error("Wild paytable entry '{0}' names a normal symbol")]
    WildPaytableNormal(String),

    #[error("Multiplier for '{name}' must be finite and non-negative, got {value}")]
    InvalidMultiplier { name: String, value: f64 },
}

/// Engine error type
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Bet {0} is not an allowed bet size")]
    InvalidBet(f64),
}

/// Result type alias
pub type SlotResult<T> = Result<T, SlotError>;
