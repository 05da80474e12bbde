//! Symbol definitions and reel strips

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of stops on every reel strip
pub const REEL_LENGTH: usize = 13;

/// Symbol kind classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// Regular paying symbol, may become the base symbol of a line
    Normal,
    /// Wild - extends any streak, never becomes the base symbol
    Wild,
}

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Symbol name (e.g., "s1", "w2")
    pub name: String,
    /// Symbol kind
    #[serde(rename = "type")]
    pub kind: SymbolKind,
}

impl Symbol {
    /// Create a normal symbol
    pub fn normal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Normal,
        }
    }

    /// Create a wild symbol
    pub fn wild(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Wild,
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.kind == SymbolKind::Wild
    }
}

/// A circular reel strip of `REEL_LENGTH` symbols
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Reel {
    symbols: Vec<Symbol>,
}

impl Reel {
    /// Create a reel strip, checking its length
    pub fn new(reel_index: usize, symbols: Vec<Symbol>) -> Result<Self, ConfigError> {
        if symbols.len() != REEL_LENGTH {
            return Err(ConfigError::ReelLength {
                reel: reel_index,
                expected: REEL_LENGTH,
                found: symbols.len(),
            });
        }

        if let Some(stop) = symbols.iter().position(|s| s.name.is_empty()) {
            return Err(ConfigError::EmptySymbolName {
                reel: reel_index,
                stop,
            });
        }

        Ok(Self { symbols })
    }

    /// Wrap a strip whose length is already known to be `REEL_LENGTH`
    pub(crate) fn from_strip(symbols: Vec<Symbol>) -> Self {
        debug_assert_eq!(symbols.len(), REEL_LENGTH);
        Self { symbols }
    }

    /// Get symbol at position (wraps around)
    #[inline]
    pub fn symbol_at(&self, position: usize) -> &Symbol {
        &self.symbols[position % REEL_LENGTH]
    }

    /// Symbols in strip order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
