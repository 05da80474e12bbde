//! Paylines and paytables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of reel positions a payline crosses
pub const PAYLINE_LENGTH: usize = 5;

/// Visible rows per reel window
pub const WINDOW_ROWS: u8 = 3;

/// Smallest streak that can pay
pub const MIN_WIN_COUNT: usize = 3;

/// A payline definition
///
/// Row selectors are 1-based: 1 = previous stop, 2 = current stop,
/// 3 = next stop of the reel window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Payline {
    rows: [u8; PAYLINE_LENGTH],
}

impl Payline {
    /// Create a payline, checking its length and row range
    pub fn new(index: usize, rows: &[u8]) -> Result<Self, ConfigError> {
        let rows: [u8; PAYLINE_LENGTH] =
            rows.try_into().map_err(|_| ConfigError::PaylineLength {
                payline: index,
                expected: PAYLINE_LENGTH,
                found: rows.len(),
            })?;

        if let Some((position, &row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| !(1..=WINDOW_ROWS).contains(*row))
        {
            return Err(ConfigError::RowOutOfRange {
                payline: index,
                position,
                row,
            });
        }

        Ok(Self { rows })
    }

    /// Same row across all reels
    pub fn straight(row: u8) -> Self {
        Self {
            rows: [row.clamp(1, WINDOW_ROWS); PAYLINE_LENGTH],
        }
    }

    /// 1-based row selectors
    pub fn rows(&self) -> &[u8; PAYLINE_LENGTH] {
        &self.rows
    }

    /// 0-based window row for a reel
    #[inline]
    pub fn row_index(&self, reel: usize) -> usize {
        (self.rows[reel] - 1) as usize
    }
}

/// The 20 paylines of the standard 5×3 game
pub fn standard_20_paylines() -> Vec<Payline> {
    const ROWS: [[u8; PAYLINE_LENGTH]; 20] = [
        [1, 1, 1, 1, 1],
        [2, 2, 1, 2, 2],
        [3, 2, 1, 2, 3],
        [2, 1, 2, 3, 2],
        [2, 2, 2, 2, 2],
        [2, 2, 3, 2, 2],
        [3, 3, 2, 1, 1],
        [1, 2, 2, 2, 1],
        [3, 3, 3, 3, 3],
        [1, 1, 3, 1, 1],
        [1, 1, 2, 3, 3],
        [3, 2, 2, 2, 3],
        [2, 1, 1, 1, 2],
        [3, 3, 1, 3, 3],
        [2, 3, 2, 1, 2],
        [1, 2, 1, 2, 1],
        [2, 3, 3, 3, 2],
        [1, 2, 3, 2, 1],
        [1, 3, 3, 3, 1],
        [3, 2, 3, 2, 3],
    ];

    ROWS.iter().map(|&rows| Payline { rows }).collect()
}

/// Base paytable: symbol name → (streak count → multiplier)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayTable(BTreeMap<String, BTreeMap<u8, f64>>);

impl PayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the multipliers for 3, 4 and 5 of a kind
    pub fn with_symbol(mut self, name: impl Into<String>, pays: [f64; 3]) -> Self {
        let row = (MIN_WIN_COUNT as u8..).zip(pays).collect();
        self.0.insert(name.into(), row);
        self
    }

    /// Multiplier for `count` of a kind, 0 when the cell is not defined
    pub fn multiplier_for(&self, name: &str, count: usize) -> f64 {
        u8::try_from(count)
            .ok()
            .and_then(|count| self.0.get(name)?.get(&count))
            .copied()
            .unwrap_or(0.0)
    }

    /// Check whether any cell is defined for `count` of a kind
    pub fn has_cell(&self, name: &str, count: usize) -> bool {
        u8::try_from(count)
            .ok()
            .is_some_and(|count| self.0.get(name).is_some_and(|row| row.contains_key(&count)))
    }

    /// Iterate rows in name order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &BTreeMap<u8, f64>)> {
        self.0.iter().map(|(name, row)| (name.as_str(), row))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Wild paytable: wild symbol name → multiplier contribution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WildPayTable(BTreeMap<String, f64>);

impl WildPayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a wild's multiplier
    pub fn with_wild(mut self, name: impl Into<String>, multiplier: f64) -> Self {
        self.0.insert(name.into(), multiplier);
        self
    }

    /// Multiplier for a wild symbol, 0 when it has no entry
    pub fn wild_multiplier_for(&self, name: &str) -> f64 {
        self.0.get(name).copied().unwrap_or(0.0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, &mult)| (name.as_str(), mult))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
