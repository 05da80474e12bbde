//! Bet denominations

use serde::{Deserialize, Serialize};

use crate::aggregator::bet_per_line;
use crate::error::{SlotError, SlotResult};

/// Accepted total bets, in ascending order
pub const ALLOWED_BETS: [f64; 30] = [
    0.2, 0.4, 0.6, 0.8, 1.0, 1.2, 1.6, 2.0, 2.4, 2.8, 3.2, 3.6, 4.0, 5.0, 6.0, 8.0, 10.0, 14.0,
    18.0, 24.0, 32.0, 40.0, 60.0, 80.0, 100.0, 110.0, 120.0, 130.0, 140.0, 150.0,
];

/// A total bet that is one of [`ALLOWED_BETS`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BetSize(f64);

impl BetSize {
    /// Validate a total bet against the denomination list
    pub fn new(amount: f64) -> SlotResult<Self> {
        if !amount.is_finite() {
            return Err(SlotError::InvalidBet(amount));
        }

        ALLOWED_BETS
            .iter()
            .find(|&&allowed| matches_denomination(amount, allowed))
            .map(|&allowed| Self(allowed))
            .ok_or(SlotError::InvalidBet(amount))
    }

    /// Smallest denomination
    pub fn min() -> Self {
        Self(ALLOWED_BETS[0])
    }

    /// Largest denomination
    pub fn max() -> Self {
        Self(ALLOWED_BETS[ALLOWED_BETS.len() - 1])
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Stake carried by each payline
    #[inline]
    pub fn per_line(self) -> f64 {
        bet_per_line(self.0)
    }

    /// Every accepted bet
    pub fn all() -> impl Iterator<Item = Self> {
        ALLOWED_BETS.into_iter().map(Self)
    }
}

impl TryFrom<f64> for BetSize {
    type Error = SlotError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<BetSize> for f64 {
    fn from(bet: BetSize) -> Self {
        bet.0
    }
}

impl std::fmt::Display for BetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Relative tolerance for accumulated f64 error, far below a cent
const BET_TOLERANCE: f64 = 1e-9;

fn matches_denomination(amount: f64, allowed: f64) -> bool {
    (amount - allowed).abs() <= BET_TOLERANCE * allowed.max(1.0)
}
