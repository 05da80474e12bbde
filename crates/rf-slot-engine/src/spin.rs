//! Spin result types

use serde::{Deserialize, Serialize};

use crate::aggregator::PayoutSummary;
use crate::evaluator::PaylineOutcome;

/// Whether a spin result carries per-payline detail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaylineDetail {
    /// Include every payline outcome (losing lines too)
    #[default]
    Full,
    /// Grid and grand totals only
    Omit,
}

/// Complete result of a single spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Visible symbols, reel by reel, rows top to bottom
    pub result: Vec<[String; 3]>,
    /// Outcome of every payline, in payline order
    #[serde(
        rename = "allPaylines",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub all_paylines: Option<Vec<PaylineOutcome>>,
    /// Sum of winning line multipliers
    #[serde(rename = "mult")]
    pub multiplier: f64,
    /// Sum of winning line wild multipliers
    #[serde(rename = "wildMult")]
    pub wild_multiplier: f64,
    /// Total payout in bet units
    pub total: f64,
}

impl SpinResult {
    /// Assemble from a sampled grid and its payout summary
    pub fn from_summary(
        result: Vec<[String; 3]>,
        summary: PayoutSummary,
        detail: PaylineDetail,
    ) -> Self {
        let all_paylines = match detail {
            PaylineDetail::Full => Some(summary.lines),
            PaylineDetail::Omit => None,
        };

        Self {
            result,
            all_paylines,
            multiplier: summary.grand_multiplier,
            wild_multiplier: summary.grand_wild_multiplier,
            total: summary.grand_total,
        }
    }

    /// Check if this is a winning spin
    pub fn is_win(&self) -> bool {
        self.total > 0.0
    }

    /// Winning payline outcomes (empty when detail was omitted)
    pub fn winning_lines(&self) -> impl Iterator<Item = &PaylineOutcome> {
        self.all_paylines
            .iter()
            .flatten()
            .filter(|line| line.is_win())
    }

    /// Win-to-bet ratio
    pub fn win_ratio(&self, total_bet: f64) -> f64 {
        if total_bet > 0.0 {
            self.total / total_bet
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> PayoutSummary {
        let line = PaylineOutcome {
            symbols: ["s4", "s4", "s4", "s9", "s1"].map(String::from),
            count: 3,
            base_symbol: Some("s4".into()),
            bet_per_line: 0.5,
            multiplier: 1.0,
            wild_multiplier: 1.0,
            total: 0.5,
        };
        let miss = PaylineOutcome {
            symbols: ["s2", "s9", "s4", "s9", "s1"].map(String::from),
            count: 1,
            base_symbol: Some("s2".into()),
            bet_per_line: 0.5,
            multiplier: 0.0,
            wild_multiplier: 0.0,
            total: 0.0,
        };

        PayoutSummary {
            lines: vec![line, miss],
            grand_multiplier: 1.0,
            grand_wild_multiplier: 1.0,
            grand_total: 0.5,
        }
    }

    fn grid() -> Vec<[String; 3]> {
        vec![["s1", "s4", "s2"].map(String::from); 5]
    }

    #[test]
    fn test_full_detail_serialization() {
        let spin = SpinResult::from_summary(grid(), summary(), PaylineDetail::Full);
        let json = serde_json::to_value(&spin).unwrap();

        assert_eq!(json["result"].as_array().unwrap().len(), 5);
        assert_eq!(json["allPaylines"].as_array().unwrap().len(), 2);
        assert_eq!(json["mult"], 1.0);
        assert_eq!(json["wildMult"], 1.0);
        assert_eq!(json["total"], 0.5);
        assert_eq!(spin.winning_lines().count(), 1);
    }

    #[test]
    fn test_omitted_detail_drops_field() {
        let spin = SpinResult::from_summary(grid(), summary(), PaylineDetail::Omit);
        let json = serde_json::to_value(&spin).unwrap();

        assert!(json.get("allPaylines").is_none());
        assert_eq!(json["total"], 0.5);
        assert_eq!(spin.winning_lines().count(), 0);

        let back: SpinResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, spin);
    }

    #[test]
    fn test_win_ratio() {
        let spin = SpinResult::from_summary(grid(), summary(), PaylineDetail::Full);
        assert!(spin.is_win());
        assert_eq!(spin.win_ratio(10.0), 0.05);
        assert_eq!(spin.win_ratio(0.0), 0.0);
    }
}
