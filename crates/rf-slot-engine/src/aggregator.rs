//! Payout aggregation across all paylines of a spin

use crate::config::{GameConfig, PAYLINE_COUNT};
use crate::evaluator::{PaylineOutcome, check_payline};
use crate::sampler::SpinWindow;

/// Stake carried by each payline
#[inline]
pub fn bet_per_line(total_bet: f64) -> f64 {
    total_bet / PAYLINE_COUNT as f64
}

/// Aggregated result of evaluating every payline
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutSummary {
    /// Per-line detail, in payline order (losing lines included)
    pub lines: Vec<PaylineOutcome>,
    /// Sum of winning line multipliers
    pub grand_multiplier: f64,
    /// Sum of winning line wild multipliers
    pub grand_wild_multiplier: f64,
    /// Sum of winning line totals
    pub grand_total: f64,
}

impl PayoutSummary {
    /// Number of winning lines
    pub fn winning_lines(&self) -> usize {
        self.lines.iter().filter(|l| l.is_win()).count()
    }

    pub fn is_win(&self) -> bool {
        self.grand_total > 0.0
    }
}

/// Evaluate every configured payline and sum the winning ones
pub fn aggregate(config: &GameConfig, window: &SpinWindow<'_>, total_bet: f64) -> PayoutSummary {
    let bet_per_line = bet_per_line(total_bet);

    let mut summary = PayoutSummary {
        lines: Vec::with_capacity(config.paylines().len()),
        grand_multiplier: 0.0,
        grand_wild_multiplier: 0.0,
        grand_total: 0.0,
    };

    for (index, payline) in config.paylines().iter().enumerate() {
        let outcome = check_payline(config, payline, window, bet_per_line);

        // Losing lines stay in the detail but never touch the sums
        if outcome.is_win() {
            log::trace!(
                "Line {index}: {} x{} pays {}",
                outcome.base_symbol.as_deref().unwrap_or("-"),
                outcome.count,
                outcome.total
            );
            summary.grand_multiplier += outcome.multiplier;
            summary.grand_wild_multiplier += outcome.wild_multiplier;
            summary.grand_total += outcome.total;
        }

        summary.lines.push(outcome);
    }

    summary
}
