//! Simulation statistics

use serde::{Deserialize, Serialize};

use crate::spin::SpinResult;

/// Running totals over many spins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub spins: u64,
    pub total_bet: f64,
    pub total_win: f64,
    pub winning_spins: u64,
    /// Largest single-spin payout
    pub max_win: f64,
}

impl SimulationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one spin played at `total_bet`
    pub fn record(&mut self, total_bet: f64, result: &SpinResult) {
        self.spins += 1;
        self.total_bet += total_bet;
        self.total_win += result.total;
        if result.is_win() {
            self.winning_spins += 1;
        }
        self.max_win = self.max_win.max(result.total);
    }

    /// Combine totals from another worker
    pub fn merge(mut self, other: Self) -> Self {
        self.spins += other.spins;
        self.total_bet += other.total_bet;
        self.total_win += other.total_win;
        self.winning_spins += other.winning_spins;
        self.max_win = self.max_win.max(other.max_win);
        self
    }

    /// Calculate RTP (percent)
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0.0 {
            (self.total_win / self.total_bet) * 100.0
        } else {
            0.0
        }
    }

    /// Calculate hit rate (percent)
    pub fn hit_rate(&self) -> f64 {
        if self.spins > 0 {
            (self.winning_spins as f64 / self.spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn result(total: f64) -> SpinResult {
        SpinResult {
            result: vec![["s1", "s2", "s3"].map(String::from); 5],
            all_paylines: None,
            multiplier: 0.0,
            wild_multiplier: 0.0,
            total,
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = SimulationSummary::new();
        assert_eq!(summary.rtp(), 0.0);
        assert_eq!(summary.hit_rate(), 0.0);
    }

    #[test]
    fn test_record_and_rates() {
        let mut summary = SimulationSummary::new();
        summary.record(2.0, &result(0.0));
        summary.record(2.0, &result(3.0));
        summary.record(2.0, &result(0.0));
        summary.record(2.0, &result(1.0));

        assert_eq!(summary.spins, 4);
        assert_eq!(summary.winning_spins, 2);
        assert_eq!(summary.max_win, 3.0);
        assert_relative_eq!(summary.rtp(), 50.0);
        assert_relative_eq!(summary.hit_rate(), 50.0);
    }

    #[test]
    fn test_merge() {
        let mut a = SimulationSummary::new();
        a.record(1.0, &result(4.0));
        let mut b = SimulationSummary::new();
        b.record(1.0, &result(0.0));
        b.record(1.0, &result(2.0));

        let merged = a.merge(b);
        assert_eq!(merged.spins, 3);
        assert_eq!(merged.winning_spins, 2);
        assert_eq!(merged.total_bet, 3.0);
        assert_eq!(merged.total_win, 6.0);
        assert_eq!(merged.max_win, 4.0);
    }
}
