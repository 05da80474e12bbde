//! Spin engine, ties sampling, evaluation and aggregation together

use std::sync::Arc;

use parking_lot::Mutex;
use rand::prelude::*;

use crate::aggregator::{aggregate, bet_per_line};
use crate::config::GameConfig;
use crate::sampler::{SpinWindow, sample_window};
use crate::spin::{PaylineDetail, SpinResult};
use crate::wager::BetSize;

/// Slot spin engine
///
/// Holds an immutable, shareable game config and its own random source.
/// The RNG sits behind a mutex so one engine can serve spins from several
/// threads; callers that want lock-free spins pass their own RNG to
/// [`SpinEngine::spin_with`].
pub struct SpinEngine<R = StdRng> {
    /// Game definition
    config: Arc<GameConfig>,
    /// Random number generator
    rng: Mutex<R>,
    /// Per-payline detail in results
    payline_detail: PaylineDetail,
}

impl SpinEngine<StdRng> {
    /// Create an engine seeded from the OS
    pub fn new(config: impl Into<Arc<GameConfig>>) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a reproducible engine
    pub fn seeded(config: impl Into<Arc<GameConfig>>, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Reseed the engine RNG
    pub fn seed(&self, seed: u64) {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
    }
}

impl<R: Rng> SpinEngine<R> {
    /// Create with a specific random source
    pub fn with_rng(config: impl Into<Arc<GameConfig>>, rng: R) -> Self {
        Self {
            config: config.into(),
            rng: Mutex::new(rng),
            payline_detail: PaylineDetail::default(),
        }
    }

    /// Builder: choose whether results carry per-payline detail
    pub fn with_payline_detail(mut self, detail: PaylineDetail) -> Self {
        self.payline_detail = detail;
        self
    }

    /// Run one spin at `total_bet`, drawing from the engine RNG
    ///
    /// The bet is not checked against the denomination list; use
    /// [`SpinEngine::spin_bet`] for a validated wager.
    pub fn spin(&self, total_bet: f64) -> SpinResult {
        // The lock covers sampling only; evaluation runs unlocked
        let window = {
            let mut rng = self.rng.lock();
            sample_window(self.config.reels(), &mut *rng)
        };
        self.settle(&window, total_bet)
    }

    /// Run one spin with a validated bet
    pub fn spin_bet(&self, bet: BetSize) -> SpinResult {
        self.spin(bet.value())
    }

    /// Run one spin drawing from a caller-supplied RNG
    pub fn spin_with<G: Rng + ?Sized>(&self, rng: &mut G, total_bet: f64) -> SpinResult {
        let window = sample_window(self.config.reels(), rng);
        self.settle(&window, total_bet)
    }

    /// Evaluate a sampled grid into a spin result
    fn settle(&self, window: &SpinWindow<'_>, total_bet: f64) -> SpinResult {
        let summary = aggregate(&self.config, window, total_bet);

        log::debug!(
            "Spin at bet {total_bet} ({} per line): {} winning lines, total {}",
            bet_per_line(total_bet),
            summary.winning_lines(),
            summary.grand_total
        );

        SpinResult::from_summary(window.display_grid(), summary, self.payline_detail)
    }

    /// Get game config
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shared handle to the game config
    pub fn shared_config(&self) -> Arc<GameConfig> {
        Arc::clone(&self.config)
    }

    pub fn payline_detail(&self) -> PaylineDetail {
        self.payline_detail
    }
}

impl Default for SpinEngine<StdRng> {
    fn default() -> Self {
        Self::new(GameConfig::standard())
    }
}
