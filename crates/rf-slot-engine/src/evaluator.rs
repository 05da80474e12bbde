//! Payline evaluation: left-aligned streak matching with wild pass-through

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::paytable::{MIN_WIN_COUNT, PAYLINE_LENGTH, Payline};
use crate::sampler::SpinWindow;
use crate::symbols::Symbol;

/// Left-aligned streak on one payline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Streak<'a> {
    /// Consecutive positions (wild or matching the base) before the first mismatch
    pub count: usize,
    /// First non-wild symbol of the streak
    pub base: Option<&'a Symbol>,
}

impl Streak<'_> {
    /// A streak pays only with a base symbol and at least 3 positions
    pub fn is_win(&self) -> bool {
        self.count >= MIN_WIN_COUNT && self.base.is_some()
    }
}

/// Scan symbols left to right.
///
/// Wilds always extend the streak but never become the base. The first
/// normal symbol becomes the base; the scan stops at the first normal symbol
/// that differs from it, and nothing after that point is counted.
pub fn scan_streak<'a>(symbols: &[&'a Symbol]) -> Streak<'a> {
    let mut count = 0;
    let mut base: Option<&'a Symbol> = None;

    for &symbol in symbols {
        if symbol.is_wild() {
            count += 1;
            continue;
        }

        match base {
            None => {
                base = Some(symbol);
                count += 1;
            }
            Some(b) if b.name == symbol.name => count += 1,
            Some(_) => break,
        }
    }

    Streak { count, base }
}

/// Outcome of a single payline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaylineOutcome {
    /// Symbol names the payline crosses
    #[serde(rename = "paylineCheck")]
    pub symbols: [String; PAYLINE_LENGTH],
    /// Streak length
    pub count: usize,
    /// Base symbol name, `None` when the streak is all wild
    pub base_symbol: Option<String>,
    pub bet_per_line: f64,
    /// Paytable multiplier (0 on a loss or a missing paytable cell)
    #[serde(rename = "mult")]
    pub multiplier: f64,
    /// Summed wild multipliers, 1 without wild contribution, 0 when the streak does not qualify
    #[serde(rename = "wildMult")]
    pub wild_multiplier: f64,
    /// `bet_per_line * multiplier * wild_multiplier`
    pub total: f64,
}

impl PaylineOutcome {
    pub fn is_win(&self) -> bool {
        self.total > 0.0
    }
}

/// Evaluate one payline against the sampled grid
pub fn check_payline(
    config: &GameConfig,
    payline: &Payline,
    window: &SpinWindow<'_>,
    bet_per_line: f64,
) -> PaylineOutcome {
    let symbols: [&Symbol; PAYLINE_LENGTH] =
        std::array::from_fn(|reel| window.reel(reel).row(payline.row_index(reel)));

    let streak = scan_streak(&symbols);

    let (multiplier, wild_multiplier, total) = match streak.base {
        Some(base) if streak.is_win() => {
            if !config.paytable().has_cell(&base.name, streak.count) {
                log::warn!(
                    "No paytable cell for {} x{}, line pays 0",
                    base.name,
                    streak.count
                );
            }
            let multiplier = config.multiplier_for(&base.name, streak.count);

            let wild_sum: f64 = symbols[..streak.count]
                .iter()
                .filter(|s| s.is_wild())
                .map(|s| config.wild_multiplier_for(&s.name))
                .sum();
            // Identity when no wild contributed
            let wild_multiplier = if wild_sum == 0.0 { 1.0 } else { wild_sum };

            (
                multiplier,
                wild_multiplier,
                bet_per_line * multiplier * wild_multiplier,
            )
        }
        _ => (0.0, 0.0, 0.0),
    };

    PaylineOutcome {
        symbols: symbols.map(|s| s.name.clone()),
        count: streak.count,
        base_symbol: streak.base.map(|s| s.name.clone()),
        bet_per_line,
        multiplier,
        wild_multiplier,
        total,
    }
}
