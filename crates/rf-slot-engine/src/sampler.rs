//! Reel sampling, one random stop per reel with three visible rows around it

use rand::Rng;

use crate::paytable::PAYLINE_LENGTH;
use crate::symbols::{REEL_LENGTH, Reel, Symbol};

/// Visible rows of one reel: previous, current and next stop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelWindow<'a> {
    rows: [&'a Symbol; 3],
}

impl<'a> ReelWindow<'a> {
    pub fn new(rows: [&'a Symbol; 3]) -> Self {
        Self { rows }
    }

    /// Same symbol on all three rows
    pub fn uniform(symbol: &'a Symbol) -> Self {
        Self {
            rows: [symbol; 3],
        }
    }

    /// Symbol on a 0-based row
    #[inline]
    pub fn row(&self, row_index: usize) -> &'a Symbol {
        self.rows[row_index]
    }

    pub fn rows(&self) -> &[&'a Symbol; 3] {
        &self.rows
    }

    /// Symbol names, top to bottom
    pub fn names(&self) -> [String; 3] {
        self.rows.map(|s| s.name.clone())
    }
}

/// The sampled 5×3 grid of one spin
#[derive(Debug, Clone, PartialEq)]
pub struct SpinWindow<'a> {
    reels: [ReelWindow<'a>; PAYLINE_LENGTH],
}

impl<'a> SpinWindow<'a> {
    pub fn new(reels: [ReelWindow<'a>; PAYLINE_LENGTH]) -> Self {
        Self { reels }
    }

    /// Window of a reel
    #[inline]
    pub fn reel(&self, reel: usize) -> &ReelWindow<'a> {
        &self.reels[reel]
    }

    pub fn reels(&self) -> &[ReelWindow<'a>; PAYLINE_LENGTH] {
        &self.reels
    }

    /// Names only, reel by reel, for display
    pub fn display_grid(&self) -> Vec<[String; 3]> {
        self.reels.iter().map(ReelWindow::names).collect()
    }
}

/// Draw a stop uniformly from `0..REEL_LENGTH`
#[inline]
pub fn draw_stop<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(0..REEL_LENGTH)
}

/// Window around a fixed stop; the strip wraps circularly
pub fn window_at(reel: &Reel, stop: usize) -> ReelWindow<'_> {
    let stop = stop % REEL_LENGTH;
    let prev = (stop + REEL_LENGTH - 1) % REEL_LENGTH;
    let next = (stop + 1) % REEL_LENGTH;

    ReelWindow::new([reel.symbol_at(prev), reel.symbol_at(stop), reel.symbol_at(next)])
}

/// Sample one reel
pub fn sample_reel<'a, R: Rng + ?Sized>(reel: &'a Reel, rng: &mut R) -> ReelWindow<'a> {
    window_at(reel, draw_stop(rng))
}

/// Sample every reel, left to right
pub fn sample_window<'a, R: Rng + ?Sized>(
    reels: &'a [Reel; PAYLINE_LENGTH],
    rng: &mut R,
) -> SpinWindow<'a> {
    SpinWindow::new(reels.each_ref().map(|reel| sample_reel(reel, rng)))
}

/// Window for explicit stops, one per reel
pub fn window_for_stops<'a>(
    reels: &'a [Reel; PAYLINE_LENGTH],
    stops: &[usize; PAYLINE_LENGTH],
) -> SpinWindow<'a> {
    SpinWindow::new(std::array::from_fn(|reel| window_at(&reels[reel], stops[reel])))
}
