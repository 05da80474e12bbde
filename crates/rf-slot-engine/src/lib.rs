//! # rf-slot-engine: 5×3 payline slot spin engine
//!
//! Samples five circular reel strips, evaluates twenty fixed paylines with
//! left-aligned streaks and summed wild multipliers, and aggregates the
//! winning lines into a spin result.
//!
//! ## Architecture
//!
//! ```text
//! SpinEngine
//!     │
//!     ├── GameConfig (reels, paylines, paytable, wild paytable)
//!     └── Mutex<Rng>
//!           │
//!           v
//!     sample_window → check_payline × 20 → aggregate
//!           │
//!           v
//!     SpinResult { result, allPaylines, mult, wildMult, total }
//! ```

pub mod aggregator;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod paytable;
pub mod sampler;
pub mod simulation;
pub mod spin;
pub mod symbols;
pub mod wager;

pub use aggregator::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use evaluator::*;
pub use paytable::*;
pub use sampler::*;
pub use simulation::*;
pub use spin::*;
pub use symbols::*;
pub use wager::*;
