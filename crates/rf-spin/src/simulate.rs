//! Parallel batch simulation

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use rf_slot_engine::{BetSize, SimulationSummary, SpinEngine};

/// Run `spins` spins split across `workers` independent RNG streams
///
/// With a seed, worker `i` draws from `ChaCha8Rng::seed_from_u64(seed + i)`,
/// so a run is reproducible for a fixed worker count.
pub fn run(
    engine: &SpinEngine,
    bet: BetSize,
    spins: u64,
    workers: usize,
    seed: Option<u64>,
) -> SimulationSummary {
    let workers = workers.max(1);
    let base = spins / workers as u64;
    let extra = spins % workers as u64;

    (0..workers)
        .into_par_iter()
        .map(|worker| {
            let share = base + u64::from((worker as u64) < extra);
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(worker as u64)),
                None => ChaCha8Rng::from_os_rng(),
            };

            let mut summary = SimulationSummary::new();
            for _ in 0..share {
                let result = engine.spin_with(&mut rng, bet.value());
                summary.record(bet.value(), &result);
            }

            log::debug!("Worker {worker} finished {share} spins");
            summary
        })
        .reduce(SimulationSummary::new, SimulationSummary::merge)
}
