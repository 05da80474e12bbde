//! rf-spin: local front end for the slot spin engine
//!
//! Usage:
//!   rf-spin spin --bet 2.4                 - One spin, printed as JSON
//!   rf-spin simulate --bet 1 --spins 1000000
//!   rf-spin check-config --config game.yaml

mod simulate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use rf_slot_engine::{BetSize, GameConfig, PaylineDetail, SpinEngine};

#[derive(Parser)]
#[command(name = "rf-spin", about = "5x3 twenty-line slot spin engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GameArgs {
    /// Game config file (.json, .yaml or .yml); built-in game when absent
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for reproducible spins
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one spin and print the result
    Spin {
        /// Total bet
        #[arg(short, long)]
        bet: f64,
        #[command(flatten)]
        game: GameArgs,
        /// Leave per-payline detail out of the output
        #[arg(long)]
        no_detail: bool,
    },
    /// Run many spins in parallel and report RTP and hit rate
    Simulate {
        /// Total bet per spin
        #[arg(short, long)]
        bet: f64,
        /// Number of spins
        #[arg(short = 'n', long, default_value_t = 100_000)]
        spins: u64,
        /// Worker threads (defaults to all cores)
        #[arg(short, long)]
        threads: Option<usize>,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Load and validate a config file
    CheckConfig {
        /// Config file to check
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Spin {
            bet,
            game,
            no_detail,
        } => spin(bet, &game, no_detail),
        Commands::Simulate {
            bet,
            spins,
            threads,
            game,
        } => simulate(bet, spins, threads, &game),
        Commands::CheckConfig { config } => check_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<Arc<GameConfig>> {
    let config = match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load game config {}", path.display()))?,
        None => GameConfig::standard(),
    };
    Ok(Arc::new(config))
}

fn engine_for(game: &GameArgs) -> Result<SpinEngine> {
    let config = load_config(game.config.as_deref())?;
    Ok(match game.seed {
        Some(seed) => SpinEngine::seeded(config, seed),
        None => SpinEngine::new(config),
    })
}

fn spin(bet: f64, game: &GameArgs, no_detail: bool) -> Result<()> {
    let bet = BetSize::new(bet).context("Invalid bet")?;

    let detail = if no_detail {
        PaylineDetail::Omit
    } else {
        PaylineDetail::Full
    };
    let engine = engine_for(game)?.with_payline_detail(detail);

    let result = engine.spin_bet(bet);
    let json = serde_json::to_string_pretty(&result).context("Failed to serialize spin result")?;
    println!("{json}");

    Ok(())
}

fn simulate(bet: f64, spins: u64, threads: Option<usize>, game: &GameArgs) -> Result<()> {
    let bet = BetSize::new(bet).context("Invalid bet")?;
    let engine = engine_for(game)?.with_payline_detail(PaylineDetail::Omit);

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        pool = pool.num_threads(threads);
    }
    let pool = pool.build().context("Failed to build worker pool")?;
    let workers = pool.current_num_threads();

    log::info!("Simulating {spins} spins at bet {bet} on {workers} workers");
    let summary = pool.install(|| simulate::run(&engine, bet, spins, workers, game.seed));

    println!("Spins:         {}", summary.spins);
    println!("Total staked:  {:.2}", summary.total_bet);
    println!("Total paid:    {:.2}", summary.total_win);
    println!("RTP:           {:.3}%", summary.rtp());
    println!("Hit rate:      {:.3}%", summary.hit_rate());
    println!("Max win:       {:.2}", summary.max_win);

    Ok(())
}

fn check_config(path: &Path) -> Result<()> {
    let config = GameConfig::load(path)
        .with_context(|| format!("Invalid game config {}", path.display()))?;

    println!("✓ {} is valid", path.display());
    println!("  Reels:          {}", config.reels().len());
    println!("  Paylines:       {}", config.paylines().len());
    println!("  Paying symbols: {}", config.paytable().len());
    println!("  Wild symbols:   {}", config.wild_paytable().len());

    Ok(())
}
