//! Percolation threshold estimator.
//!
//! Usage: `percolation-stats <n> <trials> [seed]`
//!
//! Set `RUST_LOG=debug` to see every trial's threshold.

use std::time::Instant;

use log::info;
use percolation::config::StatsConfig;
use percolation::PercolationStats;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match StatsConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: percolation-stats <n> <trials> [seed]");
            std::process::exit(2);
        }
    };

    info!(
        "running {} trials on a {}x{} grid (seed: {:?})",
        config.trials, config.n, config.n, config.seed
    );
    let start = Instant::now();
    let stats = PercolationStats::from_config(&config)?;
    info!("finished in {:.2?}", start.elapsed());

    println!("{}", stats);
    Ok(())
}
