//! Min-rate sweep report.
//!
//! Sweeps the minimum consumption rate from 1% to 12% and prints the
//! projected stake concentration at the 24h minimum for each step, plus
//! the highest swept rate that stays within the consensus-safety
//! threshold.
//!
//! ## Usage
//! ```bash
//! cargo run --bin sweep --release -- [volatility] [alt_yield] [--json]
//! ```

use std::env;
use std::error::Error;

use stakesim::{
    find_safety_threshold, run_sweep, Safety, CURRENT_MIN_RATE_PCT, DEFAULT_CONFIG,
    SAFETY_THRESHOLD_PCT,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 4 {
        eprintln!("Usage: sweep [volatility] [alt_yield] [--json]");
        std::process::exit(2);
    }
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args[1..].iter().filter(|a| !a.starts_with("--")).collect();
    let volatility: f64 = positional.first().map(|s| s.parse()).transpose()?.unwrap_or(0.35);
    let alternative_yield: f64 = positional.get(1).map(|s| s.parse()).transpose()?.unwrap_or(0.08);

    let points = run_sweep(&DEFAULT_CONFIG, volatility, alternative_yield)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("=======================================================");
    println!("  Min Consumption Rate Sweep");
    println!(
        "  volatility {:.0}%, alternative yield {:.0}%",
        volatility * 100.0,
        alternative_yield * 100.0
    );
    println!("=======================================================");
    println!();
    println!(
        "{:>7} {:>9} {:>9} {:>9} {:>10} {:>10}  verdict",
        "minrate", "apy@24h", "apy@1yr", "spread", "stake@24h", "count@24h"
    );
    for point in &points {
        println!(
            "{:>6.1}% {:>8.2}% {:>8.2}% {:>7.2}pp {:>9.1}% {:>9.1}%  {}",
            point.min_rate,
            point.apy_min_duration,
            point.apy_max_duration,
            point.apy_max_duration - point.apy_min_duration,
            point.stake_at_min,
            point.count_at_min,
            Safety::classify(point.stake_at_min).name(),
        );
    }
    println!();

    match find_safety_threshold(&points) {
        Some(rate) => {
            println!(
                "Safety threshold: min rate <= {:.1}% keeps stake at 24h under {:.0}%",
                rate, SAFETY_THRESHOLD_PCT
            );
            if CURRENT_MIN_RATE_PCT > rate {
                println!(
                    "Current rate of {:.1}% is {:.1}pp above the threshold",
                    CURRENT_MIN_RATE_PCT,
                    CURRENT_MIN_RATE_PCT - rate
                );
            } else {
                println!("Current rate of {:.1}% is within the threshold", CURRENT_MIN_RATE_PCT);
            }
        }
        None => println!(
            "No swept rate keeps stake at 24h under the {:.0}% threshold",
            SAFETY_THRESHOLD_PCT
        ),
    }
    Ok(())
}
