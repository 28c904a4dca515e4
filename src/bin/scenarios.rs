//! Scenario comparison report.
//!
//! Prints the observed on-chain baseline under the current 14-day minimum,
//! then the projected duration distribution once the minimum drops to 24h,
//! at several candidate minimum consumption rates.
//!
//! ## Usage
//! ```bash
//! cargo run --bin scenarios --release -- [volatility] [alt_yield]
//! ```

use std::env;
use std::error::Error;

use stakesim::{
    average_runs,
    calibration::{OBSERVED_BASELINE, OBSERVED_TOTAL_STAKE, OBSERVED_TRANSACTIONS},
    duration_label, Params, Safety, DEFAULT_CONFIG, DURATIONS,
};

const SCENARIO_RATES_PP: [f64; 4] = [10.0, 8.0, 6.0, 4.0];

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: scenarios [volatility] [alt_yield]");
        std::process::exit(2);
    }
    let volatility: f64 = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(0.35);
    let alternative_yield: f64 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(0.08);

    println!("=======================================================");
    println!("  Observed Baseline (current 14-day minimum)");
    println!(
        "  {} staking transactions, {:.2}e9 staked",
        OBSERVED_TRANSACTIONS,
        OBSERVED_TOTAL_STAKE / 1e9
    );
    println!("=======================================================");
    println!("{:>9} {:>10} {:>10}", "bracket", "by count", "by stake");
    for bucket in &OBSERVED_BASELINE {
        println!(
            "{:>9} {:>9.1}% {:>9.1}%",
            bucket.label, bucket.count_pct, bucket.stake_pct
        );
    }
    println!();

    println!("Projected distributions once the minimum drops to 24h");
    println!(
        "volatility {:.0}%, alternative yield {:.0}%, {} runs each",
        volatility * 100.0,
        alternative_yield * 100.0,
        DEFAULT_CONFIG.scenario_runs
    );
    println!();

    for min_rate in SCENARIO_RATES_PP {
        let params = Params {
            min_rate,
            volatility,
            alternative_yield,
        };
        let result = average_runs(
            &params,
            DEFAULT_CONFIG.scenario_runs,
            DEFAULT_CONFIG.population,
            Some(DEFAULT_CONFIG.seed),
        )?;
        let verdict = Safety::classify(result.stake_at_min);

        println!(
            "Min rate {:.0}%: {} ({:.1}% of stake at 24h, {:.1}% by count)",
            min_rate,
            verdict.name(),
            result.stake_at_min,
            result.count_at_min
        );
        for (idx, &days) in DURATIONS.iter().enumerate() {
            let share = result.stake_share[idx];
            if share < 0.05 {
                continue;
            }
            let bar = "#".repeat((share / 2.0).round() as usize);
            println!("  {:>4} {:>5.1}% {}", duration_label(days), share, bar);
        }
        let apys = &result.apy_by_duration;
        println!(
            "  apy: 24h {:.2}%, 14d {:.2}%, 1yr {:.2}%, spread {:.2}pp",
            apys[0],
            apys[2],
            apys[DURATIONS.len() - 1],
            apys[DURATIONS.len() - 1] - apys[0]
        );
        println!();
    }
    Ok(())
}
