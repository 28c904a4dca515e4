//! Entry points for the presentation layer: one averaged run, or a sweep.

use crate::{
    config::Config,
    monte_carlo::{average_runs, AverageError},
    simulator::{Params, RunResult},
    sweep::{self, SweepPoint},
};

/// One Monte-Carlo-averaged run at a single parameter set.
pub fn run_once(
    config: &Config,
    min_rate: f64,
    volatility: f64,
    alternative_yield: f64,
) -> Result<RunResult, AverageError> {
    let params = Params {
        min_rate,
        volatility,
        alternative_yield,
    };
    average_runs(
        &params,
        config.single_runs,
        config.population,
        Some(config.seed),
    )
}

/// Full min-rate sweep at fixed volatility and alternative yield.
pub fn run_sweep(
    config: &Config,
    volatility: f64,
    alternative_yield: f64,
) -> Result<Vec<SweepPoint>, AverageError> {
    sweep::sweep(volatility, alternative_yield, config)
}
