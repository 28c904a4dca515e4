//! Simulation configuration defaults and tuning parameters.

pub struct Config {
    /// Validators per generated population.
    pub population: usize,
    /// Monte Carlo runs behind a single-rate result.
    pub single_runs: usize,
    /// Monte Carlo runs per sweep point.
    pub sweep_runs: usize,
    /// Monte Carlo runs per comparison scenario.
    pub scenario_runs: usize,
    pub seed: u64,
}

pub const DEFAULT_CONFIG: Config = Config::default();

impl Config {
    const fn default() -> Self {
        Self {
            population: 2000,
            single_runs: 12,
            sweep_runs: 8,
            scenario_runs: 10,
            seed: 7,
        }
    }
}
