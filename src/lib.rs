//! Crate entry points and public re-exports for the validator
//! lock-duration equilibrium model.

pub mod calibration;
pub mod config;
pub mod engine;
pub mod exit_option;
pub mod monte_carlo;
pub mod population;
pub mod reward;
pub mod safety;
pub mod simulator;
pub mod sweep;

pub use {
    calibration::{
        duration_label, CURRENT_MIN_RATE_PCT, DURATIONS, DURATION_COUNT, MAX_RATE,
        SAFETY_THRESHOLD_PCT,
    },
    config::{Config, DEFAULT_CONFIG},
    engine::{run_once, run_sweep},
    exit_option::option_value,
    monte_carlo::{average_runs, AverageError},
    population::{generate_population, PopulationError, Validator},
    reward::{apy, effective_rate},
    safety::Safety,
    simulator::{simulate, Params, RunResult},
    sweep::{find_safety_threshold, SweepPoint},
};
