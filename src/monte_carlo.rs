//! Monte Carlo averaging across independently generated populations.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::{error::Error, fmt};

use crate::{
    calibration::DURATION_COUNT,
    population::{generate_population, PopulationError},
    simulator::{simulate, Params, RunResult},
};

#[derive(Debug, Clone, PartialEq)]
pub enum AverageError {
    NoRuns,
    Population(PopulationError),
}

impl fmt::Display for AverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuns => f.write_str("run count must be positive"),
            Self::Population(e) => write!(f, "population error: {e}"),
        }
    }
}

impl Error for AverageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoRuns => None,
            Self::Population(e) => Some(e),
        }
    }
}

impl From<PopulationError> for AverageError {
    fn from(value: PopulationError) -> Self {
        Self::Population(value)
    }
}

/// Independent RNG streams for `count` workers, split off one seed.
///
/// `long_jump` advances the state by 2^192 steps, so the streams cannot
/// overlap within any realistic run length.
pub(crate) fn rng_streams(seed: Option<u64>, count: usize) -> Vec<Xoshiro256PlusPlus> {
    let mut base = match seed {
        Some(s) => Xoshiro256PlusPlus::seed_from_u64(s),
        None => Xoshiro256PlusPlus::from_os_rng(),
    };
    (0..count)
        .map(|_| {
            let stream = base.clone();
            base.long_jump();
            stream
        })
        .collect()
}

/// Averages `runs` independent simulations of `params`, each over a freshly
/// generated population of `population` validators.
///
/// Bucket assignment is noisy near utility decision boundaries; averaging a
/// handful of independent populations stabilizes the reported shares. The
/// APY mapping depends only on `params`, so it is taken from the first run.
/// Runs execute in parallel, one RNG stream each.
pub fn average_runs(
    params: &Params,
    runs: usize,
    population: usize,
    seed: Option<u64>,
) -> Result<RunResult, AverageError> {
    if runs == 0 {
        return Err(AverageError::NoRuns);
    }

    let results = rng_streams(seed, runs)
        .into_par_iter()
        .map(|mut rng| {
            let validators = generate_population(population, &mut rng)?;
            Ok(simulate(params, &validators))
        })
        .collect::<Result<Vec<RunResult>, PopulationError>>()?;

    let scale = 1.0 / results.len() as f64;
    let mut averaged = RunResult {
        apy_by_duration: results[0].apy_by_duration,
        stake_share: [0.0; DURATION_COUNT],
        count_share: [0.0; DURATION_COUNT],
        stake_at_min: 0.0,
        count_at_min: 0.0,
        stake_within_7d: 0.0,
        stake_within_30d: 0.0,
    };
    for run in &results {
        for idx in 0..DURATION_COUNT {
            averaged.stake_share[idx] += run.stake_share[idx] * scale;
            averaged.count_share[idx] += run.count_share[idx] * scale;
        }
        averaged.stake_at_min += run.stake_at_min * scale;
        averaged.count_at_min += run.count_at_min * scale;
        averaged.stake_within_7d += run.stake_within_7d * scale;
        averaged.stake_within_30d += run.stake_within_30d * scale;
    }
    Ok(averaged)
}
