//! Min-rate parameter sweep and safety-threshold search.

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    calibration::{DURATIONS, DURATION_COUNT, SAFETY_THRESHOLD_PCT},
    config::Config,
    monte_carlo::{average_runs, AverageError},
    reward::apy,
    simulator::Params,
};

/// Sweep bounds over `min_rate`, percentage points.
const SWEEP_START_PP: f64 = 1.0;
const SWEEP_END_PP: f64 = 12.0;
const SWEEP_STEP_PP: f64 = 0.5;

/// One sweep point: the averaged run at a given min rate, reduced to the
/// concentration scalars and the APY endpoints of the duration set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Min consumption rate, percentage points.
    pub min_rate: f64,
    pub stake_at_min: f64,
    pub count_at_min: f64,
    pub stake_within_30d: f64,
    pub apy_min_duration: f64,
    pub apy_max_duration: f64,
}

/// Sweeps the min rate from 1 to 12 percentage points in half-point steps,
/// averaging `config.sweep_runs` populations per point.
///
/// Points are independent and run in parallel; each derives its own seed
/// from the configured one, keeping the sweep reproducible.
pub fn sweep(
    volatility: f64,
    alternative_yield: f64,
    config: &Config,
) -> Result<Vec<SweepPoint>, AverageError> {
    let steps = ((SWEEP_END_PP - SWEEP_START_PP) / SWEEP_STEP_PP) as usize + 1;
    (0..steps)
        .into_par_iter()
        .map(|idx| {
            let min_rate = SWEEP_START_PP + idx as f64 * SWEEP_STEP_PP;
            let params = Params {
                min_rate,
                volatility,
                alternative_yield,
            };
            let seed = config.seed.wrapping_add(idx as u64);
            let result = average_runs(&params, config.sweep_runs, config.population, Some(seed))?;
            Ok(SweepPoint {
                min_rate,
                stake_at_min: result.stake_at_min,
                count_at_min: result.count_at_min,
                stake_within_30d: result.stake_within_30d,
                apy_min_duration: apy(min_rate / 100.0, DURATIONS[0] as f64),
                apy_max_duration: apy(min_rate / 100.0, DURATIONS[DURATION_COUNT - 1] as f64),
            })
        })
        .collect()
}

/// First swept min rate (ascending) whose stake share at the minimum
/// duration stays within the safety threshold, or `None` if the whole
/// range concentrates beyond it.
pub fn find_safety_threshold(points: &[SweepPoint]) -> Option<f64> {
    points
        .iter()
        .find(|point| point.stake_at_min <= SAFETY_THRESHOLD_PCT)
        .map(|point| point.min_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(min_rate: f64, stake_at_min: f64) -> SweepPoint {
        SweepPoint {
            min_rate,
            stake_at_min,
            count_at_min: 0.0,
            stake_within_30d: 0.0,
            apy_min_duration: 0.0,
            apy_max_duration: 0.0,
        }
    }

    #[test]
    fn threshold_is_first_safe_point() {
        let points = [point(1.0, 12.0), point(1.5, 30.0), point(2.0, 45.0)];
        assert_eq!(find_safety_threshold(&points), Some(1.0));

        let points = [point(1.0, 40.0), point(1.5, 33.0), point(2.0, 20.0)];
        assert_eq!(find_safety_threshold(&points), Some(1.5));
    }

    #[test]
    fn threshold_none_when_always_concentrated() {
        let points = [point(1.0, 80.0), point(1.5, 75.0)];
        assert_eq!(find_safety_threshold(&points), None);
        assert_eq!(find_safety_threshold(&[]), None);
    }
}
