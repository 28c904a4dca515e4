//! Single-run duration choice and bucket aggregation.

use serde::Serialize;

use crate::{
    calibration::{DURATIONS, DURATION_COUNT},
    exit_option::option_value,
    population::Validator,
    reward::apy,
};

/// Scalar inputs of one simulation run.
///
/// `min_rate` is in percentage points (the emission formula consumes the
/// fraction); `volatility` and `alternative_yield` are fractions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Params {
    pub min_rate: f64,
    pub volatility: f64,
    pub alternative_yield: f64,
}

/// Aggregated outcome of one run. Arrays are parallel to [`DURATIONS`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunResult {
    /// APY per duration, percent. Depends only on the parameters.
    pub apy_by_duration: [f64; DURATION_COUNT],
    /// Share of total stake per duration bucket, percent; sums to 100.
    pub stake_share: [f64; DURATION_COUNT],
    /// Share of validator count per duration bucket, percent; sums to 100.
    pub count_share: [f64; DURATION_COUNT],
    /// Stake share at the minimum (24h) duration, percent.
    pub stake_at_min: f64,
    /// Count share at the minimum duration, percent.
    pub count_at_min: f64,
    /// Cumulative stake share locked for at most 7 days, percent.
    pub stake_within_7d: f64,
    /// Cumulative stake share locked for at most 30 days, percent.
    pub stake_within_30d: f64,
}

/// Runs the utility-maximizing duration choice for every validator and
/// aggregates stake and count per duration bucket.
///
/// Utility per candidate duration is the APY minus the validator's
/// liquidity preference times the exit-option cost, the latter priced
/// against the 24h exit point and scaled to percentage-point units.
pub fn simulate(params: &Params, validators: &[Validator]) -> RunResult {
    let min_rate = params.min_rate / 100.0;
    let mut apys = [0.0; DURATION_COUNT];
    // The option cost is validator-independent, so it is priced once per
    // duration instead of once per validator.
    let mut exit_costs = [0.0; DURATION_COUNT];
    for (idx, &days) in DURATIONS.iter().enumerate() {
        apys[idx] = apy(min_rate, days as f64);
        exit_costs[idx] =
            option_value(1.0, days as f64, params.volatility, params.alternative_yield) * 100.0;
    }

    let mut stake_by_bucket = [0.0; DURATION_COUNT];
    let mut count_by_bucket = [0.0; DURATION_COUNT];
    let mut utilities = [0.0; DURATION_COUNT];
    for validator in validators {
        for idx in 0..DURATION_COUNT {
            utilities[idx] = apys[idx] - validator.liquidity_preference * exit_costs[idx];
        }
        let chosen = pick_duration(&utilities);
        stake_by_bucket[chosen] += validator.stake;
        count_by_bucket[chosen] += 1.0;
    }

    let total_stake: f64 = stake_by_bucket.iter().sum();
    let stake_share = to_shares(&stake_by_bucket, total_stake);
    let count_share = to_shares(&count_by_bucket, validators.len() as f64);

    RunResult {
        apy_by_duration: apys,
        stake_at_min: stake_share[0],
        count_at_min: count_share[0],
        stake_within_7d: cumulative_share(&stake_share, 7),
        stake_within_30d: cumulative_share(&stake_share, 30),
        stake_share,
        count_share,
    }
}

/// Index of the highest utility. Exact ties go to the lowest duration:
/// only a strictly greater score displaces the incumbent, and the set is
/// iterated in ascending order. Deliberate policy; do not change.
fn pick_duration(utilities: &[f64; DURATION_COUNT]) -> usize {
    let mut best = 0;
    let mut best_utility = f64::NEG_INFINITY;
    for (idx, &utility) in utilities.iter().enumerate() {
        if utility > best_utility {
            best_utility = utility;
            best = idx;
        }
    }
    best
}

fn to_shares(buckets: &[f64; DURATION_COUNT], total: f64) -> [f64; DURATION_COUNT] {
    let mut shares = [0.0; DURATION_COUNT];
    // Empty or zero-stake populations yield all-zero shares rather than NaN.
    if total <= 0.0 {
        return shares;
    }
    for (share, &bucket) in shares.iter_mut().zip(buckets.iter()) {
        *share = bucket / total * 100.0;
    }
    shares
}

fn cumulative_share(shares: &[f64; DURATION_COUNT], limit_days: u32) -> f64 {
    DURATIONS
        .iter()
        .zip(shares.iter())
        .filter(|(&days, _)| days <= limit_days)
        .map(|(_, &share)| share)
        .sum()
}
