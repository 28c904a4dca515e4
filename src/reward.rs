//! Reward emission math: consumption-rate interpolation and APY.

use crate::calibration::{MAX_RATE, PERIOD_DAYS, STAKE_MULTIPLIER};

/// Effective consumption rate for a lock of `days`, as a fraction.
///
/// Linear in `days / 365` between `min_rate` and [`MAX_RATE`]; the fixed
/// duration set never exceeds 365 days, so no explicit clamp is needed.
pub fn effective_rate(min_rate: f64, days: f64) -> f64 {
    let r = days / PERIOD_DAYS;
    min_rate * (1.0 - r) + MAX_RATE * r
}

/// Annualized delegation yield for a lock of `days`, in percent.
pub fn apy(min_rate: f64, days: f64) -> f64 {
    STAKE_MULTIPLIER * effective_rate(min_rate, days) * 100.0
}
