//! Exit-option pricing: the yield cost of staying locked past an exit point.

use crate::calibration::{OPTION_VOL_FACTOR, PERIOD_DAYS};

/// Value of the liquidity forgone by staying locked until `lock_days`
/// instead of exiting at `exit_day`, in fractional-yield units.
///
/// Zero when the exit point is not earlier than the lock. Otherwise a
/// square-root-of-time diffusion term plus a linear opportunity cost from
/// the forgone alternative yield, both over the remaining locked fraction
/// of a year.
pub fn option_value(exit_day: f64, lock_days: f64, volatility: f64, alternative_yield: f64) -> f64 {
    if exit_day >= lock_days {
        return 0.0;
    }
    let t = (lock_days - exit_day) / PERIOD_DAYS;
    volatility * t.sqrt() * OPTION_VOL_FACTOR + alternative_yield * t
}
