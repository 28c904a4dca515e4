//! Fixed calibration constants for the duration-choice model.
//!
//! The segment mixture and the observed baseline are derived from an external
//! on-chain dataset of staking transactions bucketed by lock duration; the
//! reward constants come from the proposed emission formula. When the
//! calibration dataset changes, update these tables, not the algorithms.

/// Allowed lock durations in days, ascending. `1` is the 24-hour minimum.
pub const DURATIONS: [u32; 8] = [1, 7, 14, 30, 60, 90, 180, 365];
pub const DURATION_COUNT: usize = DURATIONS.len();

/// Interpolation period of the emission formula, days.
pub const PERIOD_DAYS: f64 = 365.0;

/// Upper bound of the consumption-rate interpolation, fraction.
pub const MAX_RATE: f64 = 0.12;

/// Network totals behind the reward multiplier, currency units.
pub const TOTAL_STAKE_SUPPLY: f64 = 720e6;
pub const SELF_BONDED_STAKE: f64 = 450e6;

/// Delegation yield multiplier: (total - self-bonded) / self-bonded.
pub const STAKE_MULTIPLIER: f64 = (TOTAL_STAKE_SUPPLY - SELF_BONDED_STAKE) / SELF_BONDED_STAKE;

/// Damping applied to the volatility term of the exit-option price.
pub const OPTION_VOL_FACTOR: f64 = 0.4;

/// Maximum acceptable stake share at the minimum duration, percent.
/// Policy constant from the consensus-safety analysis, not derived here.
pub const SAFETY_THRESHOLD_PCT: f64 = 33.0;

/// Stake share at the minimum duration above which the network is
/// considered in immediate danger, percent.
pub const DANGER_THRESHOLD_PCT: f64 = 50.0;

/// Minimum consumption rate in force today, percentage points.
/// Display baseline only; never consumed by the simulation itself.
pub const CURRENT_MIN_RATE_PCT: f64 = 10.0;

/// One behavioral segment of the validator mixture.
pub struct Segment {
    /// Upper cumulative weight bound in [0, 1]; segments are scanned in order.
    pub cdf: f64,
    /// Uniform range for the liquidity-preference coefficient.
    pub liquidity_preference: (f64, f64),
    /// Uniform range for the stake size, currency units.
    pub stake: (f64, f64),
}

/// Six-segment behavioral mixture calibrated against the observed baseline.
pub const SEGMENTS: [Segment; 6] = [
    // institutional long-term
    Segment { cdf: 0.03, liquidity_preference: (0.0, 0.05), stake: (200_000.0, 1_400_000.0) },
    // medium-long horizon
    Segment { cdf: 0.06, liquidity_preference: (0.05, 0.15), stake: (50_000.0, 550_000.0) },
    // moderate, roughly 31-60d planning
    Segment { cdf: 0.10, liquidity_preference: (0.10, 0.22), stake: (30_000.0, 330_000.0) },
    // quarterly planners
    Segment { cdf: 0.22, liquidity_preference: (0.15, 0.30), stake: (20_000.0, 270_000.0) },
    // short-term buffer
    Segment { cdf: 0.62, liquidity_preference: (0.30, 0.50), stake: (2_000.0, 302_000.0) },
    // minimum-duration seekers
    Segment { cdf: 1.00, liquidity_preference: (0.50, 1.00), stake: (2_000.0, 32_000.0) },
];

/// Observed distribution bracket from the calibration dataset.
pub struct ObservedBucket {
    pub label: &'static str,
    pub count_pct: f64,
    pub stake_pct: f64,
}

/// On-chain baseline under the current 14-day minimum duration.
pub const OBSERVED_BASELINE: [ObservedBucket; 7] = [
    ObservedBucket { label: "14d", count_pct: 33.0, stake_pct: 6.0 },
    ObservedBucket { label: "15-30d", count_pct: 39.9, stake_pct: 43.3 },
    ObservedBucket { label: "31-60d", count_pct: 11.8, stake_pct: 18.5 },
    ObservedBucket { label: "61-90d", count_pct: 4.2, stake_pct: 9.2 },
    ObservedBucket { label: "91-180d", count_pct: 3.5, stake_pct: 6.7 },
    ObservedBucket { label: "181-270d", count_pct: 0.6, stake_pct: 0.6 },
    ObservedBucket { label: "271-365d", count_pct: 3.1, stake_pct: 12.5 },
];

/// Size of the dataset the baseline and mixture were fitted on.
pub const OBSERVED_TRANSACTIONS: u64 = 13_773;
pub const OBSERVED_TOTAL_STAKE: f64 = 1_069_190_664.0;

/// Human label for a duration: the minimum shows as hours, the maximum as a year.
pub fn duration_label(days: u32) -> String {
    match days {
        1 => "24h".to_string(),
        365 => "1yr".to_string(),
        d => format!("{d}d"),
    }
}
