//! Consensus-safety verdict for a projected stake distribution.

use serde::Serialize;

use crate::calibration::{DANGER_THRESHOLD_PCT, SAFETY_THRESHOLD_PCT};

/// Verdict on the stake share concentrated at the minimum duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Safety {
    Safe,
    Warning,
    Danger,
}

impl Safety {
    pub fn classify(stake_at_min_pct: f64) -> Self {
        if stake_at_min_pct > DANGER_THRESHOLD_PCT {
            Self::Danger
        } else if stake_at_min_pct > SAFETY_THRESHOLD_PCT {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Warning => "WARNING",
            Self::Danger => "DANGEROUS",
        }
    }
}
