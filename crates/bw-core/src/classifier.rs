//! Budget state of a category relative to its limit.

use std::fmt;

use bw_domain::percent_of;

use crate::PreconditionViolation;

/// Share of a limit at which spending starts to warrant a warning.
pub const WARNING_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitState {
    Normal,
    Warning,
    Exceeded,
}

impl fmt::Display for LimitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LimitState::Normal => "Normal",
            LimitState::Warning => "Warning",
            LimitState::Exceeded => "Exceeded",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitClassification {
    pub state: LimitState,
    /// `spent * 100 / limit`, truncated toward zero.
    pub percentage: i64,
}

/// Returns `true` once `spent` has reached the warning share of `limit`.
pub fn at_warning_threshold(spent: f64, limit: f64) -> bool {
    spent >= limit * WARNING_THRESHOLD
}

/// Classifies `spent` against a positive `limit`.
pub fn classify(spent: f64, limit: f64) -> Result<LimitClassification, PreconditionViolation> {
    if !(limit.is_finite() && limit > 0.0) {
        return Err(PreconditionViolation { limit });
    }
    let state = if spent >= limit {
        LimitState::Exceeded
    } else if at_warning_threshold(spent, limit) {
        LimitState::Warning
    } else {
        LimitState::Normal
    };
    Ok(LimitClassification {
        state,
        percentage: percent_of(spent, limit),
    })
}
