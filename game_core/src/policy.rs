use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};
use crate::params::Params;
use crate::resources::JumpPower;

/// One linear ramp of the response policy: active from `from` (inclusive)
/// up to the next tier's `from`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub from: f64,
    pub slope: f64,
}

impl Tier {
    pub const fn new(from: f64, slope: f64) -> Self {
        Self { from, slope }
    }
}

/// Maps the current jump power to a vertical jump impulse.
///
/// Negative is upward. Unset, non-positive and NaN scores get `baseline`;
/// otherwise the last tier whose `from` is at or below the score applies
/// `slope * score + offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsePolicy {
    pub baseline: f64,
    pub offset: f64,
    pub tiers: Vec<Tier>,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self::with_breakpoints(70.0, 90.0)
    }
}

impl ResponsePolicy {
    /// Three ramps (slopes −1, −2, −3) split at `steep` and `steepest`.
    pub fn with_breakpoints(steep: f64, steepest: f64) -> Self {
        Self {
            baseline: Params::BASELINE_IMPULSE,
            offset: Params::IMPULSE_OFFSET,
            tiers: vec![
                Tier::new(0.0, -1.0),
                Tier::new(steep, -2.0),
                Tier::new(steepest, -3.0),
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.baseline.is_finite() || !self.offset.is_finite() {
            return Err(TuningError::InvalidPolicy(
                "baseline and offset must be finite".to_string(),
            ));
        }
        let first = self
            .tiers
            .first()
            .ok_or_else(|| TuningError::InvalidPolicy("no tiers".to_string()))?;
        if first.from != 0.0 {
            return Err(TuningError::InvalidPolicy(format!(
                "first tier must start at 0, got {}",
                first.from
            )));
        }
        for tier in &self.tiers {
            if !tier.from.is_finite() || !tier.slope.is_finite() {
                return Err(TuningError::InvalidPolicy(format!(
                    "non-finite tier {:?}",
                    tier
                )));
            }
        }
        for pair in self.tiers.windows(2) {
            if pair[1].from <= pair[0].from {
                return Err(TuningError::InvalidPolicy(format!(
                    "tiers out of order at {}",
                    pair[1].from
                )));
            }
        }
        Ok(())
    }

    /// Tier selected for `score`, or `None` when the baseline applies.
    pub fn tier_for(&self, power: JumpPower) -> Option<&Tier> {
        let score = match power {
            JumpPower::Unset => return None,
            JumpPower::Value(v) if v.is_nan() || v <= 0.0 => return None,
            JumpPower::Value(v) => v,
        };
        self.tiers.iter().rev().find(|tier| score >= tier.from)
    }

    /// Jump impulse for the current power. Total over every input.
    pub fn impulse(&self, power: JumpPower) -> f64 {
        match (self.tier_for(power), power) {
            (Some(tier), JumpPower::Value(score)) => tier.slope * score + self.offset,
            _ => self.baseline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse(score: f64) -> f64 {
        ResponsePolicy::default().impulse(JumpPower::Value(score))
    }

    #[test]
    fn test_baseline_for_unset_and_non_positive() {
        let policy = ResponsePolicy::default();
        assert_eq!(policy.impulse(JumpPower::Unset), -150.0);
        assert_eq!(impulse(0.0), -150.0);
        assert_eq!(impulse(-5.0), -150.0);
        assert_eq!(impulse(-68.0), -150.0);
    }

    #[test]
    fn test_linear_ramp() {
        assert_eq!(impulse(10.0), -210.0);
        assert_eq!(impulse(69.5), -269.5);
    }

    #[test]
    fn test_breakpoint_70_selects_steeper_ramp() {
        assert_eq!(impulse(70.0), -340.0);
        assert_eq!(impulse(89.0), -378.0);
    }

    #[test]
    fn test_breakpoint_90_selects_steepest_ramp() {
        assert_eq!(impulse(90.0), -470.0);
        assert_eq!(impulse(100.0), -500.0);
    }

    #[test]
    fn test_impulse_grows_with_score() {
        let mut last = impulse(0.0);
        for step in 1..=100 {
            let next = impulse(step as f64);
            assert!(next < last, "impulse must strengthen at score {step}");
            last = next;
        }
    }

    #[test]
    fn test_nan_score_uses_baseline() {
        assert_eq!(impulse(f64::NAN), -150.0);
    }

    #[test]
    fn test_impulse_is_deterministic() {
        let policy = ResponsePolicy::default();
        for score in [-1.0, 0.5, 70.0, 95.25] {
            assert_eq!(
                policy.impulse(JumpPower::Value(score)),
                policy.impulse(JumpPower::Value(score))
            );
        }
    }

    #[test]
    fn test_alternate_breakpoints() {
        let policy = ResponsePolicy::with_breakpoints(80.0, 90.0);
        assert_eq!(policy.impulse(JumpPower::Value(75.0)), -275.0);
        assert_eq!(policy.impulse(JumpPower::Value(80.0)), -360.0);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let mut policy = ResponsePolicy::default();
        policy.tiers.clear();
        assert!(matches!(policy.validate(), Err(TuningError::InvalidPolicy(_))));

        let policy = ResponsePolicy::with_breakpoints(90.0, 70.0);
        assert!(policy.validate().is_err());

        let mut policy = ResponsePolicy::default();
        policy.tiers[0].from = 5.0;
        assert!(policy.validate().is_err());

        let mut policy = ResponsePolicy::default();
        policy.tiers[1].slope = f64::INFINITY;
        assert!(policy.validate().is_err());
    }
}
