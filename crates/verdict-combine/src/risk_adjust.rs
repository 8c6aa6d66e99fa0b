//! Discrete risk penalty applied to the composite.

use serde::{Deserialize, Serialize};
use verdict_traits::{Result, RiskLevel, VerdictError};

use crate::combiner::CompositeScore;

/// Reasoning line appended when the penalty fires.
pub const HIGH_RISK_REASON: &str = "High volatility - confidence reduced";

/// Configuration for the risk penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskPenalty {
    /// Multiplier applied to the composite when the risk level is HIGH.
    pub high_multiplier: f64,
}

impl Default for RiskPenalty {
    fn default() -> Self {
        Self {
            high_multiplier: 0.85,
        }
    }
}

impl RiskPenalty {
    /// Checks that the multiplier lies in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InvalidConfig`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.high_multiplier > 0.0 && self.high_multiplier <= 1.0 {
            Ok(())
        } else {
            Err(VerdictError::InvalidConfig(format!(
                "high-risk multiplier must be in (0, 1], got {}",
                self.high_multiplier
            )))
        }
    }
}

/// Multiplies the composite by a flat penalty when the risk level is HIGH.
///
/// The penalty depends only on the level bucket, not on the magnitude of
/// volatility. It is multiplicative, so it must be applied exactly once per
/// decision: `adjust(adjust(x), HIGH) == 0.85 * adjust(x, HIGH)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAdjuster {
    penalty: RiskPenalty,
}

impl RiskAdjuster {
    /// Create a new risk adjuster with the given penalty.
    pub const fn new(penalty: RiskPenalty) -> Self {
        Self { penalty }
    }

    /// Returns the penalty configuration.
    pub const fn penalty(&self) -> &RiskPenalty {
        &self.penalty
    }

    /// Adjusted value of a composite for the given risk level.
    #[must_use]
    pub const fn adjust(&self, composite: f64, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::High => composite * self.penalty.high_multiplier,
            RiskLevel::Low | RiskLevel::Moderate => composite,
        }
    }

    /// Adjusts a composite in place and records the caution line when the penalty fires.
    pub fn apply(&self, composite: &mut CompositeScore, level: RiskLevel) {
        let adjusted = self.adjust(composite.value, level);
        if level == RiskLevel::High {
            tracing::debug!(
                before = composite.value,
                after = adjusted,
                "high risk penalty applied"
            );
            composite.reasoning.push(HIGH_RISK_REASON.to_string());
        }
        composite.value = adjusted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_penalty_only_on_high() {
        let adjuster = RiskAdjuster::default();
        assert_relative_eq!(adjuster.adjust(77.0, RiskLevel::High), 65.45, epsilon = 1e-12);
        assert_relative_eq!(adjuster.adjust(77.0, RiskLevel::Moderate), 77.0);
        assert_relative_eq!(adjuster.adjust(77.0, RiskLevel::Low), 77.0);
    }

    #[test]
    fn test_penalty_is_not_idempotent() {
        let adjuster = RiskAdjuster::default();
        for x in [0.0, 12.5, 40.0, 77.0, 100.0] {
            let once = adjuster.adjust(x, RiskLevel::High);
            let twice = adjuster.adjust(once, RiskLevel::High);
            assert_relative_eq!(twice, 0.85 * once, epsilon = 1e-12);
            if x > 0.0 {
                assert!(twice < once);
            }
        }
    }

    #[test]
    fn test_apply_appends_reason() {
        let adjuster = RiskAdjuster::default();
        let mut composite = CompositeScore {
            value: 80.0,
            reasoning: vec!["Strong momentum (9/10)".to_string()],
            component_scores: Default::default(),
        };
        adjuster.apply(&mut composite, RiskLevel::High);
        assert_relative_eq!(composite.value, 68.0, epsilon = 1e-12);
        assert_eq!(composite.reasoning.last().map(String::as_str), Some(HIGH_RISK_REASON));

        let mut calm = CompositeScore {
            value: 80.0,
            reasoning: Vec::new(),
            component_scores: Default::default(),
        };
        adjuster.apply(&mut calm, RiskLevel::Moderate);
        assert_relative_eq!(calm.value, 80.0);
        assert!(calm.reasoning.is_empty());
    }

    #[test]
    fn test_penalty_validation() {
        assert!(RiskPenalty::default().validate().is_ok());
        assert!(RiskPenalty { high_multiplier: 1.0 }.validate().is_ok());
        assert!(RiskPenalty { high_multiplier: 0.0 }.validate().is_err());
        assert!(RiskPenalty { high_multiplier: 1.2 }.validate().is_err());
        assert!(RiskPenalty { high_multiplier: f64::NAN }.validate().is_err());
    }
}
