//! Uniform view over the five fusion inputs.
//!
//! The four strategy scores and the ML prediction live on different scales.
//! [`SignedContribution`] puts them on one signed percent scale so the
//! combiner can iterate `(weight, contribution)` pairs without special cases.

use verdict_traits::{Direction, MlPrediction, StrategyScore};

use crate::normalize::normalize;
use crate::weights::Slot;

/// An input that contributes a signed value on the `[-100, 100]` scale.
pub trait SignedContribution {
    /// Signed contribution before weighting, in `[-100, 100]`.
    fn signed_value(&self) -> f64;

    /// Raw, unnormalized score to report in `component_scores`, if any.
    fn raw_score(&self) -> Option<f64>;

    /// Reasoning line this input adds when it sits in `slot`, if any.
    fn rationale(&self, slot: Slot) -> Option<String>;
}

impl SignedContribution for StrategyScore {
    fn signed_value(&self) -> f64 {
        normalize(self)
    }

    fn raw_score(&self) -> Option<f64> {
        Some(self.score)
    }

    fn rationale(&self, slot: Slot) -> Option<String> {
        let label = slot.strength_label()?;
        self.is_strong()
            .then(|| format!("{label} ({}/{})", self.score, self.max_score))
    }
}

impl SignedContribution for MlPrediction {
    fn signed_value(&self) -> f64 {
        self.direction.sign() * self.clamped_confidence()
    }

    fn raw_score(&self) -> Option<f64> {
        None
    }

    fn rationale(&self, _slot: Slot) -> Option<String> {
        match self.direction {
            Direction::Up | Direction::Down => Some(format!(
                "ML predicts {} ({:.0}% confidence)",
                self.direction,
                self.clamped_confidence()
            )),
            Direction::None => None,
        }
    }
}
