//! Fixed-weight linear combination of the five fusion slots.

use std::collections::BTreeMap;

use ndarray::Array1;
use verdict_traits::{MlPrediction, Result, StrategyScore};

use crate::contribution::SignedContribution;
use crate::weights::{FusionWeights, Slot};

/// Upper bound of the composite confidence.
pub const COMPOSITE_MAX: f64 = 100.0;

/// The five inputs of one fusion, all computed over the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FusionSlots<'a> {
    /// Value strategy score.
    pub value: &'a StrategyScore,
    /// Momentum strategy score.
    pub momentum: &'a StrategyScore,
    /// Mean-reversion strategy score.
    pub mean_reversion: &'a StrategyScore,
    /// Technical strategy score.
    pub technical: &'a StrategyScore,
    /// ML direction prediction.
    pub ml: &'a MlPrediction,
}

impl<'a> FusionSlots<'a> {
    /// Slots paired with their inputs, in combination order.
    pub fn entries(&self) -> [(Slot, &'a dyn SignedContribution); 5] {
        [
            (Slot::Value, self.value),
            (Slot::Momentum, self.momentum),
            (Slot::MeanReversion, self.mean_reversion),
            (Slot::Technical, self.technical),
            (Slot::Ml, self.ml),
        ]
    }
}

/// Composite confidence plus the trail that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeScore {
    /// Confidence in `[0, 100]`.
    pub value: f64,
    /// Reasoning lines in slot order.
    pub reasoning: Vec<String>,
    /// Raw, unnormalized strategy scores keyed by slot name.
    pub component_scores: BTreeMap<String, f64>,
}

/// Weighted combiner over the five fusion slots.
///
/// Each slot contributes `weight * signed_contribution`; the sum is clamped
/// to `[0, 100]`. The combiner is monotonic in every slot's contribution
/// because all weights are non-negative.
///
/// # Examples
///
/// ```
/// use verdict_combine::{FusionSlots, WeightedCombiner};
/// use verdict_traits::{Direction, MlPrediction, StrategyScore};
///
/// let value = StrategyScore::new("value", 8.0, 10.0);
/// let momentum = StrategyScore::new("momentum", 9.0, 10.0);
/// let mean_reversion = StrategyScore::new("mean_reversion", 5.0, 10.0);
/// let technical = StrategyScore::new("technical", 4.0, 5.0);
/// let ml = MlPrediction::new(Direction::Up, 80.0);
///
/// let composite = WeightedCombiner::default().combine(&FusionSlots {
///     value: &value,
///     momentum: &momentum,
///     mean_reversion: &mean_reversion,
///     technical: &technical,
///     ml: &ml,
/// });
/// assert!((composite.value - 77.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedCombiner {
    weights: FusionWeights,
}

impl WeightedCombiner {
    /// Create a new combiner with the given weights.
    ///
    /// # Errors
    ///
    /// Returns an error if the weights fail [`FusionWeights::validate`].
    pub fn new(weights: FusionWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Returns the weights.
    pub const fn weights(&self) -> &FusionWeights {
        &self.weights
    }

    /// Combines the five slots into a composite confidence.
    #[must_use]
    pub fn combine(&self, slots: &FusionSlots<'_>) -> CompositeScore {
        let entries = slots.entries();

        let contributions: Array1<f64> = entries
            .iter()
            .map(|(_, input)| input.signed_value())
            .collect();
        let weighted = &self.weights.to_array() * &contributions;

        let mut reasoning = Vec::new();
        let mut component_scores = BTreeMap::new();
        for ((slot, input), contribution) in entries.iter().zip(weighted.iter()) {
            tracing::debug!(
                slot = slot.name(),
                weight = self.weights.weight(*slot),
                contribution = *contribution,
                "slot contribution"
            );
            if let Some(raw) = input.raw_score() {
                component_scores.insert(slot.name().to_string(), raw);
            }
            if let Some(line) = input.rationale(*slot) {
                reasoning.push(line);
            }
        }

        let raw = weighted.sum();
        let value = if raw.is_finite() {
            raw.clamp(0.0, COMPOSITE_MAX)
        } else {
            tracing::warn!(composite = raw, "non-finite composite, using zero");
            0.0
        };
        tracing::debug!(raw, composite = value, "composite computed");

        CompositeScore {
            value,
            reasoning,
            component_scores,
        }
    }
}
