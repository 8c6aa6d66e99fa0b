//! Fusion slots and their fixed weights.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use verdict_traits::{Result, VerdictError};

/// Tolerance on the weight sum.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// One of the five inputs the combiner fuses.
///
/// The declaration order is the combination and reasoning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Fundamental valuation.
    Value,
    /// Trend following.
    Momentum,
    /// Statistical reversion to the mean.
    MeanReversion,
    /// Generic technical signals (MACD, volume).
    Technical,
    /// Machine-learning direction prediction.
    Ml,
}

impl Slot {
    /// All slots in combination order.
    pub const ALL: [Self; 5] = [
        Self::Value,
        Self::Momentum,
        Self::MeanReversion,
        Self::Technical,
        Self::Ml,
    ];

    /// Stable name used as the key in `component_scores`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Momentum => "momentum",
            Self::MeanReversion => "mean_reversion",
            Self::Technical => "technical",
            Self::Ml => "ml",
        }
    }

    /// Reasoning prefix used when the slot's raw score is strong, if any.
    #[must_use]
    pub const fn strength_label(&self) -> Option<&'static str> {
        match self {
            Self::Value => Some("Strong value fundamentals"),
            Self::Momentum => Some("Strong momentum"),
            Self::MeanReversion | Self::Technical | Self::Ml => None,
        }
    }
}

/// Immutable weighting scheme for the five fusion slots.
///
/// The default is the production scheme; alternative schemes can be loaded
/// from configuration and must still sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FusionWeights {
    /// Weight of the value slot.
    pub value: f64,
    /// Weight of the momentum slot.
    pub momentum: f64,
    /// Weight of the mean-reversion slot.
    pub mean_reversion: f64,
    /// Weight of the technical slot.
    pub technical: f64,
    /// Weight of the ML slot.
    pub ml: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            value: 0.25,
            momentum: 0.30,
            mean_reversion: 0.20,
            technical: 0.15,
            ml: 0.10,
        }
    }
}

impl FusionWeights {
    /// Weight of a slot.
    #[must_use]
    pub const fn weight(&self, slot: Slot) -> f64 {
        match slot {
            Slot::Value => self.value,
            Slot::Momentum => self.momentum,
            Slot::MeanReversion => self.mean_reversion,
            Slot::Technical => self.technical,
            Slot::Ml => self.ml,
        }
    }

    /// Weights in slot order.
    #[must_use]
    pub fn to_array(&self) -> Array1<f64> {
        Slot::ALL.iter().map(|slot| self.weight(*slot)).collect()
    }

    /// Checks that every weight is finite and non-negative and that they sum to 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InvalidConfig`] describing the first violation.
    pub fn validate(&self) -> Result<()> {
        for slot in Slot::ALL {
            let weight = self.weight(slot);
            if !weight.is_finite() || weight < 0.0 {
                return Err(VerdictError::InvalidConfig(format!(
                    "weight for '{}' must be a non-negative number, got {weight}",
                    slot.name()
                )));
            }
        }

        let total = self.to_array().sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(VerdictError::InvalidConfig(format!(
                "fusion weights must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}
