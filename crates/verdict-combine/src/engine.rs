//! The fusion pipeline: combine, adjust for risk, map to a decision.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use verdict_traits::{Decision, MlPrediction, Result, RiskMetrics, StrategyScore};

use crate::combiner::{FusionSlots, WeightedCombiner};
use crate::config::FusionConfig;
use crate::mapper::map_confidence;
use crate::risk_adjust::RiskAdjuster;

/// Everything the engine consumes for one symbol, taken from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionInputs {
    /// Value strategy score.
    pub value: StrategyScore,
    /// Momentum strategy score.
    pub momentum: StrategyScore,
    /// Mean-reversion strategy score.
    pub mean_reversion: StrategyScore,
    /// Technical strategy score.
    pub technical: StrategyScore,
    /// ML prediction; `NONE` when absent.
    #[serde(default)]
    pub ml: MlPrediction,
    /// Risk metrics; a LOW bucket when absent.
    #[serde(default)]
    pub risk: RiskMetrics,
    /// Latest price, expected to be positive.
    pub current_price: f64,
}

impl FusionInputs {
    fn slots(&self) -> FusionSlots<'_> {
        FusionSlots {
            value: &self.value,
            momentum: &self.momentum,
            mean_reversion: &self.mean_reversion,
            technical: &self.technical,
            ml: &self.ml,
        }
    }
}

/// Deterministic fusion of strategy scores into a [`Decision`].
///
/// The engine holds only immutable configuration; [`fuse`](Self::fuse) is a
/// pure function of its inputs and can be called from many threads at once.
#[derive(Debug, Clone, Default)]
pub struct FusionEngine {
    combiner: WeightedCombiner,
    adjuster: RiskAdjuster,
}

impl FusionEngine {
    /// Create a new engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: FusionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            combiner: WeightedCombiner::new(config.weights)?,
            adjuster: RiskAdjuster::new(config.risk),
        })
    }

    /// Returns the combiner.
    pub const fn combiner(&self) -> &WeightedCombiner {
        &self.combiner
    }

    /// Returns the risk adjuster.
    pub const fn adjuster(&self) -> &RiskAdjuster {
        &self.adjuster
    }

    /// Fuses one symbol's inputs into a decision.
    ///
    /// Never fails: malformed scores are clamped or ignored and the
    /// decision is still produced.
    #[must_use]
    pub fn fuse(&self, inputs: &FusionInputs) -> Decision {
        if !(inputs.current_price.is_finite() && inputs.current_price > 0.0) {
            tracing::warn!(
                current_price = inputs.current_price,
                "non-positive current price, price levels will be meaningless"
            );
        }

        let mut composite = self.combiner.combine(&inputs.slots());
        self.adjuster.apply(&mut composite, inputs.risk.risk_level);

        let confidence = composite.value;
        let outcome = map_confidence(confidence, inputs.current_price);
        tracing::debug!(
            confidence,
            risk_level = %inputs.risk.risk_level,
            recommendation = %outcome.recommendation,
            "fusion complete"
        );

        Decision {
            recommendation: outcome.recommendation,
            action: outcome.action,
            confidence,
            reasoning: composite.reasoning,
            target_price: outcome.target_price,
            stop_loss: outcome.stop_loss,
            component_scores: composite.component_scores,
        }
    }

    /// Fuses many symbols in parallel; results align with the input order.
    #[must_use]
    pub fn fuse_batch(&self, batch: &[FusionInputs]) -> Vec<Decision> {
        batch.par_iter().map(|inputs| self.fuse(inputs)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use verdict_traits::{Action, Direction, Recommendation, RiskLevel};

    fn neutral_inputs(current_price: f64) -> FusionInputs {
        FusionInputs {
            value: StrategyScore::neutral("value", 10.0),
            momentum: StrategyScore::neutral("momentum", 10.0),
            mean_reversion: StrategyScore::neutral("mean_reversion", 10.0),
            technical: StrategyScore::neutral("technical", 5.0),
            ml: MlPrediction::none(),
            risk: RiskMetrics::with_level(RiskLevel::Low),
            current_price,
        }
    }

    fn bullish_inputs(level: RiskLevel) -> FusionInputs {
        FusionInputs {
            value: StrategyScore::new("value", 8.0, 10.0),
            momentum: StrategyScore::new("momentum", 9.0, 10.0),
            mean_reversion: StrategyScore::new("mean_reversion", 5.0, 10.0),
            technical: StrategyScore::new("technical", 4.0, 5.0),
            ml: MlPrediction::new(Direction::Up, 80.0),
            risk: RiskMetrics::with_level(level),
            current_price: 50.0,
        }
    }

    #[test]
    fn test_neutral_inputs_sell() {
        let decision = FusionEngine::default().fuse(&neutral_inputs(100.0));
        assert_relative_eq!(decision.confidence, 0.0);
        assert_eq!(decision.recommendation, Recommendation::StrongSell);
        assert_eq!(decision.action, Action::Sell);
        assert_relative_eq!(decision.target_price, 90.0, epsilon = 1e-9);
        assert_relative_eq!(decision.stop_loss, 105.0, epsilon = 1e-9);
        assert!(decision.reasoning.is_empty());
    }

    #[test]
    fn test_bullish_low_risk() {
        let decision = FusionEngine::default().fuse(&bullish_inputs(RiskLevel::Low));
        assert_relative_eq!(decision.confidence, 77.0, epsilon = 1e-9);
        assert_eq!(decision.recommendation, Recommendation::StrongBuy);
        assert_eq!(decision.action, Action::Buy);
        assert_relative_eq!(decision.target_price, 57.5, epsilon = 1e-9);
        assert_relative_eq!(decision.stop_loss, 47.5, epsilon = 1e-9);
        assert_eq!(decision.component_scores["momentum"], 9.0);
    }

    #[test]
    fn test_bullish_high_risk_drops_a_tier() {
        let decision = FusionEngine::default().fuse(&bullish_inputs(RiskLevel::High));
        assert_relative_eq!(decision.confidence, 65.45, epsilon = 1e-9);
        assert_eq!(decision.recommendation, Recommendation::Buy);
        assert_relative_eq!(decision.target_price, 50.0 * 1.10, epsilon = 1e-9);
        assert_relative_eq!(decision.stop_loss, 50.0 * 0.96, epsilon = 1e-9);
        assert_eq!(
            decision.reasoning.last().map(String::as_str),
            Some("High volatility - confidence reduced")
        );
    }

    #[test]
    fn test_moderate_risk_passes_through() {
        let decision = FusionEngine::default().fuse(&bullish_inputs(RiskLevel::Moderate));
        assert_relative_eq!(decision.confidence, 77.0, epsilon = 1e-9);
        assert_eq!(decision.reasoning.len(), 3);
    }

    #[test]
    fn test_fusion_is_deterministic() {
        let engine = FusionEngine::default();
        let inputs = bullish_inputs(RiskLevel::High);
        let first = serde_json::to_string(&engine.fuse(&inputs)).unwrap();
        let second = serde_json::to_string(&engine.fuse(&inputs)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_inputs_still_decide() {
        let mut inputs = bullish_inputs(RiskLevel::Low);
        inputs.value = StrategyScore::new("value", 7.0, 0.0);
        inputs.ml = MlPrediction::new(Direction::Up, 250.0);
        inputs.current_price = 0.0;

        let decision = FusionEngine::default().fuse(&inputs);
        // value ignored, ML clamped to 100
        assert_relative_eq!(decision.confidence, 27.0 + 10.0 + 12.0 + 10.0, epsilon = 1e-9);
        assert_eq!(decision.recommendation, Recommendation::Hold);
        assert_relative_eq!(decision.target_price, 0.0);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let engine = FusionEngine::default();
        let batch = vec![
            neutral_inputs(100.0),
            bullish_inputs(RiskLevel::Low),
            bullish_inputs(RiskLevel::High),
        ];
        let parallel = engine.fuse_batch(&batch);
        let sequential: Vec<_> = batch.iter().map(|inputs| engine.fuse(inputs)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_custom_config() {
        let config = FusionConfig::from_json_str(r#"{"risk": {"high_multiplier": 0.5}}"#).unwrap();
        let engine = FusionEngine::new(config).unwrap();
        let decision = engine.fuse(&bullish_inputs(RiskLevel::High));
        assert_relative_eq!(decision.confidence, 38.5, epsilon = 1e-9);
        assert_eq!(decision.recommendation, Recommendation::Sell);
    }

    #[test]
    fn test_inputs_from_json() {
        let json = r#"{
            "value": {"score": 8, "max_score": 10, "signals": [], "strategy_name": "value"},
            "momentum": {"score": 9, "max_score": 10, "signals": [], "strategy_name": "momentum"},
            "mean_reversion": {"score": 5, "max_score": 10, "signals": [], "strategy_name": "mean_reversion"},
            "technical": {"score": 4, "max_score": 5, "signals": [], "strategy_name": "technical"},
            "ml": {"direction": "UP", "confidence_percent": 80},
            "current_price": 50
        }"#;
        let inputs: FusionInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.risk.risk_level, RiskLevel::Low);
        let decision = FusionEngine::default().fuse(&inputs);
        assert_eq!(decision.recommendation, Recommendation::StrongBuy);
    }
}
