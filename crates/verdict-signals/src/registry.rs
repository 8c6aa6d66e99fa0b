//! Strategy registry for discovering the fused strategies.
//!
//! This module provides metadata about the five strategies that feed the
//! fusion engine, including the weight each one carries by default.

use serde::{Deserialize, Serialize};
use verdict_combine::{FusionWeights, Slot};

/// Strategy category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyCategory {
    /// Valuation from fundamentals
    Fundamental,
    /// Trend following
    Momentum,
    /// Mean reversion and contrarian signals
    Reversion,
    /// Technical indicators
    Technical,
    /// Machine-learning predictions
    Predictive,
}

impl StrategyCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Fundamental => "Valuation metrics comparing fundamentals to price",
            Self::Momentum => "Price momentum and trend-following signals",
            Self::Reversion => "Mean reversion and contrarian signals",
            Self::Technical => "Technical analysis indicators",
            Self::Predictive => "Model-based direction forecasts",
        }
    }
}

/// Metadata about a strategy.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyInfo {
    /// Unique identifier; also the fusion slot name
    pub name: &'static str,

    /// Category classification
    pub category: StrategyCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Upper bound of the score scale
    pub max_score: f64,

    /// Daily bars needed before the strategy can score
    pub lookback: usize,

    /// Weight in the default fusion scheme
    pub default_weight: f64,

    /// Whether the strategy requires fundamental data
    pub requires_fundamentals: bool,
}

/// Get information about all fused strategies, in fusion order.
#[must_use]
pub fn available_strategies() -> Vec<StrategyInfo> {
    let weights = FusionWeights::default();
    vec![
        StrategyInfo {
            name: Slot::Value.name(),
            category: StrategyCategory::Fundamental,
            description: "Value investing: P/E, P/B, leverage, ROE, margins, dividend",
            max_score: 10.0,
            lookback: 0,
            default_weight: weights.value,
            requires_fundamentals: true,
        },
        StrategyInfo {
            name: Slot::Momentum.name(),
            category: StrategyCategory::Momentum,
            description: "1/20/60-day returns, moving-average stack, rate of change",
            max_score: 10.0,
            lookback: 61,
            default_weight: weights.momentum,
            requires_fundamentals: false,
        },
        StrategyInfo {
            name: Slot::MeanReversion.name(),
            category: StrategyCategory::Reversion,
            description: "Bollinger bands, RSI(14) and z-score against the 20-day mean",
            max_score: 10.0,
            lookback: 20,
            default_weight: weights.mean_reversion,
            requires_fundamentals: false,
        },
        StrategyInfo {
            name: Slot::Technical.name(),
            category: StrategyCategory::Technical,
            description: "MACD(12, 26, 9) crossover and volume surge",
            max_score: 5.0,
            lookback: 26,
            default_weight: weights.technical,
            requires_fundamentals: false,
        },
        StrategyInfo {
            name: Slot::Ml.name(),
            category: StrategyCategory::Predictive,
            description: "Signed direction forecast weighted by model confidence",
            max_score: 100.0,
            lookback: 0,
            default_weight: weights.ml,
            requires_fundamentals: false,
        },
    ]
}

/// Get all strategies in a specific category.
#[must_use]
pub fn strategies_by_category(category: &StrategyCategory) -> Vec<StrategyInfo> {
    available_strategies()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific strategy by name.
#[must_use]
pub fn get_strategy_info(name: &str) -> Option<StrategyInfo> {
    available_strategies()
        .into_iter()
        .find(|info| info.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MeanReversionScorer, MomentumScorer, TechnicalScorer, ValueScorer};
    use approx::assert_relative_eq;
    use verdict_traits::Scorer;

    #[test]
    fn test_available_strategies() {
        let strategies = available_strategies();
        assert_eq!(strategies.len(), 5);

        let names: Vec<_> = strategies.iter().map(|s| s.name).collect();
        assert_eq!(names, ["value", "momentum", "mean_reversion", "technical", "ml"]);

        let total: f64 = strategies.iter().map(|s| s.default_weight).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_metadata_matches_scorers() {
        let scorers: Vec<Box<dyn Scorer>> = vec![
            Box::new(ValueScorer::default()),
            Box::new(MomentumScorer::default()),
            Box::new(MeanReversionScorer::default()),
            Box::new(TechnicalScorer::default()),
        ];
        for scorer in scorers {
            let info = get_strategy_info(scorer.name()).unwrap();
            assert_relative_eq!(info.max_score, scorer.max_score());
            assert_eq!(info.lookback, scorer.lookback());
        }
    }

    #[test]
    fn test_strategies_by_category() {
        assert_eq!(strategies_by_category(&StrategyCategory::Momentum).len(), 1);
        assert_eq!(strategies_by_category(&StrategyCategory::Predictive)[0].name, "ml");
    }

    #[test]
    fn test_get_strategy_info() {
        let info = get_strategy_info("value").unwrap();
        assert!(info.requires_fundamentals);
        assert_relative_eq!(info.default_weight, 0.25);
        assert!(get_strategy_info("nonexistent_strategy").is_none());
    }

    #[test]
    fn test_category_descriptions() {
        assert!(!StrategyCategory::Fundamental.description().is_empty());
        assert!(!StrategyCategory::Predictive.description().is_empty());
    }
}
