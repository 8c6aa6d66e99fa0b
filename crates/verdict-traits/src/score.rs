//! Strategy outputs consumed by the fusion engine.
//!
//! Each scorer emits one of these records for the same as-of snapshot.
//! Missing data is never an error at this level: a scorer that cannot compute
//! reports the neutral sentinel ([`StrategyScore::neutral`],
//! [`MlPrediction::none`]) instead.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Bounded score produced by one strategy scorer.
///
/// `score` is negative for bearish readings and positive for bullish ones.
/// `|score| <= max_score` is expected but not enforced; the normalizer clamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyScore {
    /// Raw score on the strategy's own scale.
    pub score: f64,
    /// Upper bound of the strategy's scale (expected `> 0`).
    pub max_score: f64,
    /// Human-readable annotations, in the order the rules fired.
    #[serde(default)]
    pub signals: Vec<String>,
    /// Name of the strategy that produced the score.
    pub strategy_name: String,
}

impl StrategyScore {
    /// Creates a score without annotations.
    #[must_use]
    pub fn new(strategy_name: impl Into<String>, score: f64, max_score: f64) -> Self {
        Self {
            score,
            max_score,
            signals: Vec::new(),
            strategy_name: strategy_name.into(),
        }
    }

    /// The missing-data sentinel: zero score, empty annotations.
    #[must_use]
    pub fn neutral(strategy_name: impl Into<String>, max_score: f64) -> Self {
        Self::new(strategy_name, 0.0, max_score)
    }

    /// Attaches annotations.
    #[must_use]
    pub fn with_signals(mut self, signals: Vec<String>) -> Self {
        self.signals = signals;
        self
    }

    /// Whether the score exceeds half of its scale.
    #[must_use]
    pub fn is_strong(&self) -> bool {
        self.score > self.max_score / 2.0
    }
}

/// Direction forecast by the ML collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Price expected to rise.
    #[display("UP")]
    Up,
    /// Price expected to fall.
    #[display("DOWN")]
    Down,
    /// Insufficient data or model failure.
    #[default]
    #[display("NONE")]
    None,
}

impl Direction {
    /// Sign applied to the prediction confidence: +1, -1 or 0.
    #[must_use]
    pub const fn sign(&self) -> f64 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
            Self::None => 0.0,
        }
    }
}

/// Direction prediction plus confidence in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MlPrediction {
    /// Predicted direction.
    pub direction: Direction,
    /// Model confidence in `[0, 100]`.
    pub confidence_percent: f64,
}

impl MlPrediction {
    /// Creates a prediction.
    #[must_use]
    pub const fn new(direction: Direction, confidence_percent: f64) -> Self {
        Self {
            direction,
            confidence_percent,
        }
    }

    /// The missing-data sentinel; contributes nothing to the composite.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(Direction::None, 0.0)
    }

    /// Confidence clamped to `[0, 100]`; non-finite values become 0.
    #[must_use]
    pub fn clamped_confidence(&self) -> f64 {
        if self.confidence_percent.is_finite() {
            self.confidence_percent.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// Volatility bucket of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Annualized volatility below 20%.
    #[default]
    #[display("LOW")]
    Low,
    /// Annualized volatility below 35%.
    #[display("MODERATE")]
    Moderate,
    /// Everything else.
    #[display("HIGH")]
    High,
}

impl RiskLevel {
    /// Upper bound (exclusive) of the LOW bucket, in percent.
    pub const LOW_VOLATILITY_CEILING: f64 = 20.0;
    /// Upper bound (exclusive) of the MODERATE bucket, in percent.
    pub const MODERATE_VOLATILITY_CEILING: f64 = 35.0;

    /// Buckets an annualized volatility given in percent.
    ///
    /// Non-finite volatility is treated as HIGH.
    #[must_use]
    pub fn from_volatility(volatility_percent: f64) -> Self {
        if volatility_percent < Self::LOW_VOLATILITY_CEILING {
            Self::Low
        } else if volatility_percent < Self::MODERATE_VOLATILITY_CEILING {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

/// Risk metrics derived from the snapshot's return series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Annualized volatility in percent.
    pub volatility_annualized_percent: f64,
    /// Worst peak-to-trough drawdown in percent (`<= 0`).
    pub max_drawdown_percent: f64,
    /// Market beta.
    pub beta: f64,
    /// Annualized Sharpe ratio estimate.
    pub sharpe_ratio: f64,
    /// Volatility bucket; opaque to the fusion engine.
    pub risk_level: RiskLevel,
}

impl RiskMetrics {
    /// Metrics carrying only a risk level, everything else neutral.
    #[must_use]
    pub const fn with_level(risk_level: RiskLevel) -> Self {
        Self {
            volatility_annualized_percent: 0.0,
            max_drawdown_percent: 0.0,
            beta: 1.0,
            sharpe_ratio: 0.0,
            risk_level,
        }
    }
}

impl Default for RiskMetrics {
    fn default() -> Self {
        Self::with_level(RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_score() {
        let score = StrategyScore::neutral("value", 10.0);
        assert_eq!(score.score, 0.0);
        assert_eq!(score.max_score, 10.0);
        assert!(score.signals.is_empty());
        assert!(!score.is_strong());
    }

    #[test]
    fn test_is_strong_is_strict() {
        assert!(!StrategyScore::new("value", 5.0, 10.0).is_strong());
        assert!(StrategyScore::new("value", 6.0, 10.0).is_strong());
        assert!(StrategyScore::new("technical", 3.0, 5.0).is_strong());
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Up.sign(), 1.0);
        assert_eq!(Direction::Down.sign(), -1.0);
        assert_eq!(Direction::None.sign(), 0.0);
        assert_eq!(Direction::Up.to_string(), "UP");
    }

    #[test]
    fn test_clamped_confidence() {
        assert_eq!(MlPrediction::new(Direction::Up, 140.0).clamped_confidence(), 100.0);
        assert_eq!(MlPrediction::new(Direction::Up, -3.0).clamped_confidence(), 0.0);
        assert_eq!(MlPrediction::new(Direction::Up, f64::NAN).clamped_confidence(), 0.0);
        assert_eq!(MlPrediction::new(Direction::Down, 62.5).clamped_confidence(), 62.5);
    }

    #[test]
    fn test_risk_level_buckets() {
        assert_eq!(RiskLevel::from_volatility(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_volatility(19.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_volatility(20.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_volatility(34.99), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_volatility(35.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_volatility(f64::NAN), RiskLevel::High);
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&MlPrediction::new(Direction::Down, 55.0)).unwrap();
        assert_eq!(json, r#"{"direction":"DOWN","confidence_percent":55.0}"#);

        let level: RiskLevel = serde_json::from_str(r#""MODERATE""#).unwrap();
        assert_eq!(level, RiskLevel::Moderate);
    }
}
