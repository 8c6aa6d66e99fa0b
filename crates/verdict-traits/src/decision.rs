//! Output records of the decision mappers.

use std::collections::BTreeMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Discrete action a caller should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Open or add to a long position.
    #[display("BUY")]
    Buy,
    /// Keep the current position.
    #[display("HOLD")]
    Hold,
    /// Reduce or exit the position.
    #[display("SELL")]
    Sell,
}

/// Five-level recommendation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Recommendation {
    /// Highest tier.
    #[display("STRONG BUY")]
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    /// Second tier.
    #[display("BUY")]
    #[serde(rename = "BUY")]
    Buy,
    /// Middle tier.
    #[display("HOLD")]
    #[serde(rename = "HOLD")]
    Hold,
    /// Fourth tier.
    #[display("SELL")]
    #[serde(rename = "SELL")]
    Sell,
    /// Lowest tier.
    #[display("STRONG SELL")]
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl Recommendation {
    /// Action implied by the recommendation.
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::StrongBuy | Self::Buy => Action::Buy,
            Self::Hold => Action::Hold,
            Self::Sell | Self::StrongSell => Action::Sell,
        }
    }
}

/// Fused trading decision for one symbol.
///
/// Suitable for direct serialization into an API response. `component_scores`
/// is ordered so identical inputs serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Recommendation tier.
    pub recommendation: Recommendation,
    /// Action implied by the tier.
    pub action: Action,
    /// Risk-adjusted composite confidence in `[0, 100]`.
    pub confidence: f64,
    /// Reasoning lines in emission order.
    pub reasoning: Vec<String>,
    /// Price target for the tier.
    pub target_price: f64,
    /// Stop-loss for the tier.
    pub stop_loss: f64,
    /// Raw (unnormalized) score of each strategy, keyed by strategy name.
    pub component_scores: BTreeMap<String, f64>,
}

/// Result of the single-signal quick-score analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickDecision {
    /// Recommendation tier.
    pub recommendation: Recommendation,
    /// Action implied by the tier.
    pub action: Action,
    /// Integer signal-count score the tier was chosen from.
    pub score: i32,
    /// Score rescaled to `[0, 100]`.
    pub confidence_score: f64,
    /// Price target for the tier.
    pub target_price: f64,
    /// Stop-loss for the tier.
    pub stop_loss: f64,
    /// Annotations of the votes that fired.
    pub signals: Vec<String>,
}
