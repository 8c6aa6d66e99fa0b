//! Decision mappers for the fused confidence and the quick score.
//!
//! Both are instances of [`TierTable`](crate::TierTable) with their own
//! tables; they share the output shape but are kept as separate entry points.

use verdict_traits::{Action, QuickDecision, Recommendation};

use crate::tiers::{FUSED_TIERS, QUICK_TIERS, Tier};

/// Recommendation and price levels chosen by a mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierOutcome {
    /// Recommendation label.
    pub recommendation: Recommendation,
    /// Action implied by the recommendation.
    pub action: Action,
    /// `current_price * target_multiplier`.
    pub target_price: f64,
    /// `current_price * stop_multiplier`.
    pub stop_loss: f64,
}

impl TierOutcome {
    const fn at_price(tier: &Tier, current_price: f64) -> Self {
        Self {
            recommendation: tier.recommendation,
            action: tier.action(),
            target_price: current_price * tier.target_multiplier,
            stop_loss: current_price * tier.stop_multiplier,
        }
    }
}

/// Maps a fused confidence in `[0, 100]` to its tier and price levels.
///
/// Boundaries (75, 60, 40, 25) belong to the higher tier. The mapper never
/// fails and does not clamp; out-of-range inputs fall into the extreme tiers.
///
/// # Examples
///
/// ```
/// use verdict_combine::map_confidence;
/// use verdict_traits::Recommendation;
///
/// let outcome = map_confidence(75.0, 50.0);
/// assert_eq!(outcome.recommendation, Recommendation::StrongBuy);
/// assert!((outcome.target_price - 57.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn map_confidence(confidence: f64, current_price: f64) -> TierOutcome {
    let tier = FUSED_TIERS.lookup(confidence);
    tracing::debug!(confidence, recommendation = %tier.recommendation, "fused tier selected");
    TierOutcome::at_price(tier, current_price)
}

/// Maps an integer quick score to its tier and price levels.
///
/// Thresholds are `>= 4`, `>= 2`, `>= -1`, `>= -3`, else the lowest tier.
#[must_use]
pub fn map_quick_score(score: i32, current_price: f64) -> TierOutcome {
    let tier = QUICK_TIERS.lookup(score);
    tracing::debug!(score, recommendation = %tier.recommendation, "quick tier selected");
    TierOutcome::at_price(tier, current_price)
}

/// Confidence of a quick score: `(score + 5) * 10`, clamped to `[0, 100]`.
#[must_use]
pub fn quick_confidence_score(score: i32) -> f64 {
    ((f64::from(score) + 5.0) * 10.0).clamp(0.0, 100.0)
}

/// Builds the complete quick-score decision.
#[must_use]
pub fn quick_decision(score: i32, signals: Vec<String>, current_price: f64) -> QuickDecision {
    let outcome = map_quick_score(score, current_price);
    QuickDecision {
        recommendation: outcome.recommendation,
        action: outcome.action,
        score,
        confidence_score: quick_confidence_score(score),
        target_price: outcome.target_price,
        stop_loss: outcome.stop_loss,
        signals,
    }
}
