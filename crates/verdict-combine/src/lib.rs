//! Signal fusion for verdict.
//!
//! This crate turns four strategy scores and one ML prediction into a single
//! trading decision. The pipeline is strictly one-directional:
//!
//! 1. [`normalize`] rescales each strategy score to percent of its own scale.
//! 2. [`WeightedCombiner`] sums `(weight, signed contribution)` pairs into a
//!    0-100 composite and collects the reasoning trail.
//! 3. [`RiskAdjuster`] applies a flat penalty when the risk level is HIGH.
//! 4. [`map_confidence`] picks the recommendation tier and price levels.
//!
//! [`FusionEngine`] runs the whole pipeline. A separate quick-score mapper
//! ([`quick_decision`]) serves single-signal analysis.
//!
//! # Examples
//!
//! ```rust
//! use verdict_combine::{FusionEngine, FusionInputs};
//! use verdict_traits::{Direction, MlPrediction, Recommendation, RiskLevel, RiskMetrics, StrategyScore};
//!
//! let inputs = FusionInputs {
//!     value: StrategyScore::new("value", 8.0, 10.0),
//!     momentum: StrategyScore::new("momentum", 9.0, 10.0),
//!     mean_reversion: StrategyScore::new("mean_reversion", 5.0, 10.0),
//!     technical: StrategyScore::new("technical", 4.0, 5.0),
//!     ml: MlPrediction::new(Direction::Up, 80.0),
//!     risk: RiskMetrics::with_level(RiskLevel::Low),
//!     current_price: 50.0,
//! };
//!
//! let decision = FusionEngine::default().fuse(&inputs);
//! assert_eq!(decision.recommendation, Recommendation::StrongBuy);
//! ```

mod combiner;
mod config;
mod contribution;
mod engine;
mod mapper;
mod normalize;
mod risk_adjust;
mod tiers;
mod weights;

// Re-export main types
pub use combiner::{COMPOSITE_MAX, CompositeScore, FusionSlots, WeightedCombiner};
pub use config::FusionConfig;
pub use contribution::SignedContribution;
pub use engine::{FusionEngine, FusionInputs};
pub use mapper::{
    TierOutcome, map_confidence, map_quick_score, quick_confidence_score, quick_decision,
};
pub use normalize::{NORMALIZED_BOUND, normalize};
pub use risk_adjust::{HIGH_RISK_REASON, RiskAdjuster, RiskPenalty};
pub use tiers::{FUSED_TIERS, QUICK_TIERS, Tier, TierTable};
pub use weights::{FusionWeights, Slot};
