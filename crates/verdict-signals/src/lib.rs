//! Strategy scorers for the verdict fusion engine.
//!
//! This crate provides the analysis strategies whose outputs the fusion
//! engine combines:
//! - Value: P/E, P/B, leverage, ROE, margins and dividend yield
//! - Momentum: multi-horizon returns and moving-average stacking
//! - Mean reversion: Bollinger bands, RSI and z-score
//! - Technical: MACD crossover and volume surges
//!
//! It also provides the [`RiskAssessor`] that buckets a symbol's volatility,
//! the [`QuickScorer`] used for single-signal analysis, and the indicator
//! helpers they share.
//!
//! Each scorer reports a bounded [`StrategyScore`](verdict_traits::StrategyScore)
//! named after its fusion slot.
//!
//! # Example
//!
//! ```ignore
//! use verdict_signals::{MomentumScorer, registry::available_strategies};
//! use verdict_traits::Scorer;
//!
//! // Create a scorer with default configuration
//! let scorer = MomentumScorer::default();
//! let score = scorer.score_or_neutral(&snapshot);
//!
//! // Discover available strategies
//! let strategies = available_strategies();
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod indicators;
pub mod registry;

mod mean_reversion;
mod momentum;
mod quick;
mod risk;
mod technical;
mod value;

// Re-export key types
pub use mean_reversion::{MeanReversionConfig, MeanReversionScorer};
pub use momentum::{MomentumConfig, MomentumScorer};
pub use quick::{QuickConfig, QuickScore, QuickScorer};
pub use registry::{StrategyCategory, StrategyInfo};
pub use risk::{RiskAssessor, RiskConfig};
pub use technical::{Macd, TechnicalConfig, TechnicalScorer};
pub use value::{ValueConfig, ValueScorer};
