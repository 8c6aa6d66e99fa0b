#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/verdict/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for the verdict signal fusion engine.
//!
//! This crate provides the records strategy scorers produce, the records the
//! decision mappers return, and the contracts scorers and predictors follow.

/// The version of the verdict-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod decision;
pub mod error;
pub mod score;
pub mod scorer;
pub mod stats;
pub mod types;

// Re-exports
pub use decision::{Action, Decision, QuickDecision, Recommendation};
pub use error::{Result, VerdictError};
pub use score::{Direction, MlPrediction, RiskLevel, RiskMetrics, StrategyScore};
pub use scorer::{DirectionPredictor, Scorer, StaticPredictor};
pub use types::{Date, Fundamentals, MarketData, MarketSnapshot, PriceHistory, Symbol};
