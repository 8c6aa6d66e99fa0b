#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/verdict/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # verdict
//!
//! Multi-strategy signal fusion for single equities.
//!
//! verdict is an umbrella crate that re-exports all verdict sub-crates and
//! adds the [`Analyzer`] that runs the whole pipeline over one snapshot.
//!
//! ## Crate Organization
//!
//! - [`traits`] - Records and contracts ([`StrategyScore`], [`Decision`], [`Scorer`], etc.)
//! - [`combine`] - Normalization, weighted fusion, risk penalty, decision tiers
//! - [`signals`] - Strategy scorers, risk assessment, indicators
//! - [`fmp`] - Financial Modeling Prep snapshots
//!
//! ## Architecture
//!
//! 1. **Scorers** read a [`MarketSnapshot`] and emit bounded strategy scores
//! 2. **The predictor** adds a signed direction forecast
//! 3. **The risk assessor** buckets volatility
//! 4. **The fusion engine** combines everything into a [`Decision`]

/// Version information for the verdict crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod analysis;

pub use analysis::{Analysis, Analyzer};

/// Records and contracts shared across the workspace.
pub mod traits {
    pub use verdict_traits::*;
}

// Re-export core types at top level for convenience
pub use verdict_traits::{
    Decision, DirectionPredictor, MarketSnapshot, MlPrediction, QuickDecision, Recommendation,
    Result, RiskLevel, RiskMetrics, Scorer, StrategyScore, VerdictError,
};

/// Signal fusion.
///
/// # Example
///
/// ```ignore
/// use verdict::combine::{FusionConfig, FusionEngine};
///
/// let config = FusionConfig::from_json_file("fusion.json")?;
/// let engine = FusionEngine::new(config)?;
/// let decision = engine.fuse(&inputs);
/// ```
pub mod combine {
    pub use verdict_combine::*;
}

/// Strategy scorers, risk assessment and the strategy registry.
pub mod signals {
    pub use verdict_signals::*;
}

/// Financial Modeling Prep (FMP) API client.
///
/// ## Setup
///
/// 1. Get a free API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add to `.env` file
///
/// ## Example
///
/// ```ignore
/// use verdict::fmp::FmpClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FmpClient::from_env()?;
///     let snapshot = client.snapshot("AAPL", 365).await?;
///     println!("{} bars", snapshot.prices.len());
///     Ok(())
/// }
/// ```
pub mod fmp {
    pub use verdict_fmp::*;
}

/// Prelude module for convenient imports.
///
/// ```ignore
/// use verdict::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combine::{FusionConfig, FusionEngine, FusionInputs, FusionWeights};
    pub use crate::traits::*;
    pub use crate::{Analysis, Analyzer};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_scorer(_scorer: &dyn Scorer) {}
        fn _accept_predictor(_predictor: &dyn DirectionPredictor) {}

        let engine = prelude::FusionEngine::default();
        let _analyzer = Analyzer::new(engine);
    }

    #[test]
    fn test_error_types() {
        let _result: Result<()> = Ok(());
        let _error: VerdictError = VerdictError::InvalidData("test".to_string());
    }
}
