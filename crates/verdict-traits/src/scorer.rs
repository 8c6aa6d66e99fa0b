//! Contracts for strategy scorers and direction predictors.
//!
//! A scorer evaluates one analytical lens (value, momentum, mean reversion,
//! technical signals) against a [`MarketSnapshot`] and returns a bounded
//! [`StrategyScore`]. A direction predictor plays the same role for the ML
//! slot and returns an [`MlPrediction`].
//!
//! Failures stay on this side of the fusion engine: the provided
//! `score_or_neutral` and `predict_or_none` methods turn any error into the
//! neutral sentinel so the engine always receives well-shaped inputs.

use crate::{MarketSnapshot, MlPrediction, Result, StrategyScore};

/// A strategy that scores a symbol from its market snapshot.
///
/// Implementations must be thread-safe (`Send + Sync`) so a batch of symbols
/// can be scored in parallel.
///
/// # Example
///
/// ```no_run
/// use verdict_traits::{MarketSnapshot, Result, Scorer, StrategyScore};
///
/// struct AlwaysBullish;
///
/// impl Scorer for AlwaysBullish {
///     fn name(&self) -> &str {
///         "always_bullish"
///     }
///
///     fn max_score(&self) -> f64 {
///         10.0
///     }
///
///     fn lookback(&self) -> usize {
///         0
///     }
///
///     fn score(&self, _snapshot: &MarketSnapshot) -> Result<StrategyScore> {
///         Ok(StrategyScore::new(self.name(), 10.0, self.max_score()))
///     }
/// }
/// ```
pub trait Scorer: Send + Sync {
    /// Returns the name of this strategy.
    ///
    /// The name keys the strategy's raw score in the decision's
    /// `component_scores` and identifies it in logs.
    fn name(&self) -> &str;

    /// Upper bound of this strategy's score scale.
    fn max_score(&self) -> f64;

    /// Number of daily bars required before the strategy can score.
    fn lookback(&self) -> usize;

    /// Scores the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot lacks the data this strategy needs
    /// (e.g. fewer than [`Scorer::lookback`] closes).
    fn score(&self, snapshot: &MarketSnapshot) -> Result<StrategyScore>;

    /// Scores the snapshot, reporting the neutral sentinel on failure.
    fn score_or_neutral(&self, snapshot: &MarketSnapshot) -> StrategyScore {
        match self.score(snapshot) {
            Ok(score) => score,
            Err(err) => {
                tracing::warn!(
                    strategy = self.name(),
                    symbol = %snapshot.symbol,
                    error = %err,
                    "scorer failed, using neutral score"
                );
                StrategyScore::neutral(self.name(), self.max_score())
            }
        }
    }
}

/// Source of the ML direction prediction.
///
/// The model behind it is an external collaborator; the fusion engine only
/// consumes the direction and its confidence.
pub trait DirectionPredictor: Send + Sync {
    /// Returns the name of the predictor.
    fn name(&self) -> &str;

    /// Predicts the next move for the snapshot's symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce a prediction.
    fn predict(&self, snapshot: &MarketSnapshot) -> Result<MlPrediction>;

    /// Predicts, reporting [`MlPrediction::none`] on failure.
    fn predict_or_none(&self, snapshot: &MarketSnapshot) -> MlPrediction {
        self.predict(snapshot).unwrap_or_else(|err| {
            tracing::warn!(
                predictor = self.name(),
                symbol = %snapshot.symbol,
                error = %err,
                "predictor failed, using no prediction"
            );
            MlPrediction::none()
        })
    }
}

/// Predictor that returns a prediction computed elsewhere.
///
/// Used when the model runs as a separate service and its output arrives with
/// the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPredictor {
    prediction: MlPrediction,
}

impl StaticPredictor {
    /// Wraps a precomputed prediction.
    #[must_use]
    pub const fn new(prediction: MlPrediction) -> Self {
        Self { prediction }
    }
}

impl DirectionPredictor for StaticPredictor {
    fn name(&self) -> &str {
        "static"
    }

    fn predict(&self, _snapshot: &MarketSnapshot) -> Result<MlPrediction> {
        Ok(self.prediction)
    }
}
