//! End-to-end analysis of one market snapshot.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};
use verdict_combine::{FusionEngine, FusionInputs, quick_decision};
use verdict_signals::{
    MeanReversionScorer, MomentumScorer, QuickScorer, RiskAssessor, TechnicalScorer, ValueScorer,
};
use verdict_traits::{
    Decision, DirectionPredictor, MarketSnapshot, MlPrediction, QuickDecision, Result, RiskMetrics,
    Scorer, StaticPredictor, StrategyScore, Symbol, VerdictError,
};

/// Full result of analyzing one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Symbol analyzed.
    pub symbol: Symbol,
    /// Latest close.
    pub current_price: f64,
    /// Value strategy score.
    pub value: StrategyScore,
    /// Momentum strategy score.
    pub momentum: StrategyScore,
    /// Mean-reversion strategy score.
    pub mean_reversion: StrategyScore,
    /// Technical strategy score.
    pub technical: StrategyScore,
    /// Direction prediction.
    pub prediction: MlPrediction,
    /// Risk metrics.
    pub risk: RiskMetrics,
    /// Fused decision.
    pub decision: Decision,
    /// When the analysis ran.
    pub timestamp: DateTime<Utc>,
}

impl Analysis {
    /// The engine inputs this analysis was fused from.
    #[must_use]
    pub fn inputs(&self) -> FusionInputs {
        FusionInputs {
            value: self.value.clone(),
            momentum: self.momentum.clone(),
            mean_reversion: self.mean_reversion.clone(),
            technical: self.technical.clone(),
            ml: self.prediction,
            risk: self.risk,
            current_price: self.current_price,
        }
    }
}

/// Runs the scorers, predictor and risk assessor over a snapshot and fuses
/// their outputs.
///
/// Scorer and predictor failures become neutral sentinels; risk that cannot
/// be measured is treated as HIGH.
pub struct Analyzer {
    value: ValueScorer,
    momentum: MomentumScorer,
    mean_reversion: MeanReversionScorer,
    technical: TechnicalScorer,
    predictor: Box<dyn DirectionPredictor>,
    risk: RiskAssessor,
    quick: QuickScorer,
    engine: FusionEngine,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("predictor", &self.predictor.name())
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(FusionEngine::default())
    }
}

impl Analyzer {
    /// Create an analyzer with default scorers around the given engine.
    ///
    /// No direction model is attached; the ML slot stays neutral until one is
    /// supplied with [`with_predictor`](Self::with_predictor).
    #[must_use]
    pub fn new(engine: FusionEngine) -> Self {
        Self {
            value: ValueScorer::default(),
            momentum: MomentumScorer::default(),
            mean_reversion: MeanReversionScorer::default(),
            technical: TechnicalScorer::default(),
            predictor: Box::new(StaticPredictor::new(MlPrediction::none())),
            risk: RiskAssessor::default(),
            quick: QuickScorer::default(),
            engine,
        }
    }

    /// Replace the direction predictor.
    #[must_use]
    pub fn with_predictor(mut self, predictor: impl DirectionPredictor + 'static) -> Self {
        self.predictor = Box::new(predictor);
        self
    }

    /// Replace the risk assessor.
    #[must_use]
    pub const fn with_risk_assessor(mut self, risk: RiskAssessor) -> Self {
        self.risk = risk;
        self
    }

    /// Returns the fusion engine.
    pub const fn engine(&self) -> &FusionEngine {
        &self.engine
    }

    /// The four strategy scorers in fusion order.
    pub fn scorers(&self) -> [&dyn Scorer; 4] {
        [&self.value, &self.momentum, &self.mean_reversion, &self.technical]
    }

    /// Analyze one snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error only when the snapshot has no price to anchor the
    /// decision on.
    pub fn analyze(&self, snapshot: &MarketSnapshot) -> Result<Analysis> {
        let current_price = current_price(snapshot)?;

        let [value, momentum, mean_reversion, technical] =
            self.scorers().map(|scorer| scorer.score_or_neutral(snapshot));
        let prediction = self.predictor.predict_or_none(snapshot);
        let risk = self.risk.assess_or_high(snapshot);

        let inputs = FusionInputs {
            value,
            momentum,
            mean_reversion,
            technical,
            ml: prediction,
            risk,
            current_price,
        };
        let decision = self.engine.fuse(&inputs);
        info!(
            symbol = %snapshot.symbol,
            recommendation = %decision.recommendation,
            confidence = decision.confidence,
            "analysis complete"
        );

        Ok(Analysis {
            symbol: snapshot.symbol.clone(),
            current_price,
            value: inputs.value,
            momentum: inputs.momentum,
            mean_reversion: inputs.mean_reversion,
            technical: inputs.technical,
            prediction,
            risk,
            decision,
            timestamp: Utc::now(),
        })
    }

    /// Analyze many snapshots in parallel; results align with the input order.
    #[must_use]
    pub fn analyze_batch(&self, snapshots: &[MarketSnapshot]) -> Vec<Result<Analysis>> {
        snapshots.par_iter().map(|snapshot| self.analyze(snapshot)).collect()
    }

    /// Single-signal analysis from the quick scorer.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot has no price or too little history
    /// for the quick scorer.
    pub fn quick_analysis(&self, snapshot: &MarketSnapshot) -> Result<QuickDecision> {
        let current_price = current_price(snapshot)?;
        let quick = self.quick.score(snapshot)?;
        debug!(symbol = %snapshot.symbol, score = quick.score, "quick score");
        Ok(quick_decision(quick.score, quick.signals, current_price))
    }
}

fn current_price(snapshot: &MarketSnapshot) -> Result<f64> {
    snapshot.current_price().ok_or_else(|| {
        VerdictError::InsufficientData(format!("no price history for {}", snapshot.symbol))
    })
}
