//! MACD and volume scorer.

use serde::{Deserialize, Serialize};
use verdict_combine::Slot;
use verdict_traits::{MarketSnapshot, Result, Scorer, StrategyScore, VerdictError};

use crate::indicators::{ema, sma};

/// Configuration for the technical scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalConfig {
    /// Fast EMA span (default: 12).
    pub fast_span: usize,
    /// Slow EMA span (default: 26).
    pub slow_span: usize,
    /// Signal line EMA span (default: 9).
    pub signal_span: usize,
    /// Volume averaging window (default: 20).
    pub volume_window: usize,
    /// Multiple of average volume that counts as high (default: 1.5).
    pub volume_multiple: f64,
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        Self {
            fast_span: 12,
            slow_span: 26,
            signal_span: 9,
            volume_window: 20,
            volume_multiple: 1.5,
        }
    }
}

/// MACD line, signal line and histogram at the latest bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macd {
    /// Fast EMA minus slow EMA.
    pub line: f64,
    /// EMA of the MACD line.
    pub signal: f64,
    /// `line - signal`.
    pub histogram: f64,
}

impl Macd {
    /// Computes MACD over a close series, or `None` for an empty series.
    #[must_use]
    pub fn compute(close: &[f64], fast: usize, slow: usize, signal: usize) -> Option<Self> {
        let fast = ema(close, fast);
        let slow = ema(close, slow);
        let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
        let signal_line = ema(&line, signal);

        let line = *line.last()?;
        let signal = *signal_line.last()?;
        Some(Self {
            line,
            signal,
            histogram: line - signal,
        })
    }
}

/// Technical scorer on a 5-point scale.
///
/// A MACD line above its signal with a positive histogram adds 2, a line
/// below its signal subtracts 1, and volume well above its recent average
/// adds 1.
#[derive(Debug, Clone, Default)]
pub struct TechnicalScorer {
    config: TechnicalConfig,
}

impl TechnicalScorer {
    /// Create a new technical scorer with the given configuration.
    #[must_use]
    pub const fn new(config: TechnicalConfig) -> Self {
        Self { config }
    }
}

impl Scorer for TechnicalScorer {
    fn name(&self) -> &str {
        Slot::Technical.name()
    }

    fn max_score(&self) -> f64 {
        5.0
    }

    fn lookback(&self) -> usize {
        self.config.slow_span
    }

    fn score(&self, snapshot: &MarketSnapshot) -> Result<StrategyScore> {
        let cfg = &self.config;
        let close = &snapshot.prices.close;
        if close.len() < self.lookback() {
            return Err(VerdictError::InsufficientData(format!(
                "technical needs {} closes, got {}",
                self.lookback(),
                close.len()
            )));
        }

        let mut score: f64 = 0.0;
        let mut signals = Vec::new();

        if let Some(macd) = Macd::compute(close, cfg.fast_span, cfg.slow_span, cfg.signal_span) {
            if macd.line > macd.signal && macd.histogram > 0.0 {
                score += 2.0;
                signals.push("MACD bullish crossover".to_string());
            } else if macd.line < macd.signal {
                score -= 1.0;
                signals.push("MACD bearish".to_string());
            }
        }

        let volume = &snapshot.prices.volume;
        match (volume.last(), sma(volume, cfg.volume_window)) {
            (Some(current), Some(average)) => {
                if *current > average * cfg.volume_multiple {
                    score += 1.0;
                    signals.push("High volume (strong interest)".to_string());
                }
            }
            _ => tracing::debug!(symbol = %snapshot.symbol, "not enough volume history"),
        }

        Ok(StrategyScore::new(self.name(), score, self.max_score()).with_signals(signals))
    }
}
