//! Statistical mean-reversion scorer.

use serde::{Deserialize, Serialize};
use verdict_combine::Slot;
use verdict_traits::stats::z_score;
use verdict_traits::{MarketSnapshot, Result, Scorer, StrategyScore, VerdictError};

use crate::indicators::{rolling_std, rsi, sma};

/// Configuration for the mean-reversion scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeanReversionConfig {
    /// Bollinger window in bars (default: 20).
    pub window: usize,
    /// Band width in standard deviations (default: 2.0).
    pub band_width: f64,
    /// Fractional distance from the mean that counts as stretched (default: 0.05).
    pub stretch: f64,
    /// RSI period (default: 14).
    pub rsi_period: usize,
    /// Absolute z-score beyond which the price is extreme (default: 2.0).
    pub z_extreme: f64,
}

impl Default for MeanReversionConfig {
    fn default() -> Self {
        Self {
            window: 20,
            band_width: 2.0,
            stretch: 0.05,
            rsi_period: 14,
            z_extreme: 2.0,
        }
    }
}

/// Mean-reversion scorer on a 10-point scale.
///
/// Buys weakness and sells strength: a price under the lower Bollinger band,
/// an oversold RSI or a deeply negative z-score add points; the mirror
/// conditions subtract them.
#[derive(Debug, Clone, Default)]
pub struct MeanReversionScorer {
    config: MeanReversionConfig,
}

impl MeanReversionScorer {
    /// Create a new mean-reversion scorer with the given configuration.
    #[must_use]
    pub const fn new(config: MeanReversionConfig) -> Self {
        Self { config }
    }
}

impl Scorer for MeanReversionScorer {
    fn name(&self) -> &str {
        Slot::MeanReversion.name()
    }

    fn max_score(&self) -> f64 {
        10.0
    }

    fn lookback(&self) -> usize {
        self.config.window
    }

    fn score(&self, snapshot: &MarketSnapshot) -> Result<StrategyScore> {
        let cfg = &self.config;
        let close = &snapshot.prices.close;
        let (Some(mean), Some(std)) = (sma(close, cfg.window), rolling_std(close, cfg.window)) else {
            return Err(VerdictError::InsufficientData(format!(
                "mean reversion needs {} closes, got {}",
                cfg.window,
                close.len()
            )));
        };

        let price = close[close.len() - 1];
        let upper = mean + cfg.band_width * std;
        let lower = mean - cfg.band_width * std;
        let mut score: f64 = 0.0;
        let mut signals = Vec::new();

        if price < lower {
            score += 3.0;
            signals.push("Oversold - price below lower Bollinger Band".to_string());
        } else if price < mean * (1.0 - cfg.stretch) {
            score += 2.0;
            signals.push("Below mean - potential reversion up".to_string());
        }

        if price > upper {
            score -= 3.0;
            signals.push("Overbought - price above upper Bollinger Band".to_string());
        } else if price > mean * (1.0 + cfg.stretch) {
            score -= 2.0;
            signals.push("Above mean - potential reversion down".to_string());
        }

        match rsi(close, cfg.rsi_period) {
            Some(value) if value < 30.0 => {
                score += 2.0;
                signals.push(format!("RSI oversold ({value:.1}) - buy signal"));
            }
            Some(value) if value > 70.0 => {
                score -= 2.0;
                signals.push(format!("RSI overbought ({value:.1}) - sell signal"));
            }
            _ => {}
        }

        if let Some(z) = z_score(price, mean, std) {
            if z < -cfg.z_extreme {
                score += 2.0;
                signals.push(format!("Extremely oversold (Z-score: {z:.2})"));
            } else if z > cfg.z_extreme {
                score -= 2.0;
                signals.push(format!("Extremely overbought (Z-score: {z:.2})"));
            }
        }

        tracing::debug!(symbol = %snapshot.symbol, score, "mean reversion scored");
        Ok(StrategyScore::new(self.name(), score, self.max_score()).with_signals(signals))
    }
}
