//! Multi-horizon trend-following scorer.

use serde::{Deserialize, Serialize};
use verdict_combine::Slot;
use verdict_traits::{MarketSnapshot, Result, Scorer, StrategyScore, VerdictError};

use crate::indicators::{pct_change, sma};

/// Configuration for the momentum scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumConfig {
    /// Medium-term return horizon in bars (default: 20).
    pub medium_days: usize,
    /// Long-term return horizon in bars (default: 60).
    pub long_days: usize,
    /// Fast moving average window (default: 20).
    pub fast_ma: usize,
    /// Slow moving average window (default: 50).
    pub slow_ma: usize,
    /// Rate-of-change horizon in bars (default: 20).
    pub roc_days: usize,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            medium_days: 20,
            long_days: 60,
            fast_ma: 20,
            slow_ma: 50,
            roc_days: 20,
        }
    }
}

/// Momentum scorer on a 10-point scale.
///
/// Adds points for positive 1-day, 20-day and 60-day returns, for a price
/// stacked above its fast and slow averages, and for a strong 20-day rate of
/// change; subtracts them for the bearish mirror images.
#[derive(Debug, Clone, Default)]
pub struct MomentumScorer {
    config: MomentumConfig,
}

impl MomentumScorer {
    /// Create a new momentum scorer with the given configuration.
    #[must_use]
    pub const fn new(config: MomentumConfig) -> Self {
        Self { config }
    }
}

impl Scorer for MomentumScorer {
    fn name(&self) -> &str {
        Slot::Momentum.name()
    }

    fn max_score(&self) -> f64 {
        10.0
    }

    fn lookback(&self) -> usize {
        self.config
            .long_days
            .max(self.config.medium_days)
            .max(self.config.fast_ma)
            + 1
    }

    fn score(&self, snapshot: &MarketSnapshot) -> Result<StrategyScore> {
        let close = &snapshot.prices.close;
        if close.len() < self.lookback() {
            return Err(VerdictError::InsufficientData(format!(
                "momentum needs {} closes, got {}",
                self.lookback(),
                close.len()
            )));
        }

        let cfg = &self.config;
        let mut score: f64 = 0.0;
        let mut signals = Vec::new();
        let pct = |periods| pct_change(close, periods).map_or(0.0, |r| r * 100.0);

        let r1 = pct(1);
        if r1 > 1.0 {
            score += 1.0;
            signals.push(format!("Strong 1-day momentum (+{r1:.2}%)"));
        } else if r1 < -1.0 {
            score -= 1.0;
            signals.push(format!("Negative 1-day momentum ({r1:.2}%)"));
        }

        let r_medium = pct(cfg.medium_days);
        if r_medium > 5.0 {
            score += 2.0;
            signals.push(format!("Strong {}-day momentum (+{r_medium:.2}%)", cfg.medium_days));
        } else if r_medium < -5.0 {
            score -= 2.0;
            signals.push(format!("Negative {}-day momentum ({r_medium:.2}%)", cfg.medium_days));
        }

        let r_long = pct(cfg.long_days);
        if r_long > 10.0 {
            score += 2.0;
            signals.push(format!("Strong {}-day momentum (+{r_long:.2}%)", cfg.long_days));
        } else if r_long < -10.0 {
            score -= 2.0;
            signals.push(format!("Negative {}-day momentum ({r_long:.2}%)", cfg.long_days));
        }

        let price = close[close.len() - 1];
        if let Some(fast) = sma(close, cfg.fast_ma) {
            let slow = sma(close, cfg.slow_ma).unwrap_or(fast);
            if price > fast && fast > slow {
                score += 2.0;
                signals.push("Golden cross pattern (bullish)".to_string());
            } else if price < fast && fast < slow {
                score -= 2.0;
                signals.push("Death cross pattern (bearish)".to_string());
            }
        }

        let roc = pct(cfg.roc_days);
        if roc > 10.0 {
            score += 1.0;
            signals.push(format!("Strong momentum acceleration ({roc:.1}%)"));
        }

        tracing::debug!(symbol = %snapshot.symbol, score, "momentum scored");
        Ok(StrategyScore::new(self.name(), score, self.max_score()).with_signals(signals))
    }
}
