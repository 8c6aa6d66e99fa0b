//! Single-signal quick score: five votes of +1 or -1.

use serde::{Deserialize, Serialize};
use verdict_traits::{MarketSnapshot, Result, VerdictError};

use crate::indicators::{pct_change, rsi, sma};
use crate::technical::Macd;

/// Configuration for the quick scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickConfig {
    /// Fast moving average window (default: 20).
    pub fast_ma: usize,
    /// Slow moving average window (default: 50).
    pub slow_ma: usize,
    /// RSI period (default: 14).
    pub rsi_period: usize,
    /// Horizon of the swing vote in bars (default: 5).
    pub swing_days: usize,
    /// Swing return in percent that casts a vote (default: 2.0).
    pub swing_pct: f64,
}

impl Default for QuickConfig {
    fn default() -> Self {
        Self {
            fast_ma: 20,
            slow_ma: 50,
            rsi_period: 14,
            swing_days: 5,
            swing_pct: 2.0,
        }
    }
}

/// Integer signal count in `[-5, 5]` and the votes behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickScore {
    /// Sum of the votes.
    pub score: i32,
    /// One line per vote cast.
    pub signals: Vec<String>,
}

/// Counts bullish against bearish votes from five simple indicators.
#[derive(Debug, Clone, Default)]
pub struct QuickScorer {
    config: QuickConfig,
}

impl QuickScorer {
    /// Create a new quick scorer with the given configuration.
    #[must_use]
    pub const fn new(config: QuickConfig) -> Self {
        Self { config }
    }

    /// Number of closes required.
    #[must_use]
    pub fn lookback(&self) -> usize {
        self.config
            .slow_ma
            .max(self.config.fast_ma)
            .max(self.config.swing_days + 1)
    }

    /// Scores the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InsufficientData`] when the history is shorter
    /// than [`Self::lookback`].
    pub fn score(&self, snapshot: &MarketSnapshot) -> Result<QuickScore> {
        let cfg = &self.config;
        let close = &snapshot.prices.close;
        let (Some(fast), Some(slow)) = (sma(close, cfg.fast_ma), sma(close, cfg.slow_ma)) else {
            return Err(VerdictError::InsufficientData(format!(
                "quick score needs {} closes, got {}",
                self.lookback(),
                close.len()
            )));
        };
        let price = close[close.len() - 1];

        let mut votes: Vec<(i32, &str)> = Vec::with_capacity(5);
        votes.push(if price > fast {
            (1, "Price above 20-day average")
        } else {
            (-1, "Price below 20-day average")
        });
        votes.push(if fast > slow {
            (1, "20-day average above 50-day")
        } else {
            (-1, "20-day average below 50-day")
        });

        match rsi(close, cfg.rsi_period) {
            Some(value) if value < 30.0 => votes.push((1, "RSI oversold")),
            Some(value) if value > 70.0 => votes.push((-1, "RSI overbought")),
            _ => {}
        }

        if let Some(macd) = Macd::compute(close, 12, 26, 9) {
            votes.push(if macd.line > macd.signal {
                (1, "MACD above signal")
            } else {
                (-1, "MACD below signal")
            });
        }

        match pct_change(close, cfg.swing_days).map(|r| r * 100.0) {
            Some(swing) if swing > cfg.swing_pct => votes.push((1, "Strong short-term gain")),
            Some(swing) if swing < -cfg.swing_pct => votes.push((-1, "Sharp short-term loss")),
            _ => {}
        }

        let score: i32 = votes.iter().map(|(vote, _)| vote).sum();
        let signals = votes.into_iter().map(|(_, line)| line.to_string()).collect();

        tracing::debug!(symbol = %snapshot.symbol, score, "quick score computed");
        Ok(QuickScore { score, signals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use verdict_traits::PriceHistory;

    fn snapshot(close: Vec<f64>) -> MarketSnapshot {
        let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        MarketSnapshot::new("TEST", date, PriceHistory::from_closes(close))
    }

    #[test]
    fn test_steady_rally() {
        // RSI is 100 here, which votes against the rally
        let close: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i)).collect();
        let quick = QuickScorer::default().score(&snapshot(close)).unwrap();
        assert_eq!(quick.score, 3);
        assert_eq!(quick.signals.len(), 5);
        assert!(quick.signals.contains(&"RSI overbought".to_string()));
    }

    #[test]
    fn test_steady_decline() {
        let close: Vec<f64> = (0..60).map(|i| 100.0 - f64::from(i)).collect();
        let quick = QuickScorer::default().score(&snapshot(close)).unwrap();
        assert_eq!(quick.score, -3);
        assert!(quick.signals.contains(&"RSI oversold".to_string()));
    }

    #[test]
    fn test_score_stays_in_range() {
        let close: Vec<f64> = (0..60).map(|i| 50.0 + f64::from(i % 7)).collect();
        let quick = QuickScorer::default().score(&snapshot(close)).unwrap();
        assert!((-5..=5).contains(&quick.score));
    }

    #[test]
    fn test_insufficient_history() {
        let scorer = QuickScorer::default();
        assert_eq!(scorer.lookback(), 50);
        assert!(scorer.score(&snapshot(vec![1.0; 49])).is_err());
    }
}
