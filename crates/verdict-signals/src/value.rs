//! Fundamental value scorer.

use serde::{Deserialize, Serialize};
use verdict_combine::Slot;
use verdict_traits::{Fundamentals, MarketSnapshot, Result, Scorer, StrategyScore, VerdictError};

/// Stand-in for a missing valuation ratio; scores as expensive.
const MISSING_RATIO: f64 = 999.0;

/// Thresholds for the value scorer. Ratios are plain multiples, the rest percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueConfig {
    /// P/E below this is cheap (+2).
    pub cheap_pe: f64,
    /// P/E below this is fair (+1); at or above, expensive (-1).
    pub fair_pe: f64,
    /// P/B below this trades under book (+2).
    pub cheap_pb: f64,
    /// P/B below this is reasonable (+1).
    pub fair_pb: f64,
    /// Debt/equity percent below this is low (+1).
    pub low_debt_pct: f64,
    /// Debt/equity percent above this is high (-1).
    pub high_debt_pct: f64,
    /// ROE percent above this is strong (+2).
    pub strong_roe_pct: f64,
    /// ROE percent above this is decent (+1).
    pub decent_roe_pct: f64,
    /// Profit margin percent above this is high (+1).
    pub high_margin_pct: f64,
    /// Dividend yield percent above this is good (+1).
    pub good_dividend_pct: f64,
}

impl Default for ValueConfig {
    fn default() -> Self {
        Self {
            cheap_pe: 15.0,
            fair_pe: 25.0,
            cheap_pb: 1.0,
            fair_pb: 3.0,
            low_debt_pct: 50.0,
            high_debt_pct: 100.0,
            strong_roe_pct: 15.0,
            decent_roe_pct: 10.0,
            high_margin_pct: 20.0,
            good_dividend_pct: 2.0,
        }
    }
}

/// Value investing scorer on a 10-point scale.
///
/// Rewards low P/E and P/B, low leverage, high ROE, high margins and a
/// dividend. Missing P/E, P/B or debt/equity count as very high values;
/// missing ROE, margin or yield count as zero.
#[derive(Debug, Clone, Default)]
pub struct ValueScorer {
    config: ValueConfig,
}

impl ValueScorer {
    /// Create a new value scorer with the given configuration.
    #[must_use]
    pub const fn new(config: ValueConfig) -> Self {
        Self { config }
    }

    /// Scores a set of fundamentals.
    #[must_use]
    pub fn score_fundamentals(&self, fundamentals: &Fundamentals) -> StrategyScore {
        let cfg = &self.config;
        let mut score: f64 = 0.0;
        let mut signals = Vec::new();

        let pe = fundamentals.pe_ratio.unwrap_or(MISSING_RATIO);
        if pe < cfg.cheap_pe {
            score += 2.0;
            signals.push("Low P/E ratio (undervalued)".to_string());
        } else if pe < cfg.fair_pe {
            score += 1.0;
            signals.push("Moderate P/E ratio".to_string());
        } else {
            score -= 1.0;
            signals.push("High P/E ratio (potentially overvalued)".to_string());
        }

        let pb = fundamentals.pb_ratio.unwrap_or(MISSING_RATIO);
        if pb < cfg.cheap_pb {
            score += 2.0;
            signals.push("Trading below book value".to_string());
        } else if pb < cfg.fair_pb {
            score += 1.0;
            signals.push("Reasonable price to book".to_string());
        }

        let debt = fundamentals.debt_to_equity_pct.unwrap_or(MISSING_RATIO);
        if debt < cfg.low_debt_pct {
            score += 1.0;
            signals.push("Low debt (financially stable)".to_string());
        } else if debt > cfg.high_debt_pct {
            score -= 1.0;
            signals.push("High debt levels".to_string());
        }

        let roe = fundamentals.return_on_equity.unwrap_or(0.0) * 100.0;
        if roe > cfg.strong_roe_pct {
            score += 2.0;
            signals.push(format!("Strong ROE ({roe:.1}%)"));
        } else if roe > cfg.decent_roe_pct {
            score += 1.0;
            signals.push(format!("Decent ROE ({roe:.1}%)"));
        }

        let margin = fundamentals.profit_margin.unwrap_or(0.0) * 100.0;
        if margin > cfg.high_margin_pct {
            score += 1.0;
            signals.push(format!("High profit margin ({margin:.1}%)"));
        }

        let dividend = fundamentals.dividend_yield.unwrap_or(0.0) * 100.0;
        if dividend > cfg.good_dividend_pct {
            score += 1.0;
            signals.push(format!("Good dividend yield ({dividend:.2}%)"));
        }

        StrategyScore::new(self.name(), score, self.max_score()).with_signals(signals)
    }
}

impl Scorer for ValueScorer {
    fn name(&self) -> &str {
        Slot::Value.name()
    }

    fn max_score(&self) -> f64 {
        10.0
    }

    fn lookback(&self) -> usize {
        0
    }

    fn score(&self, snapshot: &MarketSnapshot) -> Result<StrategyScore> {
        let fundamentals = snapshot.fundamentals.as_ref().ok_or_else(|| {
            VerdictError::InsufficientData(format!("no fundamentals for {}", snapshot.symbol))
        })?;
        Ok(self.score_fundamentals(fundamentals))
    }
}
