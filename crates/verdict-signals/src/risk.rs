//! Risk metrics from a snapshot's return series.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use verdict_traits::{MarketSnapshot, Result, RiskLevel, RiskMetrics, VerdictError};

use crate::indicators::daily_returns;

/// Configuration for the risk assessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Trading days per year used to annualize (default: 252).
    pub trading_days: f64,
    /// Annual risk-free rate in percent (default: 4.0).
    pub risk_free_rate_pct: f64,
    /// Beta assumed when the snapshot has none (default: 1.0).
    pub default_beta: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            trading_days: 252.0,
            risk_free_rate_pct: 4.0,
            default_beta: 1.0,
        }
    }
}

/// Computes volatility, drawdown, beta, Sharpe ratio and the risk bucket.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    config: RiskConfig,
}

impl RiskAssessor {
    /// Create a new risk assessor with the given configuration.
    #[must_use]
    pub const fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Assesses the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InsufficientData`] with fewer than two daily returns.
    pub fn assess(&self, snapshot: &MarketSnapshot) -> Result<RiskMetrics> {
        let returns = Array1::from(daily_returns(&snapshot.prices.close));
        if returns.len() < 2 {
            return Err(VerdictError::InsufficientData(format!(
                "risk needs at least 3 closes for {}",
                snapshot.symbol
            )));
        }

        let volatility = returns.std(1.0) * self.config.trading_days.sqrt() * 100.0;
        let annual_return = returns.mean().unwrap_or(0.0) * self.config.trading_days * 100.0;
        let sharpe_ratio = if volatility > 0.0 {
            (annual_return - self.config.risk_free_rate_pct) / volatility
        } else {
            0.0
        };

        let metrics = RiskMetrics {
            volatility_annualized_percent: volatility,
            max_drawdown_percent: max_drawdown_pct(&returns),
            beta: snapshot.beta.unwrap_or(self.config.default_beta),
            sharpe_ratio,
            risk_level: RiskLevel::from_volatility(volatility),
        };
        tracing::debug!(
            symbol = %snapshot.symbol,
            volatility,
            risk_level = %metrics.risk_level,
            "risk assessed"
        );
        Ok(metrics)
    }

    /// Assesses the snapshot, reporting HIGH risk when it cannot be measured.
    #[must_use]
    pub fn assess_or_high(&self, snapshot: &MarketSnapshot) -> RiskMetrics {
        self.assess(snapshot).unwrap_or_else(|err| {
            tracing::warn!(symbol = %snapshot.symbol, error = %err, "risk unavailable, assuming high");
            RiskMetrics::with_level(RiskLevel::High)
        })
    }
}

/// Deepest fall of the compounded return curve below its running peak, in
/// percent (zero or negative). The curve starts after the first return.
fn max_drawdown_pct(returns: &Array1<f64>) -> f64 {
    let mut wealth = 1.0;
    let mut peak = f64::NEG_INFINITY;
    let mut worst: f64 = 0.0;
    for r in returns {
        wealth *= 1.0 + r;
        peak = peak.max(wealth);
        worst = worst.min((wealth - peak) / peak);
    }
    worst * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use verdict_traits::PriceHistory;

    fn snapshot(close: Vec<f64>) -> MarketSnapshot {
        let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        MarketSnapshot::new("TEST", date, PriceHistory::from_closes(close))
    }

    #[test]
    fn test_known_series() {
        // returns +10%, -10%, +10%
        let metrics = RiskAssessor::default()
            .assess(&snapshot(vec![100.0, 110.0, 99.0, 108.9]))
            .unwrap();

        let returns = Array1::from(vec![0.1, -0.1, 0.1]);
        let expected_vol = returns.std(1.0) * 252.0_f64.sqrt() * 100.0;
        assert_relative_eq!(metrics.volatility_annualized_percent, expected_vol, epsilon = 1e-9);
        assert_relative_eq!(metrics.max_drawdown_percent, -10.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.beta, 1.0);
        assert_eq!(metrics.risk_level, RiskLevel::High);

        let expected_sharpe = (0.1 / 3.0 * 252.0 * 100.0 - 4.0) / expected_vol;
        assert_relative_eq!(metrics.sharpe_ratio, expected_sharpe, epsilon = 1e-9);
    }

    #[test]
    fn test_calm_series_is_low_risk() {
        let close: Vec<f64> = (0..60)
            .map(|i| 100.0 + if i % 2 == 0 { 0.0 } else { 0.1 })
            .collect();
        let metrics = RiskAssessor::default()
            .assess(&snapshot(close).with_beta(1.3))
            .unwrap();
        assert!(metrics.volatility_annualized_percent < 20.0);
        assert_eq!(metrics.risk_level, RiskLevel::Low);
        assert_relative_eq!(metrics.beta, 1.3);
    }

    #[test]
    fn test_flat_series_has_zero_sharpe() {
        let metrics = RiskAssessor::default().assess(&snapshot(vec![10.0; 30])).unwrap();
        assert_relative_eq!(metrics.volatility_annualized_percent, 0.0);
        assert_relative_eq!(metrics.sharpe_ratio, 0.0);
        assert_relative_eq!(metrics.max_drawdown_percent, 0.0);
    }

    #[test]
    fn test_short_history() {
        let assessor = RiskAssessor::default();
        assert!(assessor.assess(&snapshot(vec![10.0, 11.0])).is_err());
        assert_eq!(
            assessor.assess_or_high(&snapshot(vec![10.0])).risk_level,
            RiskLevel::High
        );
    }

    #[test]
    fn test_drawdown_tracks_running_peak() {
        let returns = Array1::from(vec![0.5, -0.2, 0.1, -0.5, 1.0]);
        // wealth 1.5, 1.2, 1.32, 0.66, 1.32 -> worst (0.66 - 1.5) / 1.5
        assert_relative_eq!(max_drawdown_pct(&returns), -56.0, epsilon = 1e-9);
    }
}
