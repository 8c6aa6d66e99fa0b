//! Market snapshot types shared by every strategy.
//!
//! A single analysis request is built from one as-of snapshot: the price and
//! volume history of a symbol, optional fundamentals and an optional beta.
//! Every scorer reads the same snapshot so the fused decision is consistent.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Result, VerdictError};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, typically a ticker like "AAPL".
pub type Symbol = String;

/// Container for raw market data.
///
/// `MarketData` wraps a Polars DataFrame holding the daily bars of one
/// symbol. Market-data adapters produce it; [`PriceHistory::from_market_data`]
/// turns it into the plain vectors the scorers work on.
///
/// # Expected Schema
///
/// - `date`: Trading date
/// - `close`: Closing price (required)
/// - `high`, `low`, `volume`: Optional, needed by the technical scorer
///
/// # Example
///
/// ```no_run
/// use verdict_traits::MarketData;
/// use polars::prelude::*;
///
/// let df = df! {
///     "close" => &[150.0, 151.5],
///     "volume" => &[1_000_000.0, 1_200_000.0],
/// }.unwrap();
///
/// let market_data = MarketData::new(df);
/// ```
#[derive(Debug, Clone)]
pub struct MarketData {
    data: DataFrame,
}

impl MarketData {
    /// Creates a new `MarketData` instance from a DataFrame.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes self and returns the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    /// Returns the number of rows in the market data.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether the market data is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if a column exists in the market data.
    pub fn has_column(&self, name: &str) -> bool {
        self.data
            .get_column_names()
            .iter()
            .any(|s| s.as_str() == name)
    }

    /// Reads a numeric column as `f64` values, skipping nulls.
    ///
    /// Integer columns (e.g. volume) are cast to `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::MissingColumn`] if the column does not exist.
    pub fn column_f64(&self, name: &str) -> Result<Vec<f64>> {
        if !self.has_column(name) {
            return Err(VerdictError::MissingColumn(name.to_string()));
        }
        let series = self
            .data
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        Ok(series.f64()?.into_iter().flatten().collect())
    }
}

impl From<DataFrame> for MarketData {
    fn from(data: DataFrame) -> Self {
        Self::new(data)
    }
}

impl AsRef<DataFrame> for MarketData {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}

/// Daily bar history of one symbol, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Closing prices.
    pub close: Vec<f64>,
    /// Daily highs (may be empty).
    #[serde(default)]
    pub high: Vec<f64>,
    /// Daily lows (may be empty).
    #[serde(default)]
    pub low: Vec<f64>,
    /// Daily traded volume (may be empty).
    #[serde(default)]
    pub volume: Vec<f64>,
}

impl PriceHistory {
    /// Creates a close-only history.
    #[must_use]
    pub const fn from_closes(close: Vec<f64>) -> Self {
        Self {
            close,
            high: Vec::new(),
            low: Vec::new(),
            volume: Vec::new(),
        }
    }

    /// Builds a history from a market data frame.
    ///
    /// Rows are sorted by `date` when that column is present. `close` is
    /// required; `high`, `low` and `volume` are read when available.
    ///
    /// # Errors
    ///
    /// Returns an error if `close` is missing or a Polars operation fails.
    pub fn from_market_data(data: &MarketData) -> Result<Self> {
        let sorted = if data.has_column("date") {
            MarketData::new(data.data().sort(["date"], Default::default())?)
        } else {
            data.clone()
        };

        let optional = |name: &str| -> Result<Vec<f64>> {
            if sorted.has_column(name) {
                sorted.column_f64(name)
            } else {
                Ok(Vec::new())
            }
        };

        Ok(Self {
            close: sorted.column_f64("close")?,
            high: optional("high")?,
            low: optional("low")?,
            volume: optional("volume")?,
        })
    }

    /// Number of bars in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Whether the history holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// The most recent closing price.
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.close.last().copied()
    }
}

/// Fundamental ratios used by the value scorer.
///
/// Every field is optional; a missing ratio is scored the way an unattractive
/// value would be (see the value scorer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Trailing price-to-earnings ratio.
    pub pe_ratio: Option<f64>,
    /// Price-to-book ratio.
    pub pb_ratio: Option<f64>,
    /// Debt-to-equity expressed in percent (150.0 means 1.5x).
    pub debt_to_equity_pct: Option<f64>,
    /// Return on equity as a fraction (0.18 = 18%).
    pub return_on_equity: Option<f64>,
    /// Net profit margin as a fraction.
    pub profit_margin: Option<f64>,
    /// Dividend yield as a fraction.
    pub dividend_yield: Option<f64>,
}

/// Everything known about one symbol as of one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Symbol being analyzed.
    pub symbol: Symbol,
    /// Date the snapshot was taken.
    pub as_of: Date,
    /// Daily bars up to and including `as_of`.
    pub prices: PriceHistory,
    /// Fundamentals, when the data source provides them.
    #[serde(default)]
    pub fundamentals: Option<Fundamentals>,
    /// Market beta, when the data source provides it.
    #[serde(default)]
    pub beta: Option<f64>,
}

impl MarketSnapshot {
    /// Creates a snapshot with price history only.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, as_of: Date, prices: PriceHistory) -> Self {
        Self {
            symbol: symbol.into(),
            as_of,
            prices,
            fundamentals: None,
            beta: None,
        }
    }

    /// Attaches fundamentals.
    #[must_use]
    pub fn with_fundamentals(mut self, fundamentals: Fundamentals) -> Self {
        self.fundamentals = Some(fundamentals);
        self
    }

    /// Attaches a beta.
    #[must_use]
    pub const fn with_beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Current price of the symbol (the latest close).
    #[must_use]
    pub fn current_price(&self) -> Option<f64> {
        self.prices.last_close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_market_data_new() {
        let market_data = MarketData::new(DataFrame::default());
        assert!(market_data.is_empty());
    }

    #[test]
    fn test_market_data_has_column() {
        let df = df! {
            "close" => &[150.0],
        }
        .unwrap();

        let market_data = MarketData::new(df);
        assert!(market_data.has_column("close"));
        assert!(!market_data.has_column("open"));
    }

    #[test]
    fn test_column_f64_casts_integers() {
        let df = df! {
            "volume" => &[1_000i64, 2_000],
        }
        .unwrap();

        let market_data = MarketData::new(df);
        assert_eq!(market_data.column_f64("volume").unwrap(), vec![1_000.0, 2_000.0]);
    }

    #[test]
    fn test_column_f64_missing() {
        let market_data = MarketData::new(df! { "close" => &[1.0] }.unwrap());
        let err = market_data.column_f64("volume").unwrap_err();
        assert!(matches!(err, VerdictError::MissingColumn(_)));
    }

    #[test]
    fn test_price_history_sorts_by_date() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let df = df! {
            "date" => &[d(3), d(1), d(2)],
            "close" => &[103.0, 101.0, 102.0],
            "volume" => &[30.0, 10.0, 20.0],
        }
        .unwrap();

        let history = PriceHistory::from_market_data(&MarketData::new(df)).unwrap();
        assert_eq!(history.close, vec![101.0, 102.0, 103.0]);
        assert_eq!(history.volume, vec![10.0, 20.0, 30.0]);
        assert!(history.high.is_empty());
        assert_eq!(history.last_close(), Some(103.0));
    }

    #[test]
    fn test_price_history_requires_close() {
        let df = df! { "open" => &[1.0] }.unwrap();
        assert!(PriceHistory::from_market_data(&MarketData::new(df)).is_err());
    }

    #[test]
    fn test_snapshot_builders() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        let snapshot = MarketSnapshot::new("AAPL", date, PriceHistory::from_closes(vec![1.0, 2.0]))
            .with_beta(1.2)
            .with_fundamentals(Fundamentals {
                pe_ratio: Some(12.0),
                ..Default::default()
            });

        assert_eq!(snapshot.symbol, "AAPL");
        assert_eq!(snapshot.current_price(), Some(2.0));
        assert_eq!(snapshot.beta, Some(1.2));
        assert_eq!(snapshot.fundamentals.unwrap().pe_ratio, Some(12.0));
    }
}
