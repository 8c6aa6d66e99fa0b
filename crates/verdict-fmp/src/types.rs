//! Data types for FMP API responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use verdict_traits::Fundamentals;

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Current price.
    pub price: f64,
    /// Change in price.
    #[serde(default)]
    pub change: f64,
    /// Percent change.
    #[serde(default)]
    pub changes_percentage: f64,
    /// Day high.
    #[serde(default)]
    pub day_high: f64,
    /// Day low.
    #[serde(default)]
    pub day_low: f64,
    /// Volume.
    #[serde(default)]
    pub volume: f64,
    /// Previous close.
    #[serde(default)]
    pub previous_close: f64,
}

/// Historical daily bar from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Date (YYYY-MM-DD).
    pub date: String,
    /// Open price.
    #[serde(default)]
    pub open: f64,
    /// High price.
    #[serde(default)]
    pub high: f64,
    /// Low price.
    #[serde(default)]
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Volume.
    #[serde(default)]
    pub volume: f64,
}

impl HistoricalPrice {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Trailing-twelve-month valuation and leverage ratios.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatiosTtm {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Price to earnings.
    #[serde(rename = "priceToEarningsRatioTTM", default)]
    pub price_to_earnings: Option<f64>,
    /// Price to book.
    #[serde(rename = "priceToBookRatioTTM", default)]
    pub price_to_book: Option<f64>,
    /// Debt to equity as a plain multiple.
    #[serde(rename = "debtToEquityRatioTTM", default)]
    pub debt_to_equity: Option<f64>,
    /// Net profit margin as a fraction.
    #[serde(rename = "netProfitMarginTTM", default)]
    pub net_profit_margin: Option<f64>,
    /// Dividend yield as a fraction.
    #[serde(rename = "dividendYieldTTM", default)]
    pub dividend_yield: Option<f64>,
}

/// Trailing-twelve-month key metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyMetricsTtm {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Return on equity as a fraction.
    #[serde(rename = "returnOnEquityTTM", default)]
    pub return_on_equity: Option<f64>,
}

/// Company profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub company_name: String,
    /// Latest price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Market beta.
    #[serde(default)]
    pub beta: Option<f64>,
}

/// Maps TTM ratios and metrics onto the value scorer's fundamentals.
///
/// Debt/equity is converted from a multiple to percent. Returns `None` when
/// neither source is available.
#[must_use]
pub fn fundamentals_from(
    ratios: Option<&RatiosTtm>,
    metrics: Option<&KeyMetricsTtm>,
) -> Option<Fundamentals> {
    if ratios.is_none() && metrics.is_none() {
        return None;
    }
    Some(Fundamentals {
        pe_ratio: ratios.and_then(|r| r.price_to_earnings),
        pb_ratio: ratios.and_then(|r| r.price_to_book),
        debt_to_equity_pct: ratios.and_then(|r| r.debt_to_equity).map(|d| d * 100.0),
        return_on_equity: metrics.and_then(|m| m.return_on_equity),
        profit_margin: ratios.and_then(|r| r.net_profit_margin),
        dividend_yield: ratios.and_then(|r| r.dividend_yield),
    })
}
