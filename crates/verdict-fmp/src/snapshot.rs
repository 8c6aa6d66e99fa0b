//! Assembly of FMP responses into a [`MarketSnapshot`].

use chrono::NaiveDate;
use polars::prelude::*;
use verdict_traits::{Fundamentals, MarketData, MarketSnapshot, PriceHistory, VerdictError};

use crate::{Result, error::FmpError, types::HistoricalPrice};

/// Converts daily bars into a market data frame sorted oldest first.
///
/// Bars with an unparseable date are dropped.
///
/// # Errors
///
/// Returns an error if the frame cannot be built.
pub fn market_data_from_prices(prices: &[HistoricalPrice]) -> Result<MarketData> {
    let mut bars: Vec<(NaiveDate, &HistoricalPrice)> = prices
        .iter()
        .filter_map(|bar| bar.parsed_date().map(|date| (date, bar)))
        .collect();
    bars.sort_by_key(|(date, _)| *date);

    let column = |f: fn(&HistoricalPrice) -> f64| bars.iter().map(|(_, bar)| f(bar)).collect::<Vec<f64>>();
    let df = df! {
        "date" => bars.iter().map(|(date, _)| *date).collect::<Vec<_>>(),
        "open" => column(|bar| bar.open),
        "high" => column(|bar| bar.high),
        "low" => column(|bar| bar.low),
        "close" => column(|bar| bar.close),
        "volume" => column(|bar| bar.volume),
    }
    .map_err(VerdictError::from)?;

    Ok(MarketData::new(df))
}

/// Builds a snapshot from fetched bars and optional fundamentals and beta.
///
/// The snapshot is dated at the most recent bar.
///
/// # Errors
///
/// Returns [`FmpError::NoData`] when no bar has a valid date.
pub fn build_snapshot(
    symbol: &str,
    prices: &[HistoricalPrice],
    fundamentals: Option<Fundamentals>,
    beta: Option<f64>,
) -> Result<MarketSnapshot> {
    let as_of = prices
        .iter()
        .filter_map(HistoricalPrice::parsed_date)
        .max()
        .ok_or_else(|| FmpError::NoData(symbol.to_string()))?;

    let history = PriceHistory::from_market_data(&market_data_from_prices(prices)?)?;
    let mut snapshot = MarketSnapshot::new(symbol.to_uppercase(), as_of, history);
    snapshot.fundamentals = fundamentals;
    snapshot.beta = beta;
    Ok(snapshot)
}
