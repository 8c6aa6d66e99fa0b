//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    snapshot::build_snapshot,
    types::{HistoricalPrice, KeyMetricsTtm, Profile, Quote, RatiosTtm, fundamentals_from},
};
use chrono::{Duration, NaiveDate, Utc};
use reqwest::Client;
use std::env;
use tracing::{debug, warn};
use verdict_traits::MarketSnapshot;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        debug!(endpoint, "FMP request");
        let response = self.client.get(self.url(endpoint)).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // FMP reports some failures with a 200 and an error body
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch the first element of a list endpoint.
    async fn first<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        symbol: &str,
    ) -> Result<T> {
        let items: Vec<T> = self.get(endpoint).await?;
        items
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get real-time quote for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let endpoint = format!("quote?symbol={}", symbol.to_uppercase());
        self.first(&endpoint, symbol).await
    }

    /// Get historical daily prices for a symbol, newest first.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol
    /// * `from` - First date to include
    /// * `to` - Last date to include
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<HistoricalPrice>> {
        // The stable API returns a flat array, not a wrapped response
        self.get(&historical_endpoint(symbol, from, to)).await
    }

    /// Get trailing-twelve-month ratios for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn ratios_ttm(&self, symbol: &str) -> Result<RatiosTtm> {
        let endpoint = format!("ratios-ttm?symbol={}", symbol.to_uppercase());
        self.first(&endpoint, symbol).await
    }

    /// Get trailing-twelve-month key metrics for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn key_metrics_ttm(&self, symbol: &str) -> Result<KeyMetricsTtm> {
        let endpoint = format!("key-metrics-ttm?symbol={}", symbol.to_uppercase());
        self.first(&endpoint, symbol).await
    }

    /// Get the company profile for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn profile(&self, symbol: &str) -> Result<Profile> {
        let endpoint = format!("profile?symbol={}", symbol.to_uppercase());
        self.first(&endpoint, symbol).await
    }

    /// Assemble a snapshot covering the last `lookback_days` calendar days.
    ///
    /// Prices are required. Ratios, key metrics and the profile are fetched
    /// concurrently and a failure in any of them leaves the matching snapshot
    /// field empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the price request fails or returns no bars.
    pub async fn snapshot(&self, symbol: &str, lookback_days: u32) -> Result<MarketSnapshot> {
        let to = Utc::now().date_naive();
        let from = to - Duration::days(i64::from(lookback_days));

        let (prices, ratios, metrics, profile) = tokio::join!(
            self.historical_prices(symbol, Some(from), Some(to)),
            self.ratios_ttm(symbol),
            self.key_metrics_ttm(symbol),
            self.profile(symbol),
        );

        let prices = prices?;
        if prices.is_empty() {
            return Err(FmpError::NoData(symbol.to_string()));
        }

        let ratios = optional(symbol, "ratios-ttm", ratios);
        let metrics = optional(symbol, "key-metrics-ttm", metrics);
        let beta = optional(symbol, "profile", profile).and_then(|p| p.beta);

        debug!(symbol, bars = prices.len(), has_ratios = ratios.is_some(), "snapshot fetched");
        build_snapshot(
            symbol,
            &prices,
            fundamentals_from(ratios.as_ref(), metrics.as_ref()),
            beta,
        )
    }
}

fn historical_endpoint(symbol: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> String {
    let mut endpoint = format!("historical-price-eod/full?symbol={}", symbol.to_uppercase());
    if let Some(f) = from {
        endpoint.push_str(&format!("&from={}", f.format("%Y-%m-%d")));
    }
    if let Some(t) = to {
        endpoint.push_str(&format!("&to={}", t.format("%Y-%m-%d")));
    }
    endpoint
}

fn optional<T>(symbol: &str, endpoint: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(symbol, endpoint, error = %e, "optional FMP data unavailable");
            None
        }
    }
}
