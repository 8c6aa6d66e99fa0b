//! Errors raised while fetching market data from FMP.

use thiserror::Error;

/// Failure modes of the FMP adapter.
///
/// None of these reach the fusion engine: callers either skip the symbol or
/// fall back to sentinel scores.
#[derive(Debug, Error)]
pub enum FmpError {
    /// No API key in the environment or `.env`.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// Transport-level failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Body was not the JSON shape we expected.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// FMP answered with an error body or a non-success status.
    #[error("FMP API error: {0}")]
    Api(String),

    /// HTTP 429.
    #[error("Rate limit exceeded. Free tier allows 250 requests/day.")]
    RateLimitExceeded,

    /// Quote or profile lookup returned nothing.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Price history came back empty.
    #[error("No price history for {0}")]
    NoData(String),

    /// `.env` file present but unreadable.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),

    /// Bars could not be assembled into a snapshot.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] verdict_traits::VerdictError),
}
