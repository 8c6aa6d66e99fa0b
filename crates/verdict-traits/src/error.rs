//! Error types for the verdict workspace.
//!
//! The fusion engine itself never fails; these errors come from the
//! collaborators around it (scorers, snapshot construction, configuration
//! loading) and are converted to sentinel values before they reach the engine.

use thiserror::Error;

/// The main error type for verdict operations.
#[derive(Debug, Error)]
pub enum VerdictError {
    /// A strategy scorer failed to compute its score.
    #[error("Scorer computation failed: {0}")]
    ScorerComputation(String),

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from the data.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error when data is insufficient for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error when a fusion or scorer configuration is rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error when a strategy is not found in the registry.
    #[error("Strategy not found: {0}")]
    StrategyNotFound(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for VerdictError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for VerdictError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for verdict operations.
pub type Result<T> = std::result::Result<T, VerdictError>;
