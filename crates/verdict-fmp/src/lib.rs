//! Financial Modeling Prep (FMP) market snapshots for verdict.
//!
//! This crate fetches daily prices, trailing-twelve-month ratios and company
//! profiles from the [Financial Modeling Prep](https://financialmodelingprep.com/)
//! API and assembles them into the [`MarketSnapshot`](verdict_traits::MarketSnapshot)
//! the scorers consume.
//!
//! # Usage
//!
//! ```rust,ignore
//! use verdict_fmp::FmpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // One year of bars plus fundamentals and beta
//!     let snapshot = client.snapshot("AAPL", 365).await?;
//!
//!     // Individual endpoints are available too
//!     let quote = client.quote("AAPL").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod snapshot;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use snapshot::{build_snapshot, market_data_from_prices};
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
