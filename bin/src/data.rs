//! Data loading utilities for the verdict CLI.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};
use verdict_combine::FusionConfig;
use verdict_fmp::FmpClient;
use verdict_traits::MarketSnapshot;

/// Calendar days of history fetched by default; enough for the 61-bar
/// momentum window with room for holidays.
pub(crate) const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Load the fusion config, falling back to the defaults when no path is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<FusionConfig> {
    match path {
        Some(path) => {
            let config = FusionConfig::from_json_file(path)
                .with_context(|| format!("loading fusion config {}", path.display()))?;
            info!(path = %path.display(), "loaded fusion config");
            Ok(config)
        }
        None => Ok(FusionConfig::default()),
    }
}

/// Fetch a snapshot per symbol, skipping symbols that fail.
///
/// Requests run one symbol at a time to stay inside FMP rate limits.
pub(crate) async fn load_snapshots(symbols: &[String], lookback_days: u32) -> Result<Vec<MarketSnapshot>> {
    let client = FmpClient::from_env()?;

    let mut snapshots = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match client.snapshot(symbol, lookback_days).await {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => warn!(symbol = %symbol, error = %e, "skipping symbol"),
        }
    }

    if snapshots.is_empty() {
        anyhow::bail!("no market data for {}", symbols.join(", "));
    }
    Ok(snapshots)
}
