//! Fuse command implementation.

use anyhow::{Context, Result};
use std::{fs, path::Path};
use verdict_combine::{FusionConfig, FusionEngine, FusionInputs};
use verdict_traits::Decision;

/// Fuse precomputed inputs read from a JSON file and print the decisions.
pub(crate) fn fuse(input: &Path, config: FusionConfig) -> Result<()> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("reading inputs {}", input.display()))?;
    let engine = FusionEngine::new(config)?;
    let output = fuse_json(&engine, &json)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// A single inputs object yields one decision, an array yields an array.
fn fuse_json(engine: &FusionEngine, json: &str) -> Result<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(json).context("parsing inputs JSON")?;
    if value.is_array() {
        let batch: Vec<FusionInputs> = serde_json::from_value(value)?;
        let decisions: Vec<Decision> = engine.fuse_batch(&batch);
        Ok(serde_json::to_value(decisions)?)
    } else {
        let inputs: FusionInputs = serde_json::from_value(value)?;
        Ok(serde_json::to_value(engine.fuse(&inputs))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULLISH: &str = r#"{
        "value": {"score": 8, "max_score": 10, "strategy_name": "value"},
        "momentum": {"score": 9, "max_score": 10, "strategy_name": "momentum"},
        "mean_reversion": {"score": 5, "max_score": 10, "strategy_name": "mean_reversion"},
        "technical": {"score": 4, "max_score": 5, "strategy_name": "technical"},
        "ml": {"direction": "UP", "confidence_percent": 80},
        "risk": {
            "volatility_annualized_percent": 15.0,
            "max_drawdown_percent": -8.0,
            "beta": 1.0,
            "sharpe_ratio": 1.1,
            "risk_level": "LOW"
        },
        "current_price": 50.0
    }"#;

    #[test]
    fn test_fuse_single() {
        let output = fuse_json(&FusionEngine::default(), BULLISH).unwrap();
        assert_eq!(output["recommendation"], "STRONG BUY");
        assert_eq!(output["action"], "BUY");
        assert!((output["target_price"].as_f64().unwrap() - 57.5).abs() < 1e-9);
    }

    #[test]
    fn test_fuse_array() {
        let json = format!("[{BULLISH}, {BULLISH}]");
        let output = fuse_json(&FusionEngine::default(), &json).unwrap();
        assert_eq!(output.as_array().unwrap().len(), 2);
        assert_eq!(output[0], output[1]);
    }

    #[test]
    fn test_fuse_rejects_garbage() {
        assert!(fuse_json(&FusionEngine::default(), "{\"value\": 1}").is_err());
        assert!(fuse_json(&FusionEngine::default(), "not json").is_err());
    }
}
