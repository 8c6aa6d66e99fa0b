//! Loadable fusion configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use verdict_traits::{Result, VerdictError};

use crate::risk_adjust::RiskPenalty;
use crate::weights::FusionWeights;

/// Complete configuration of the fusion engine.
///
/// Missing sections fall back to their defaults, so a file containing only
/// `{"risk": {"high_multiplier": 0.9}}` keeps the production weights.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FusionConfig {
    /// Slot weights.
    pub weights: FusionWeights,
    /// High-risk penalty.
    pub risk: RiskPenalty,
}

impl FusionConfig {
    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InvalidConfig`] for the first invalid section.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.risk.validate()
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InvalidConfig`] if the JSON is malformed or the
    /// values fail validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| VerdictError::InvalidConfig(format!("malformed fusion config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InvalidConfig`] if the file cannot be read or
    /// its content is rejected by [`Self::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            VerdictError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loading fusion config");
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_round_trips_through_json() {
        let json = serde_json::to_string(&FusionConfig::default()).unwrap();
        let parsed = FusionConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, FusionConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = FusionConfig::from_json_str(r#"{"risk": {"high_multiplier": 0.9}}"#).unwrap();
        assert_relative_eq!(config.risk.high_multiplier, 0.9);
        assert_eq!(config.weights, FusionWeights::default());
    }

    #[test]
    fn test_rejects_weights_off_one() {
        let json = r#"{"weights": {"value": 0.3, "momentum": 0.3, "mean_reversion": 0.2,
                       "technical": 0.15, "ml": 0.1}}"#;
        let err = FusionConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(FusionConfig::from_json_str(r#"{"weight": {}}"#).is_err());
        assert!(FusionConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = FusionConfig::from_json_file("/nonexistent/verdict.json").unwrap_err();
        assert!(matches!(err, VerdictError::InvalidConfig(_)));
    }
}
