//! Strategy listing command implementation.

use crate::{OutputFormat, cmd::banner};
use anyhow::Result;
use serde::Serialize;
use verdict_combine::{FusionConfig, Slot};
use verdict_signals::registry::{StrategyInfo, available_strategies};

#[derive(Serialize)]
struct StrategyRow {
    #[serde(flatten)]
    info: StrategyInfo,
    active_weight: f64,
}

fn rows(category: Option<&str>, config: &FusionConfig) -> Vec<StrategyRow> {
    available_strategies()
        .into_iter()
        .filter(|info| {
            category.is_none_or(|filter| {
                format!("{:?}", info.category)
                    .to_lowercase()
                    .contains(&filter.to_lowercase())
            })
        })
        .map(|info| {
            let active_weight = Slot::ALL
                .iter()
                .find(|slot| slot.name() == info.name)
                .map_or(0.0, |slot| config.weights.weight(*slot));
            StrategyRow {
                info,
                active_weight,
            }
        })
        .collect()
}

/// List the fused strategies, optionally filtered by category.
pub(crate) fn list_strategies(
    category: Option<&str>,
    config: &FusionConfig,
    format: OutputFormat,
) -> Result<()> {
    let rows = rows(category, config);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            banner("Fused Strategies");
            println!(
                "  {:16} {:12} {:>6} {:>9} {:>7}",
                "name", "category", "max", "lookback", "weight"
            );
            println!("{}", "-".repeat(60));
            for row in &rows {
                let info = &row.info;
                println!(
                    "  {:16} {:12} {:>6} {:>9} {:>7.2}",
                    info.name,
                    format!("{:?}", info.category),
                    info.max_score,
                    info.lookback,
                    row.active_weight
                );
                println!("    {}", info.description);
            }
            println!();
            println!(
                "High-risk penalty: x{:.2}\n",
                config.risk.high_multiplier
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_combine::FusionWeights;

    #[test]
    fn test_rows_use_active_weights() {
        let config = FusionConfig {
            weights: FusionWeights {
                value: 0.5,
                momentum: 0.2,
                mean_reversion: 0.1,
                technical: 0.1,
                ml: 0.1,
            },
            ..Default::default()
        };
        let rows = rows(None, &config);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].info.name, "value");
        assert!((rows[0].active_weight - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_category_filter() {
        let rows = rows(Some("predict"), &FusionConfig::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].info.name, "ml");
        assert!(super::rows(Some("nothing"), &FusionConfig::default()).is_empty());
    }
}
