//! Quick command implementation.

use crate::{OutputFormat, cmd::banner, data};
use anyhow::Result;
use serde::Serialize;
use tracing::warn;
use verdict::Analyzer;
use verdict_traits::QuickDecision;

#[derive(Serialize)]
struct QuickReport<'a> {
    symbol: &'a str,
    current_price: f64,
    #[serde(flatten)]
    decision: QuickDecision,
}

/// Quick single-signal decision for each symbol.
pub(crate) async fn quick(symbols: &[String], days: u32, format: OutputFormat) -> Result<()> {
    let analyzer = Analyzer::default();
    let snapshots = data::load_snapshots(symbols, days).await?;

    let mut reports = Vec::with_capacity(snapshots.len());
    for snapshot in &snapshots {
        match analyzer.quick_analysis(snapshot) {
            Ok(decision) => reports.push(QuickReport {
                symbol: &snapshot.symbol,
                current_price: snapshot.current_price().unwrap_or_default(),
                decision,
            }),
            Err(e) => warn!(symbol = %snapshot.symbol, error = %e, "quick analysis failed"),
        }
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            banner("Quick Analysis");
            for report in &reports {
                print!("{}", render(report));
            }
        }
    }

    Ok(())
}

fn render(report: &QuickReport<'_>) -> String {
    let d = &report.decision;
    let mut out = format!(
        "{:8} ${:>9.2}  {:12} {:5}  score {:+}  confidence {:.0}\n",
        report.symbol,
        report.current_price,
        d.recommendation.to_string(),
        d.action.to_string(),
        d.score,
        d.confidence_score
    );
    out.push_str(&format!(
        "         target ${:.2}  stop ${:.2}\n",
        d.target_price, d.stop_loss
    ));
    for signal in &d.signals {
        out.push_str(&format!("         - {signal}\n"));
    }
    out
}
