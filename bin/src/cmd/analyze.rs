//! Analyze command implementation.

use crate::{OutputFormat, cmd::banner, data};
use anyhow::Result;
use tracing::warn;
use verdict::{Analysis, Analyzer};
use verdict_combine::{FusionConfig, FusionEngine};
use verdict_traits::{MlPrediction, StaticPredictor, StrategyScore};

/// Fetch, score and fuse each symbol.
pub(crate) async fn analyze(
    symbols: &[String],
    days: u32,
    prediction: Option<MlPrediction>,
    config: FusionConfig,
    format: OutputFormat,
) -> Result<()> {
    let mut analyzer = Analyzer::new(FusionEngine::new(config)?);
    if let Some(prediction) = prediction {
        analyzer = analyzer.with_predictor(StaticPredictor::new(prediction));
    }

    let snapshots = data::load_snapshots(symbols, days).await?;
    let mut analyses = Vec::with_capacity(snapshots.len());
    for (snapshot, result) in snapshots.iter().zip(analyzer.analyze_batch(&snapshots)) {
        match result {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => warn!(symbol = %snapshot.symbol, error = %e, "analysis failed"),
        }
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analyses)?),
        OutputFormat::Text => {
            banner("Signal Fusion");
            for analysis in &analyses {
                print!("{}", render(analysis));
            }
        }
    }

    Ok(())
}

fn score_line(label: &str, score: &StrategyScore) -> String {
    format!("  {label:16} {:>5.1} / {:<4}\n", score.score, score.max_score)
}

/// Text report for one analysis.
fn render(analysis: &Analysis) -> String {
    let decision = &analysis.decision;
    let risk = &analysis.risk;
    let mut out = String::new();

    out.push_str(&format!(
        "{} @ ${:.2}  ({})\n",
        analysis.symbol,
        analysis.current_price,
        analysis.timestamp.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    out.push_str(&score_line("Value", &analysis.value));
    out.push_str(&score_line("Momentum", &analysis.momentum));
    out.push_str(&score_line("Mean reversion", &analysis.mean_reversion));
    out.push_str(&score_line("Technical", &analysis.technical));
    out.push_str(&format!(
        "  {:16} {} {:.0}%\n",
        "ML",
        analysis.prediction.direction,
        analysis.prediction.confidence_percent
    ));
    out.push_str(&format!(
        "  {:16} {} (vol {:.1}%, drawdown {:.1}%, sharpe {:.2}, beta {:.2})\n\n",
        "Risk",
        risk.risk_level,
        risk.volatility_annualized_percent,
        risk.max_drawdown_percent,
        risk.sharpe_ratio,
        risk.beta
    ));

    out.push_str(&format!(
        "Decision: {} / {} (confidence {:.1})\n",
        decision.recommendation, decision.action, decision.confidence
    ));
    out.push_str(&format!(
        "  Target ${:.2}   Stop ${:.2}\n",
        decision.target_price, decision.stop_loss
    ));

    if !decision.reasoning.is_empty() {
        out.push_str("Reasoning:\n");
        for line in &decision.reasoning {
            out.push_str(&format!("  - {line}\n"));
        }
    }

    let signals: Vec<_> = [
        &analysis.value,
        &analysis.momentum,
        &analysis.mean_reversion,
        &analysis.technical,
    ]
    .into_iter()
    .flat_map(|score| score.signals.iter().map(move |s| (&score.strategy_name, s)))
    .collect();
    if !signals.is_empty() {
        out.push_str("Signals:\n");
        for (strategy, signal) in signals {
            out.push_str(&format!("  [{strategy}] {signal}\n"));
        }
    }
    out.push('\n');
    out
}
