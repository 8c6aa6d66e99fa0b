//! verdict CLI binary.
//!
//! Fetches market snapshots, runs the strategy scorers and fuses them into
//! trading decisions.

mod cmd;
mod data;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::{path::PathBuf, process};
use verdict_traits::{Direction, MlPrediction};

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Multi-strategy signal fusion for equities", long_about = None)]
#[command(version)]
struct Cli {
    /// Fusion config JSON (weights and risk penalty)
    #[arg(long, global = true, env = "VERDICT_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch data and fuse all strategies into a decision
    Analyze {
        /// Ticker symbols
        #[arg(required = true, value_delimiter = ',')]
        symbols: Vec<String>,

        /// Calendar days of price history to fetch
        #[arg(short, long, default_value_t = data::DEFAULT_LOOKBACK_DAYS)]
        days: u32,

        /// Direction forecast from an external model
        #[arg(long, value_enum, requires = "ml_confidence")]
        ml_direction: Option<MlDirection>,

        /// Confidence of the external forecast in percent
        #[arg(long)]
        ml_confidence: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Single-signal analysis from moving averages, RSI and MACD
    Quick {
        /// Ticker symbols
        #[arg(required = true, value_delimiter = ',')]
        symbols: Vec<String>,

        /// Calendar days of price history to fetch
        #[arg(short, long, default_value_t = data::DEFAULT_LOOKBACK_DAYS)]
        days: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Fuse precomputed scores from a JSON file
    Fuse {
        /// File holding one inputs object or an array of them
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List the fused strategies and their active weights
    Strategies {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Direction accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MlDirection {
    /// Price expected to rise
    Up,
    /// Price expected to fall
    Down,
}

fn prediction(direction: Option<MlDirection>, confidence: Option<f64>) -> Option<MlPrediction> {
    let direction = match direction? {
        MlDirection::Up => Direction::Up,
        MlDirection::Down => Direction::Down,
    };
    Some(MlPrediction::new(direction, confidence.unwrap_or_default()))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = data::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            symbols,
            days,
            ml_direction,
            ml_confidence,
            format,
        } => {
            let prediction = prediction(ml_direction, ml_confidence);
            cmd::analyze::analyze(&symbols, days, prediction, config, format).await?;
        }
        Commands::Quick {
            symbols,
            days,
            format,
        } => {
            cmd::quick::quick(&symbols, days, format).await?;
        }
        Commands::Fuse { input } => {
            cmd::fuse::fuse(&input, config)?;
        }
        Commands::Strategies { category, format } => {
            cmd::strategies::list_strategies(category.as_deref(), &config, format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "verdict",
            "analyze",
            "AAPL,MSFT",
            "--ml-direction",
            "up",
            "--ml-confidence",
            "80",
            "--format",
            "json",
        ])
        .unwrap();
        let Commands::Analyze {
            symbols,
            days,
            ml_direction,
            ml_confidence,
            format,
        } = cli.command
        else {
            panic!("expected analyze");
        };
        assert_eq!(symbols, ["AAPL", "MSFT"]);
        assert_eq!(days, data::DEFAULT_LOOKBACK_DAYS);
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(
            prediction(ml_direction, ml_confidence),
            Some(MlPrediction::new(Direction::Up, 80.0))
        );
    }

    #[test]
    fn test_ml_direction_requires_confidence() {
        assert!(Cli::try_parse_from(["verdict", "analyze", "AAPL", "--ml-direction", "down"]).is_err());
        assert_eq!(prediction(None, Some(50.0)), None);
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["verdict", "fuse", "--input", "in.json", "-v", "--config", "w.json"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("w.json")));
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
