//! Beverage predictor entrypoint: loads the model once, then predicts one submission per run.

use beverage_predictor::{
    config::PredictorConfig,
    features::{Column, FeatureTransform, FEATURE_DIM},
    logging::StructuredLogger,
    model::OnnxClassifier,
    outcome::PredictionEngine,
    survey::AnswerCollector,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Predict a beverage consumer's class from survey answers
#[derive(Parser)]
#[command(name = "beverage-predictor", version, about, long_about = None)]
struct Cli {
    /// Model file (overrides config)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log level when RUST_LOG is unset (overrides config)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the consumer class for one answers document
    Predict {
        /// Answers JSON file (use - for stdin)
        #[arg(short, long)]
        answers: PathBuf,
    },

    /// Print the aligned feature vector without loading a model
    Features {
        /// Answers JSON file (use - for stdin)
        #[arg(short, long)]
        answers: PathBuf,
    },

    /// Print the model's input columns in order
    Schema,
}

#[derive(Serialize)]
struct ColumnEntry {
    index: usize,
    name: &'static str,
    kind: beverage_predictor::features::ColumnKind,
}

#[derive(Serialize)]
struct FeatureEntry {
    name: &'static str,
    value: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let mut config = PredictorConfig::load(&PredictorConfig::path_from_env())?;
    if let Some(path) = cli.model {
        config.model_path = path;
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if cli.json {
        config.output.json = true;
    }

    StructuredLogger::init(config.log.json, &config.log.level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Predict { answers } => {
            let model = OnnxClassifier::load(&config.model_path, &config.model)?;
            if model.input_dim() != FEATURE_DIM {
                warn!(
                    input_dim = model.input_dim(),
                    feature_dim = FEATURE_DIM,
                    "model input width differs from the feature row; predictions will fail"
                );
            }
            let raw = AnswerCollector::from_path(&answers)?;
            let engine = PredictionEngine::new(&model);
            let report = engine.submit(&raw);
            if config.output.json {
                StructuredLogger::emit_json(&report, &mut out)?;
            } else {
                writeln!(out, "{}", report.message)?;
            }
            info!(submission_id = %report.submission_id, "submission complete");
        }
        Commands::Features { answers } => {
            let raw = AnswerCollector::from_path(&answers)?;
            let features = FeatureTransform::transform(&raw);
            if config.output.json {
                let entries: Vec<FeatureEntry> = features
                    .named()
                    .map(|(c, value)| FeatureEntry { name: c.name(), value })
                    .collect();
                StructuredLogger::emit_json(&entries, &mut out)?;
            } else {
                for (column, value) in features.named() {
                    writeln!(out, "{} = {}", column.name(), value)?;
                }
            }
        }
        Commands::Schema => {
            if config.output.json {
                let entries: Vec<ColumnEntry> = Column::ALL
                    .iter()
                    .map(|c| ColumnEntry {
                        index: c.index(),
                        name: c.name(),
                        kind: c.kind(),
                    })
                    .collect();
                StructuredLogger::emit_json(&entries, &mut out)?;
            } else {
                for c in Column::ALL {
                    writeln!(out, "{:>2}  {:<10}  {}", c.index(), c.kind().as_str(), c.name())?;
                }
            }
        }
    }

    Ok(())
}
