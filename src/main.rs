//! Trains a perceptron on a CSV or JSON dataset and reports the boundary.
//!
//! Run with:
//!   cargo run -- --data points.csv --epochs 25 --learn-rate 0.1
//!   RUST_LOG=debug cargo run -- --data points.json --output model.json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use perceptron_kit::{train_dataset, Dataset, Result, TrainConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "perceptron-kit")]
#[command(version)]
#[command(about = "Train a perceptron on labelled points", long_about = None)]
struct Cli {
    /// Dataset file: `.json` ({"features": [[..]], "labels": [..]}) or CSV (`f1,...,fn,label`)
    #[arg(short, long, value_name = "FILE")]
    data: PathBuf,

    /// JSON file with `learn_rate`, `epochs` and `seed`
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long)]
    learn_rate: Option<f64>,

    #[arg(long)]
    epochs: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the trained model as JSON
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => TrainConfig::load_json(&path.to_string_lossy())?,
        None => TrainConfig::default(),
    };
    if let Some(lr) = cli.learn_rate {
        config.learn_rate = lr;
    }
    if let Some(epochs) = cli.epochs {
        config.epochs = epochs;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let data_path = cli.data.to_string_lossy();
    let dataset = match cli.data.extension().and_then(|e| e.to_str()) {
        Some("json") => Dataset::load_json(&data_path)?,
        _ => Dataset::load_csv(&data_path)?,
    };
    tracing::info!(points = dataset.len(), ?config, "loaded {}", data_path);

    let model = train_dataset(&dataset, &config)?;
    let accuracy = model.accuracy(&dataset)?;

    println!("weights:  {:?}", model.weights);
    println!("bias:     {:.6}", model.bias);
    println!("accuracy: {:.2}%", accuracy * 100.0);

    if let Some(out) = &cli.output {
        model.save_json(&out.to_string_lossy())?;
        tracing::info!("model written to {}", out.display());
    }
    Ok(())
}
