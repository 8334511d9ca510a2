//! Churn Predict - ad hoc single-record churn inference
//!
//! Loads the trained model bundle from the working directory, scores
//! one hard-coded customer record, and prints the report to stdout.

use anyhow::{Context, Result};
use churn_lib::{report, ChurnPredictor};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod customer;

/// Bundle trained with regularization C=1, read from the working directory
const MODEL_PATH: &str = "model_C=1.bin";

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let predictor = ChurnPredictor::from_file(MODEL_PATH)
        .with_context(|| format!("failed to load model bundle from {MODEL_PATH}"))?;
    info!(model_version = %predictor.model_version(), "Model bundle loaded");

    let customer = customer::example_customer();
    let prediction = predictor.predict(&customer)?;

    println!("{}", report::render(&customer, &prediction));

    Ok(())
}
