//! Cardiolens: heart-disease risk reports from the command line.
//!
//! Loads the trained model artifact and the reference dataset once at
//! startup, reads one patient record as JSON, and prints the risk report.
//!
//! ```bash
//! cardiolens patient.json
//! cat patient.json | cardiolens - --json
//! ```
//!
//! Paths are configured through `CARDIOLENS_MODEL` and `CARDIOLENS_DATA`;
//! a missing dataset degrades to a report without baseline comparisons,
//! while a missing model is a startup error.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use cardiolens::adapters::{CsvBaselines, GaussianNb};
use cardiolens::{FeatureRecord, Report, RiskService};

const DEFAULT_MODEL_PATH: &str = "models/model.json";
const DEFAULT_DATA_PATH: &str = "data/heart_disease_statlog.csv";

fn main() -> Result<()> {
    // Logs go to stderr so report output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut patient_path: Option<String> = None;
    let mut as_json = false;

    for arg in args.by_ref() {
        match arg.as_str() {
            "--json" => as_json = true,
            "--help" | "-h" => {
                eprintln!("Usage: cardiolens <patient.json | -> [--json]");
                return Ok(());
            }
            other if patient_path.is_none() => patient_path = Some(other.to_string()),
            other => bail!("Unexpected argument: {other}"),
        }
    }
    let Some(patient_path) = patient_path else {
        bail!("Usage: cardiolens <patient.json | -> [--json]");
    };

    let model_path =
        PathBuf::from(std::env::var("CARDIOLENS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL_PATH.into()));
    let data_path =
        PathBuf::from(std::env::var("CARDIOLENS_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.into()));

    // Model artifact is required; without it the engine is never invoked.
    let classifier = Arc::new(
        GaussianNb::load(&model_path)
            .with_context(|| format!("Model artifact not loadable from {}", model_path.display()))?,
    );

    // The dataset is optional: baseline annotations are omitted without it.
    let baselines = match CsvBaselines::from_path(&data_path) {
        Ok(b) => Some(Arc::new(b)),
        Err(e) => {
            tracing::warn!("Dataset unavailable, baseline comparisons disabled: {e}");
            None
        }
    };

    let record = read_record(&patient_path)?;
    let service = RiskService::new(classifier, baselines);
    let report = service.diagnose(&record)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn read_record(path: &str) -> Result<FeatureRecord> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read patient record from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read patient record from {path}"))?
    };
    serde_json::from_str(&content).context("Patient record is not valid JSON")
}

fn print_report(report: &Report) {
    println!("Diagnosis:  {}", report.diagnosis.description());
    println!("Confidence: {}", report.confidence_percent());
    println!();
    println!("Probability normal:        {:.2}%", report.probabilities[0] * 100.0);
    println!("Probability heart disease: {:.2}%", report.probabilities[1] * 100.0);
    println!();
    println!("Notes:");
    for annotation in &report.annotations {
        println!(
            "  [{:8}] {}: {}",
            annotation.severity.to_string(),
            annotation.feature_key,
            annotation.message
        );
    }
}
