//! Population baseline adapter backed by the reference dataset CSV.
//!
//! Computes the arithmetic mean of every numeric column in the Statlog
//! heart-disease CSV, once at load time. Cells that do not parse as numbers
//! are skipped per-column; a column with no numeric cells has no mean.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::domain::FeatureKey;
use crate::ports::BaselineProvider;

/// Errors from loading the reference dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Read(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset has no header row")]
    MissingHeader,
}

/// Column means computed from the reference dataset.
#[derive(Debug, Clone)]
pub struct CsvBaselines {
    means: BTreeMap<String, f64>,
}

impl CsvBaselines {
    /// Load the dataset from a CSV file and compute column means.
    ///
    /// # Errors
    /// Returns `DatasetError` if the file cannot be read or parsed. Callers
    /// that want graceful degradation treat this as "no baselines" rather
    /// than failing the evaluation pipeline.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)
            .map_err(|e| DatasetError::Read(format!("{}: {e}", path.display())))?;
        let baselines = Self::from_reader(file)?;
        tracing::info!(
            "Loaded baseline dataset from {} ({} numeric columns)",
            path.display(),
            baselines.means.len()
        );
        Ok(baselines)
    }

    /// Compute column means from CSV data.
    ///
    /// # Errors
    /// Returns `DatasetError` on malformed CSV.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers: Vec<String> = rdr
            .headers()
            .map_err(|_| DatasetError::MissingHeader)?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut sums = vec![0.0_f64; headers.len()];
        let mut counts = vec![0_usize; headers.len()];

        for row in rdr.records() {
            let row = row?;
            for (i, cell) in row.iter().enumerate().take(headers.len()) {
                if let Ok(value) = cell.trim().parse::<f64>() {
                    sums[i] += value;
                    counts[i] += 1;
                }
            }
        }

        let mut means = BTreeMap::new();
        for (i, header) in headers.into_iter().enumerate() {
            if counts[i] > 0 {
                means.insert(header, sums[i] / counts[i] as f64);
            }
        }

        Ok(Self { means })
    }

    /// Mean of an arbitrary column by header name.
    #[must_use]
    pub fn column_mean(&self, name: &str) -> Option<f64> {
        self.means.get(name).copied()
    }
}

impl BaselineProvider for CsvBaselines {
    fn mean_of(&self, key: FeatureKey) -> Option<f64> {
        self.column_mean(key.as_str())
    }
}
