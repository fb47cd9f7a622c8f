//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external artifacts:
//! - `naive_bayes`: Gaussian naive-Bayes classifier from a JSON artifact
//! - `dataset`: population baselines from the Statlog reference CSV

pub mod dataset;
pub mod naive_bayes;

pub use dataset::{CsvBaselines, DatasetError};
pub use naive_bayes::{GaussianNb, ModelError};
