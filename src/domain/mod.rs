//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and implement strict validation.

mod patient;
mod report;
pub mod rules;

pub use patient::{FeatureKey, FeatureRecord};
pub use report::{Annotation, BaselineStats, Diagnosis, PredictionResult, Report, Severity};
