//! # Cardiolens
//!
//! Decision-support layer for heart-disease screening: turns a binary
//! classifier's prediction on a fixed 13-feature clinical record (UCI
//! Statlog schema) into a structured, human-readable risk report.
//!
//! This crate provides:
//! - Strict validation of the 13-feature clinical record
//! - Gaussian naive-Bayes inference from a JSON model artifact
//! - Per-feature risk annotations from population baselines and fixed
//!   clinical rule tables
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (feature record, report, rule tables)
//! - `ports`: Trait definitions for the external capabilities
//! - `adapters`: Concrete implementations (JSON model artifact, CSV baselines)
//! - `application`: The risk annotation engine orchestrating domain and ports

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::RiskService;
pub use domain::{Annotation, Diagnosis, FeatureKey, FeatureRecord, Report, Severity};

/// Result type for Cardiolens operations
pub type Result<T> = std::result::Result<T, CardiolensError>;

/// Main error type for Cardiolens
#[derive(Debug, thiserror::Error)]
pub enum CardiolensError {
    #[error("invalid feature '{feature}': value {value} outside domain {domain}")]
    InvalidFeature {
        feature: FeatureKey,
        value: f64,
        domain: &'static str,
    },

    #[error("no rule covers feature '{feature}' value {value} (rule table gap)")]
    RuleCoverage { feature: FeatureKey, value: f64 },

    #[error("Model error: {0}")]
    Model(#[from] adapters::ModelError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] adapters::DatasetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
