//! Classifier port: Trait for the external prediction service.
//!
//! This trait abstracts the trained model artifact from the annotation
//! logic. Implementations are pure and deterministic for a given artifact;
//! the engine makes exactly one call per evaluation, with no retry and no
//! caching.

use crate::adapters::ModelError;
use crate::domain::{FeatureRecord, PredictionResult};

/// Trait for binary heart-disease classification.
///
/// Callers must validate the record against its declared domains before
/// calling; implementations may assume a well-formed 13-feature input in
/// canonical order.
pub trait Classifier: Send + Sync {
    /// Classify one record.
    ///
    /// Returns the predicted class and the class probability pair
    /// `[p_normal, p_disease]` summing to ~1.0.
    ///
    /// # Errors
    /// Returns `ModelError` if the artifact and record disagree on shape.
    fn classify(&self, record: &FeatureRecord) -> Result<PredictionResult, ModelError>;
}
