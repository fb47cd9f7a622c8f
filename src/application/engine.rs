//! Risk annotation engine: turns classifier output into a risk report.
//!
//! The engine is a pure, stateless, single-pass evaluation: one record plus
//! one prediction plus optional population baselines in, one report out.
//! [`RiskService`] wraps it with the collaborator plumbing (validation,
//! classification, baseline snapshot).

use std::sync::Arc;

use crate::domain::{rules, BaselineStats, FeatureRecord, PredictionResult, Report};
use crate::ports::{BaselineProvider, Classifier};
use crate::CardiolensError;

/// Combine one prediction with per-feature annotations into a report.
///
/// The record must already satisfy its declared domains (see
/// [`FeatureRecord::validate`]); the prediction is taken verbatim, with the
/// diagnosis derived solely from the predicted class. When `baselines` is
/// `None` the continuous annotations are omitted, which is a degraded but
/// successful outcome.
///
/// Annotation order is fixed: continuous comparisons (trestbps, chol,
/// thalach, oldpeak) first, then the categorical rules (sex, cp, fbs,
/// restecg, exang, slope, ca, thal).
///
/// # Errors
/// Returns `CardiolensError::RuleCoverage` if a categorical value matches no
/// rule row. Unreachable for validated records.
pub fn evaluate(
    record: &FeatureRecord,
    prediction: PredictionResult,
    baselines: Option<&BaselineStats>,
) -> Result<Report, CardiolensError> {
    let mut annotations = match baselines {
        Some(stats) => rules::continuous_annotations(record, stats),
        None => Vec::new(),
    };
    annotations.extend(rules::categorical_annotations(record)?);

    Ok(Report {
        diagnosis: prediction.diagnosis(),
        confidence: prediction.confidence(),
        probabilities: prediction.probabilities,
        annotations,
    })
}

/// Service for producing risk reports from clinical records.
///
/// Holds the two external collaborators: the trained classifier and,
/// optionally, the population baseline source. Both are read-only after
/// construction, so independent diagnoses may run concurrently without
/// coordination.
pub struct RiskService<C, B>
where
    C: Classifier,
    B: BaselineProvider,
{
    classifier: Arc<C>,
    baselines: Option<Arc<B>>,
}

impl<C, B> RiskService<C, B>
where
    C: Classifier,
    B: BaselineProvider,
{
    /// Create a service with both collaborators.
    pub fn new(classifier: Arc<C>, baselines: Option<Arc<B>>) -> Self {
        if baselines.is_none() {
            tracing::warn!("No baseline source; continuous annotations will be omitted");
        }
        Self {
            classifier,
            baselines,
        }
    }

    /// Run one diagnosis end-to-end.
    ///
    /// Pipeline:
    /// 1. Validate the record against its declared domains
    /// 2. Classify (single call, no retry)
    /// 3. Snapshot baselines and evaluate the annotation rules
    ///
    /// # Errors
    /// Returns `InvalidFeature` before the classifier is ever invoked if the
    /// record is out of domain; propagates classifier errors unchanged.
    pub fn diagnose(&self, record: &FeatureRecord) -> Result<Report, CardiolensError> {
        record.validate()?;

        tracing::debug!("Classifying record...");
        let prediction = self.classifier.classify(record)?;

        let stats = self.baselines.as_deref().map(BaselineProvider::snapshot);
        let report = evaluate(record, prediction, stats.as_ref())?;

        tracing::info!(
            "Diagnosis complete: {}, confidence {}, {} annotations",
            report.diagnosis,
            report.confidence_percent(),
            report.annotations.len()
        );

        Ok(report)
    }
}
