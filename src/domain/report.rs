//! Risk report types.
//!
//! Represents the output of one heart-disease evaluation: the headline
//! diagnosis, the classifier's probabilities, and the ordered per-feature
//! annotations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::FeatureKey;

/// Headline diagnosis derived from the classifier's predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    /// Predicted class 0: no heart disease detected
    Normal,
    /// Predicted class 1: heart disease present
    DiseaseDetected,
}

impl Diagnosis {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal (no heart disease detected)",
            Self::DiseaseDetected => "Heart disease detected",
        }
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::DiseaseDetected => write!(f, "disease_detected"),
        }
    }
}

/// Output of the binary classifier (before interpretation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class (0 = no disease, 1 = disease present)
    pub predicted_class: u8,

    /// Class probabilities `[p_normal, p_disease]`, summing to ~1.0
    pub probabilities: [f64; 2],
}

impl PredictionResult {
    /// Create a new prediction result.
    #[must_use]
    pub fn new(predicted_class: u8, probabilities: [f64; 2]) -> Self {
        Self {
            predicted_class,
            probabilities,
        }
    }

    /// Probability of the predicted class, copied verbatim.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.probabilities[usize::from(self.predicted_class == 1)]
    }

    /// Diagnosis for the predicted class.
    #[must_use]
    pub fn diagnosis(&self) -> Diagnosis {
        if self.predicted_class == 0 {
            Diagnosis::Normal
        } else {
            Diagnosis::DiseaseDetected
        }
    }
}

/// Population means for the continuous features of interest.
///
/// Absent keys suppress the corresponding annotation; an absent table
/// suppresses all continuous annotations. Neither is an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaselineStats {
    means: BTreeMap<FeatureKey, f64>,
}

impl BaselineStats {
    /// Create an empty table (every lookup returns `None`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population mean for a feature.
    pub fn set(&mut self, key: FeatureKey, mean: f64) {
        self.means.insert(key, mean);
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: FeatureKey, mean: f64) -> Self {
        self.set(key, mean);
        self
    }

    /// Population mean for a feature, if known.
    #[must_use]
    pub fn mean_of(&self, key: FeatureKey) -> Option<f64> {
        self.means.get(&key).copied()
    }
}

/// Advisory severity attached to one feature annotation.
///
/// This is metadata for the reader, not a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Within favorable limits
    Ok,
    /// Worth observing
    Caution,
    /// Needs attention
    Warning,
    /// Serious finding, consultation advised
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Caution => write!(f, "CAUTION"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// One per-feature risk note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Feature this note refers to
    pub feature_key: FeatureKey,

    /// Advisory severity
    pub severity: Severity,

    /// Human-readable explanation
    pub message: String,
}

/// Complete result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Headline diagnosis
    pub diagnosis: Diagnosis,

    /// Probability of the predicted class
    pub confidence: f64,

    /// Class probabilities `[p_normal, p_disease]`
    pub probabilities: [f64; 2],

    /// Ordered annotations: continuous comparisons first, then the
    /// categorical rules in fixed order
    pub annotations: Vec<Annotation>,
}

impl Report {
    /// Confidence formatted for display as a percentage, two decimals.
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnosis_from_predicted_class() {
        let normal = PredictionResult::new(0, [0.9, 0.1]);
        assert_eq!(normal.diagnosis(), Diagnosis::Normal);
        assert!((normal.confidence() - 0.9).abs() < f64::EPSILON);

        let disease = PredictionResult::new(1, [0.18, 0.82]);
        assert_eq!(disease.diagnosis(), Diagnosis::DiseaseDetected);
        assert!((disease.confidence() - 0.82).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_percent_two_decimals() {
        let report = Report {
            diagnosis: Diagnosis::DiseaseDetected,
            confidence: 0.8234,
            probabilities: [0.1766, 0.8234],
            annotations: Vec::new(),
        };
        assert_eq!(report.confidence_percent(), "82.34%");
    }

    #[test]
    fn test_baseline_stats_lookup() {
        let stats = BaselineStats::new()
            .with(FeatureKey::Chol, 246.5)
            .with(FeatureKey::Thalach, 149.6);

        assert_eq!(stats.mean_of(FeatureKey::Chol), Some(246.5));
        assert_eq!(stats.mean_of(FeatureKey::Trestbps), None);
    }

    #[test]
    fn test_diagnosis_display_names() {
        assert_eq!(Diagnosis::Normal.to_string(), "normal");
        assert_eq!(Diagnosis::DiseaseDetected.to_string(), "disease_detected");
    }
}
