//! Gaussian naive-Bayes classifier adapter.
//!
//! Loads a trained binary model from a JSON artifact exported at training
//! time (class priors, per-class feature means and variances) and performs
//! the standard log-space inference. The artifact is read once at startup
//! and treated as immutable afterward.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureKey, FeatureRecord, PredictionResult};
use crate::ports::Classifier;

/// Errors from loading or applying the model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model artifact: {0}")]
    Read(String),

    #[error("Malformed model artifact: {0}")]
    Malformed(String),
}

/// Trained Gaussian naive-Bayes parameters, as exported to JSON.
///
/// `theta[c][i]` and `var[c][i]` are the mean and variance of feature `i`
/// under class `c` (0 = no disease, 1 = disease present).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedNbModel {
    pub feature_names: Vec<String>,
    pub class_prior: [f64; 2],
    pub theta: [Vec<f64>; 2],
    pub var: [Vec<f64>; 2],
}

/// Gaussian naive-Bayes binary classifier.
#[derive(Debug, Clone)]
pub struct GaussianNb {
    model: ExportedNbModel,
}

impl GaussianNb {
    /// Load the model from a JSON artifact file.
    ///
    /// # Errors
    /// Returns `ModelError::Read` if the file cannot be read and
    /// `ModelError::Malformed` if the parameters are inconsistent.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Read(format!("{}: {e}", path.display())))?;
        let model: ExportedNbModel =
            serde_json::from_str(&content).map_err(|e| ModelError::Malformed(e.to_string()))?;

        let nb = Self::from_model(model)?;
        tracing::info!(
            "Loaded naive-Bayes model from {} ({} features)",
            path.display(),
            nb.model.feature_names.len()
        );
        Ok(nb)
    }

    /// Build the classifier from already-parsed parameters.
    ///
    /// # Errors
    /// Returns `ModelError::Malformed` if the parameters are inconsistent
    /// with the 13-feature Statlog contract.
    pub fn from_model(model: ExportedNbModel) -> Result<Self, ModelError> {
        let n = model.feature_names.len();
        if n != FeatureKey::ALL.len() {
            return Err(ModelError::Malformed(format!(
                "Expected {} features, artifact has {n}",
                FeatureKey::ALL.len()
            )));
        }
        for (name, key) in model.feature_names.iter().zip(FeatureKey::ALL) {
            if name != key.as_str() {
                return Err(ModelError::Malformed(format!(
                    "Feature order mismatch: artifact has '{name}' where '{key}' was trained"
                )));
            }
        }
        for class in 0..2 {
            if model.theta[class].len() != n || model.var[class].len() != n {
                return Err(ModelError::Malformed(
                    "theta/var lengths do not match feature_names".to_string(),
                ));
            }
            if model.var[class].iter().any(|&v| v <= 0.0 || !v.is_finite()) {
                return Err(ModelError::Malformed(
                    "variances must be finite and positive".to_string(),
                ));
            }
        }
        let prior_sum: f64 = model.class_prior.iter().sum();
        if model.class_prior.iter().any(|&p| p <= 0.0) || (prior_sum - 1.0).abs() > 1e-6 {
            return Err(ModelError::Malformed(format!(
                "class priors must be positive and sum to 1.0, got {:?}",
                model.class_prior
            )));
        }

        Ok(Self { model })
    }

    /// Joint log-likelihood of the feature vector under one class.
    fn log_joint(&self, class: usize, x: &[f64]) -> f64 {
        const LN_2PI: f64 = 1.837_877_066_409_345_4;

        let mut log_prob = self.model.class_prior[class].ln();
        for (i, &value) in x.iter().enumerate() {
            let mean = self.model.theta[class][i];
            let var = self.model.var[class][i];
            let diff = value - mean;
            log_prob += -0.5 * (LN_2PI + var.ln()) - diff * diff / (2.0 * var);
        }
        log_prob
    }
}

impl Classifier for GaussianNb {
    fn classify(&self, record: &FeatureRecord) -> Result<PredictionResult, ModelError> {
        let x = record.to_vec();
        let log_joint = [self.log_joint(0, &x), self.log_joint(1, &x)];

        // Normalize in log space to avoid underflow on the joint products.
        let max = log_joint[0].max(log_joint[1]);
        let exp = [(log_joint[0] - max).exp(), (log_joint[1] - max).exp()];
        let total = exp[0] + exp[1];
        let probabilities = [exp[0] / total, exp[1] / total];

        // Ties resolve to class 0, matching argmax over [p0, p1].
        let predicted_class = u8::from(probabilities[1] > probabilities[0]);

        Ok(PredictionResult::new(predicted_class, probabilities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_model() -> ExportedNbModel {
        // Two well-separated classes over the 13 Statlog features. Means are
        // loosely modeled on the dataset's healthy/diseased cohorts.
        let healthy = vec![
            52.0, 0.6, 1.0, 129.0, 244.0, 0.1, 0.5, 158.0, 0.1, 0.6, 0.4, 0.3, 1.3,
        ];
        let diseased = vec![
            56.0, 0.8, 2.2, 134.0, 256.0, 0.2, 0.6, 139.0, 0.5, 1.6, 1.0, 1.1, 2.4,
        ];
        let spread: Vec<f64> = vec![
            80.0, 0.25, 0.9, 300.0, 2600.0, 0.12, 0.3, 500.0, 0.2, 1.2, 0.35, 0.9, 0.7,
        ];

        ExportedNbModel {
            feature_names: FeatureKey::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            class_prior: [0.55, 0.45],
            theta: [healthy, diseased],
            var: [spread.clone(), spread],
        }
    }

    fn record_from(v: &[f64]) -> FeatureRecord {
        FeatureRecord::from_vec(v).expect("13 features")
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let nb = GaussianNb::from_model(test_model()).expect("Should build");
        let record = record_from(&[
            50.0, 1.0, 0.0, 120.0, 200.0, 0.0, 0.0, 150.0, 0.0, 1.0, 0.0, 0.0, 1.0,
        ]);

        let result = nb.classify(&record).expect("Should classify");
        let sum: f64 = result.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(result.predicted_class <= 1);
    }

    #[test]
    fn test_classifies_toward_nearer_cohort() {
        let nb = GaussianNb::from_model(test_model()).expect("Should build");

        // Sits on the healthy cohort means
        let healthy = record_from(&[
            52.0, 1.0, 1.0, 129.0, 244.0, 0.0, 0.0, 158.0, 0.0, 0.6, 0.0, 0.0, 1.0,
        ]);
        assert_eq!(nb.classify(&healthy).expect("classify").predicted_class, 0);

        // Sits on the diseased cohort means
        let diseased = record_from(&[
            56.0, 1.0, 2.0, 134.0, 256.0, 0.0, 1.0, 139.0, 1.0, 1.6, 1.0, 1.0, 2.0,
        ]);
        assert_eq!(nb.classify(&diseased).expect("classify").predicted_class, 1);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let nb = GaussianNb::from_model(test_model()).expect("Should build");
        let record = record_from(&[
            50.0, 1.0, 0.0, 120.0, 200.0, 0.0, 0.0, 150.0, 0.0, 1.0, 0.0, 0.0, 1.0,
        ]);

        let a = nb.classify(&record).expect("classify");
        let b = nb.classify(&record).expect("classify");
        assert_eq!(a, b);
    }

    #[test]
    fn test_load_from_json_artifact() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        let path = dir.path().join("model.json");
        let json = serde_json::to_string(&test_model()).expect("serialize model");
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(json.as_bytes()).expect("write model");

        let nb = GaussianNb::load(&path).expect("Should load");
        assert_eq!(nb.model.feature_names.len(), 13);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = GaussianNb::load(Path::new("no/such/model.json")).expect_err("must fail");
        assert!(matches!(err, ModelError::Read(_)));
    }

    #[test]
    fn test_rejects_inconsistent_parameters() {
        let mut model = test_model();
        model.theta[0].pop();
        assert!(matches!(
            GaussianNb::from_model(model),
            Err(ModelError::Malformed(_))
        ));

        let mut model = test_model();
        model.var[1][3] = 0.0;
        assert!(matches!(
            GaussianNb::from_model(model),
            Err(ModelError::Malformed(_))
        ));

        let mut model = test_model();
        model.feature_names.swap(0, 1);
        assert!(matches!(
            GaussianNb::from_model(model),
            Err(ModelError::Malformed(_))
        ));

        let mut model = test_model();
        model.class_prior = [0.9, 0.2];
        assert!(matches!(
            GaussianNb::from_model(model),
            Err(ModelError::Malformed(_))
        ));
    }
}
