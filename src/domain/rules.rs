//! Clinical annotation rules.
//!
//! The per-feature if/else chains of the original screening logic are
//! expressed here as declarative tables: each categorical feature carries an
//! ordered list of (predicate, severity, message) rows, evaluated first
//! match wins. Every value in a feature's declared domain must match a row;
//! a gap is a `RuleCoverage` bug, never a silent omission.

use crate::domain::{Annotation, BaselineStats, FeatureKey, FeatureRecord, Severity};
use crate::CardiolensError;

/// One row of a categorical rule table.
struct CategoricalRule {
    matches: fn(f64) -> bool,
    severity: Severity,
    message: &'static str,
}

/// Comparison direction for a continuous feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Values above the population mean are favorable (thalach)
    HigherIsBetter,
    /// Values below the population mean are favorable
    LowerIsBetter,
}

/// Continuous features compared against population means, in output order.
const CONTINUOUS_RULES: [(FeatureKey, Direction); 4] = [
    (FeatureKey::Trestbps, Direction::LowerIsBetter),
    (FeatureKey::Chol, Direction::LowerIsBetter),
    (FeatureKey::Thalach, Direction::HigherIsBetter),
    (FeatureKey::Oldpeak, Direction::LowerIsBetter),
];

/// Categorical rule tables, in output order.
const CATEGORICAL_RULES: [(FeatureKey, &[CategoricalRule]); 8] = [
    (
        FeatureKey::Sex,
        &[
            CategoricalRule {
                matches: |v| v == 1.0,
                severity: Severity::Caution,
                message: "Male patients carry an elevated baseline risk of heart disease; watch for early symptoms.",
            },
            CategoricalRule {
                matches: |v| v == 0.0,
                severity: Severity::Ok,
                message: "Female patients generally carry a slightly lower baseline risk.",
            },
        ],
    ),
    (
        FeatureKey::Cp,
        &[
            CategoricalRule {
                matches: |v| v == 2.0 || v == 3.0,
                severity: Severity::Warning,
                message: "Non-anginal or asymptomatic chest pain indicates symptoms that need specific attention.",
            },
            CategoricalRule {
                matches: |v| v == 1.0,
                severity: Severity::Caution,
                message: "Atypical chest pain warrants further observation.",
            },
            CategoricalRule {
                matches: |v| v == 0.0,
                severity: Severity::Ok,
                message: "Typical angina that can still be managed according to symptoms.",
            },
        ],
    ),
    (
        FeatureKey::Fbs,
        &[
            CategoricalRule {
                matches: |v| v == 1.0,
                severity: Severity::Warning,
                message: "High fasting blood sugar suggests possible diabetes or a metabolic issue; watch the diet.",
            },
            CategoricalRule {
                matches: |v| v == 0.0,
                severity: Severity::Ok,
                message: "Fasting blood sugar within normal limits.",
            },
        ],
    ),
    (
        FeatureKey::Restecg,
        &[
            CategoricalRule {
                matches: |v| v == 1.0,
                severity: Severity::Warning,
                message: "ST-T wave abnormality on the resting ECG; further medical evaluation is advised.",
            },
            CategoricalRule {
                matches: |v| v == 2.0,
                severity: Severity::Critical,
                message: "Left ventricular hypertrophy found; this is serious and must be discussed with a physician.",
            },
            CategoricalRule {
                matches: |v| v == 0.0,
                severity: Severity::Ok,
                message: "Resting ECG result is normal.",
            },
        ],
    ),
    (
        FeatureKey::Exang,
        &[
            CategoricalRule {
                matches: |v| v == 1.0,
                severity: Severity::Warning,
                message: "Chest pain during exercise is a classic sign of cardiac trouble; do not ignore it.",
            },
            CategoricalRule {
                matches: |v| v == 0.0,
                severity: Severity::Ok,
                message: "No chest pain symptoms during physical activity.",
            },
        ],
    ),
    (
        FeatureKey::Slope,
        &[
            CategoricalRule {
                matches: |v| v == 2.0,
                severity: Severity::Critical,
                message: "Downsloping ST segment; high risk, further cardiac examination is needed.",
            },
            CategoricalRule {
                matches: |v| v == 1.0,
                severity: Severity::Caution,
                message: "Flat ST segment; deserves closer observation.",
            },
            CategoricalRule {
                matches: |v| v == 0.0,
                severity: Severity::Ok,
                message: "Upsloping ST segment is the normal condition.",
            },
        ],
    ),
    (
        FeatureKey::Ca,
        &[
            CategoricalRule {
                matches: |v| v >= 2.0,
                severity: Severity::Ok,
                message: "Two or more major vessels visible; circulation appears well monitored.",
            },
            CategoricalRule {
                matches: |v| v < 2.0,
                severity: Severity::Caution,
                message: "Fewer than two major vessels visible; the fewer visible, the higher the blockage risk.",
            },
        ],
    ),
    (
        FeatureKey::Thal,
        &[
            CategoricalRule {
                matches: |v| v == 2.0,
                severity: Severity::Critical,
                message: "Thalassemia permanent defect: no blood flow to part of the heart. Very serious.",
            },
            CategoricalRule {
                matches: |v| v == 3.0,
                severity: Severity::Caution,
                message: "Thalassemia reversible defect: abnormal blood flow under exertion; needs medical care.",
            },
            CategoricalRule {
                matches: |v| v == 1.0,
                severity: Severity::Ok,
                message: "Normal blood flow.",
            },
        ],
    ),
];

/// Compare the continuous features against population means.
///
/// Features without a known mean are skipped silently; equality always
/// lands on the favorable side. Comparisons are plain `f64`, no tolerance
/// band.
#[must_use]
pub fn continuous_annotations(
    record: &FeatureRecord,
    baselines: &BaselineStats,
) -> Vec<Annotation> {
    let mut annotations = Vec::with_capacity(CONTINUOUS_RULES.len());

    for (key, direction) in CONTINUOUS_RULES {
        let Some(mean) = baselines.mean_of(key) else {
            continue;
        };
        let value = record.get(key);
        let name = key.as_str().to_uppercase();

        let (severity, message) = match direction {
            Direction::HigherIsBetter if value < mean => (
                Severity::Warning,
                format!(
                    "{name} below the population average ({value} < {mean:.1}). Improvement needed for cardiac fitness."
                ),
            ),
            Direction::HigherIsBetter => (
                Severity::Ok,
                format!(
                    "{name} at or above the population average ({value} >= {mean:.1}). Good, keep it up."
                ),
            ),
            Direction::LowerIsBetter if value > mean => (
                Severity::Warning,
                format!(
                    "{name} above the population average ({value} > {mean:.1}). Review lifestyle and consult a physician."
                ),
            ),
            Direction::LowerIsBetter => (
                Severity::Ok,
                format!(
                    "{name} at or below the population average ({value} <= {mean:.1}). Good, keep it up."
                ),
            ),
        };

        annotations.push(Annotation {
            feature_key: key,
            severity,
            message,
        });
    }

    annotations
}

/// Evaluate every categorical rule table, one annotation per feature.
///
/// # Errors
/// Returns `CardiolensError::RuleCoverage` if a value matches no row of its
/// table. Unreachable for records that pass validation.
pub fn categorical_annotations(
    record: &FeatureRecord,
) -> Result<Vec<Annotation>, CardiolensError> {
    let mut annotations = Vec::with_capacity(CATEGORICAL_RULES.len());

    for (key, rules) in CATEGORICAL_RULES {
        let value = record.get(key);
        let rule = rules
            .iter()
            .find(|r| (r.matches)(value))
            .ok_or(CardiolensError::RuleCoverage {
                feature: key,
                value,
            })?;

        annotations.push(Annotation {
            feature_key: key,
            severity: rule.severity,
            message: rule.message.to_string(),
        });
    }

    Ok(annotations)
}
