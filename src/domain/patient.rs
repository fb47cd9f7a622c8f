//! Patient record types for heart-disease risk prediction.
//!
//! Based on the UCI Statlog (Heart) dataset features.

use serde::{Deserialize, Serialize};

use crate::CardiolensError;

/// The 13 clinical features, in the canonical order the classifier was
/// trained on. Reordering silently corrupts predictions, so the order is
/// part of the contract and fixed here once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKey {
    Age,
    Sex,
    Cp,
    Trestbps,
    Chol,
    Fbs,
    Restecg,
    Thalach,
    Exang,
    Oldpeak,
    Slope,
    Ca,
    Thal,
}

impl FeatureKey {
    /// All 13 keys in canonical (training) order.
    pub const ALL: [FeatureKey; 13] = [
        FeatureKey::Age,
        FeatureKey::Sex,
        FeatureKey::Cp,
        FeatureKey::Trestbps,
        FeatureKey::Chol,
        FeatureKey::Fbs,
        FeatureKey::Restecg,
        FeatureKey::Thalach,
        FeatureKey::Exang,
        FeatureKey::Oldpeak,
        FeatureKey::Slope,
        FeatureKey::Ca,
        FeatureKey::Thal,
    ];

    /// Stable lowercase name, matching the dataset column headers.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Sex => "sex",
            Self::Cp => "cp",
            Self::Trestbps => "trestbps",
            Self::Chol => "chol",
            Self::Fbs => "fbs",
            Self::Restecg => "restecg",
            Self::Thalach => "thalach",
            Self::Exang => "exang",
            Self::Oldpeak => "oldpeak",
            Self::Slope => "slope",
            Self::Ca => "ca",
            Self::Thal => "thal",
        }
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One clinical record in the Statlog heart-disease schema.
///
/// Fields are `f64` to match the classifier's input vector; categorical
/// features carry small integer codes and are validated as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FeatureRecord {
    /// Age in years (1-120)
    pub age: f64,

    /// Sex: 0 = female, 1 = male
    pub sex: f64,

    /// Chest pain type: 0 = typical angina, 1 = atypical, 2 = non-anginal,
    /// 3 = asymptomatic
    pub cp: f64,

    /// Resting blood pressure in mmHg (80-200)
    pub trestbps: f64,

    /// Serum cholesterol in mg/dl (100-600)
    pub chol: f64,

    /// Fasting blood sugar > 120 mg/dl: 0 = no, 1 = yes
    pub fbs: f64,

    /// Resting ECG: 0 = normal, 1 = ST-T abnormality, 2 = LV hypertrophy
    pub restecg: f64,

    /// Maximum heart rate achieved (60-220)
    pub thalach: f64,

    /// Exercise-induced angina: 0 = no, 1 = yes
    pub exang: f64,

    /// ST depression induced by exercise (0.0-6.2)
    pub oldpeak: f64,

    /// Slope of peak-exercise ST segment: 0 = upsloping, 1 = flat,
    /// 2 = downsloping
    pub slope: f64,

    /// Number of major vessels visible under fluoroscopy (0-3)
    pub ca: f64,

    /// Thalassemia status: 1 = normal, 2 = permanent defect,
    /// 3 = reversible defect
    pub thal: f64,
}

fn int_in_range(v: f64, lo: f64, hi: f64) -> bool {
    v.fract() == 0.0 && (lo..=hi).contains(&v)
}

fn in_codes(v: f64, codes: &[f64]) -> bool {
    codes.contains(&v)
}

impl FeatureRecord {
    /// Value of a single feature by key.
    #[must_use]
    pub fn get(&self, key: FeatureKey) -> f64 {
        match key {
            FeatureKey::Age => self.age,
            FeatureKey::Sex => self.sex,
            FeatureKey::Cp => self.cp,
            FeatureKey::Trestbps => self.trestbps,
            FeatureKey::Chol => self.chol,
            FeatureKey::Fbs => self.fbs,
            FeatureKey::Restecg => self.restecg,
            FeatureKey::Thalach => self.thalach,
            FeatureKey::Exang => self.exang,
            FeatureKey::Oldpeak => self.oldpeak,
            FeatureKey::Slope => self.slope,
            FeatureKey::Ca => self.ca,
            FeatureKey::Thal => self.thal,
        }
    }

    /// Convert the record to a vector in canonical training order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        FeatureKey::ALL.iter().map(|&k| self.get(k)).collect()
    }

    /// Create a record from a vector in canonical training order.
    ///
    /// # Errors
    /// Returns `ModelError` via `InvalidFeature` if the length is not 13.
    pub fn from_vec(v: &[f64]) -> Result<Self, String> {
        if v.len() != 13 {
            return Err(format!("Expected 13 features, got {}", v.len()));
        }

        Ok(Self {
            age: v[0],
            sex: v[1],
            cp: v[2],
            trestbps: v[3],
            chol: v[4],
            fbs: v[5],
            restecg: v[6],
            thalach: v[7],
            exang: v[8],
            oldpeak: v[9],
            slope: v[10],
            ca: v[11],
            thal: v[12],
        })
    }

    /// Domain description for a feature, used in validation errors.
    #[must_use]
    pub fn domain_of(key: FeatureKey) -> &'static str {
        match key {
            FeatureKey::Age => "integer [1, 120]",
            FeatureKey::Sex => "{0, 1}",
            FeatureKey::Cp => "{0, 1, 2, 3}",
            FeatureKey::Trestbps => "integer [80, 200]",
            FeatureKey::Chol => "integer [100, 600]",
            FeatureKey::Fbs => "{0, 1}",
            FeatureKey::Restecg => "{0, 1, 2}",
            FeatureKey::Thalach => "integer [60, 220]",
            FeatureKey::Exang => "{0, 1}",
            FeatureKey::Oldpeak => "[0.0, 6.2]",
            FeatureKey::Slope => "{0, 1, 2}",
            FeatureKey::Ca => "{0, 1, 2, 3}",
            FeatureKey::Thal => "{1, 2, 3}",
        }
    }

    fn in_domain(key: FeatureKey, v: f64) -> bool {
        match key {
            FeatureKey::Age => int_in_range(v, 1.0, 120.0),
            FeatureKey::Sex | FeatureKey::Fbs | FeatureKey::Exang => in_codes(v, &[0.0, 1.0]),
            FeatureKey::Cp | FeatureKey::Ca => in_codes(v, &[0.0, 1.0, 2.0, 3.0]),
            FeatureKey::Trestbps => int_in_range(v, 80.0, 200.0),
            FeatureKey::Chol => int_in_range(v, 100.0, 600.0),
            FeatureKey::Restecg | FeatureKey::Slope => in_codes(v, &[0.0, 1.0, 2.0]),
            FeatureKey::Thalach => int_in_range(v, 60.0, 220.0),
            FeatureKey::Oldpeak => (0.0..=6.2).contains(&v),
            FeatureKey::Thal => in_codes(v, &[1.0, 2.0, 3.0]),
        }
    }

    /// Validate every feature against its declared domain, in canonical
    /// order. The first violation is reported with the offending key and
    /// value; the classifier must never be called with an invalid record.
    ///
    /// # Errors
    /// Returns `CardiolensError::InvalidFeature` naming the first
    /// out-of-domain feature.
    pub fn validate(&self) -> Result<(), CardiolensError> {
        for key in FeatureKey::ALL {
            let value = self.get(key);
            if !value.is_finite() || !Self::in_domain(key, value) {
                return Err(CardiolensError::InvalidFeature {
                    feature: key,
                    value,
                    domain: Self::domain_of(key),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> FeatureRecord {
        FeatureRecord {
            age: 50.0,
            sex: 1.0,
            cp: 0.0,
            trestbps: 120.0,
            chol: 200.0,
            fbs: 0.0,
            restecg: 0.0,
            thalach: 150.0,
            exang: 0.0,
            oldpeak: 1.0,
            slope: 0.0,
            ca: 0.0,
            thal: 1.0,
        }
    }

    #[test]
    fn test_to_vec_canonical_order() {
        let vec = valid_record().to_vec();
        assert_eq!(vec.len(), 13);
        assert!((vec[0] - 50.0).abs() < f64::EPSILON); // age first
        assert!((vec[9] - 1.0).abs() < f64::EPSILON); // oldpeak tenth
        assert!((vec[12] - 1.0).abs() < f64::EPSILON); // thal last
    }

    #[test]
    fn test_from_vec_round_trips() {
        let record = valid_record();
        let back = FeatureRecord::from_vec(&record.to_vec()).expect("Should parse");
        assert_eq!(record, back);

        assert!(FeatureRecord::from_vec(&[1.0; 12]).is_err());
        assert!(FeatureRecord::from_vec(&[1.0; 14]).is_err());
    }

    #[test]
    fn test_validation_accepts_valid_record() {
        assert!(valid_record().validate().is_ok());
    }

    #[test]
    fn test_validation_names_first_offending_key() {
        let mut record = valid_record();
        record.cp = 4.0;
        record.thal = 0.0;

        // cp comes before thal in canonical order
        match record.validate() {
            Err(CardiolensError::InvalidFeature { feature, value, .. }) => {
                assert_eq!(feature, FeatureKey::Cp);
                assert!((value - 4.0).abs() < f64::EPSILON);
            }
            other => panic!("Expected InvalidFeature, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_fractional_integer_features() {
        let mut record = valid_record();
        record.trestbps = 120.5;
        assert!(record.validate().is_err());

        // oldpeak is real-valued, fractional is fine
        let mut record = valid_record();
        record.oldpeak = 1.3;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_finite() {
        let mut record = valid_record();
        record.chol = f64::NAN;
        assert!(record.validate().is_err());
    }
}
