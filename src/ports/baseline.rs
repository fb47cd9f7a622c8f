//! Baseline port: Trait for population reference statistics.
//!
//! Supplies the arithmetic mean observed in a reference population for a
//! continuous feature. "Unknown" is an expected answer, not an error: the
//! engine degrades to omitting the affected annotations.

use crate::domain::{BaselineStats, FeatureKey};

/// Continuous features the engine compares against population means.
pub const BASELINE_FEATURES: [FeatureKey; 4] = [
    FeatureKey::Trestbps,
    FeatureKey::Chol,
    FeatureKey::Thalach,
    FeatureKey::Oldpeak,
];

/// Trait for looking up population means.
pub trait BaselineProvider: Send + Sync {
    /// Population mean for a feature, or `None` if the source has no data
    /// for it.
    fn mean_of(&self, key: FeatureKey) -> Option<f64>;

    /// Snapshot the means for the features of interest into a
    /// [`BaselineStats`] table. Features the provider cannot answer are
    /// simply left out.
    fn snapshot(&self) -> BaselineStats {
        let mut stats = BaselineStats::new();
        for key in BASELINE_FEATURES {
            if let Some(mean) = self.mean_of(key) {
                stats.set(key, mean);
            }
        }
        stats
    }
}

impl BaselineProvider for BaselineStats {
    fn mean_of(&self, key: FeatureKey) -> Option<f64> {
        BaselineStats::mean_of(self, key)
    }
}
