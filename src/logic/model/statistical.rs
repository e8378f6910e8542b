//! Statistical Model
//!
//! Adapts any binary classifier with class-probability output to the
//! `ScoringModel` capability: label = argmax class, confidence = max probability.

use super::{ModelError, ModelKind, Score, ScoringModel};
use crate::logic::features::FeatureVector;

/// Class-probability output of a trained binary classifier.
///
/// Returns `[p(legitimate), p(phishing)]`.
pub trait ProbabilityClassifier: Send + Sync {
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], ModelError>;
}

pub struct StatisticalModel {
    classifier: Box<dyn ProbabilityClassifier>,
}

impl StatisticalModel {
    pub fn new(classifier: impl ProbabilityClassifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
        }
    }
}

impl ScoringModel for StatisticalModel {
    fn predict(&self, features: &FeatureVector) -> Result<Score, ModelError> {
        let [legit, phishing] = self.classifier.predict_proba(features)?;

        for p in [legit, phishing] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ModelError::InvalidOutput(format!(
                    "class probability out of range: {p}"
                )));
            }
        }

        // Ties go to class 0, like argmax
        Ok(Score {
            is_phishing: phishing > legit,
            confidence: legit.max(phishing),
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Statistical
    }
}

impl std::fmt::Debug for StatisticalModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticalModel").finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
