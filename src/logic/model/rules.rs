//! Rule-Based Model
//!
//! Weighted-sum heuristic used whenever no trained model is available.
//! Pure and deterministic: the reference behavior for the pipeline.

use super::{ModelError, ModelKind, Score, ScoringModel};
use crate::logic::features::layout::index;
use crate::logic::features::FeatureVector;

// ============================================================================
// WEIGHTS
// ============================================================================

pub const IP_HOST_WEIGHT: f64 = 0.3;
pub const SUSPICIOUS_WORDS_WEIGHT: f64 = 0.2;
pub const LONG_URL_WEIGHT: f64 = 0.1;
pub const NO_HTTPS_WEIGHT: f64 = 0.1;
pub const SUSPICIOUS_CHARS_WEIGHT: f64 = 0.2;

/// URLs longer than this many characters score `LONG_URL_WEIGHT`
pub const LONG_URL_THRESHOLD: f64 = 100.0;

/// Ratio features above this score their weight
pub const RATIO_THRESHOLD: f64 = 0.5;

/// Scores above this are phishing
pub const DECISION_BOUNDARY: f64 = 0.5;

/// Confidence never reaches certainty
pub const MAX_CONFIDENCE: f64 = 0.95;

// ============================================================================
// MODEL
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedModel;

impl RuleBasedModel {
    pub fn new() -> Self {
        Self
    }

    /// Raw weighted score before thresholding
    pub fn score(features: &FeatureVector) -> f64 {
        let v = features.as_array();
        let mut score = 0.0;

        if v[index::HAS_IP] > 0.0 {
            score += IP_HOST_WEIGHT;
        }
        if v[index::HAS_SUSPICIOUS_WORDS] > RATIO_THRESHOLD {
            score += SUSPICIOUS_WORDS_WEIGHT;
        }
        if v[index::URL_LENGTH] > LONG_URL_THRESHOLD {
            score += LONG_URL_WEIGHT;
        }
        if v[index::HAS_HTTPS] == 0.0 {
            score += NO_HTTPS_WEIGHT;
        }
        if v[index::NUM_SUSPICIOUS_CHARS] > RATIO_THRESHOLD {
            score += SUSPICIOUS_CHARS_WEIGHT;
        }

        score
    }

    /// Label and confidence from a raw score.
    /// Confidence is the scaled distance from the decision boundary.
    pub fn decide(score: f64) -> Score {
        Score {
            is_phishing: score > DECISION_BOUNDARY,
            confidence: ((score - DECISION_BOUNDARY).abs() * 2.0).min(MAX_CONFIDENCE),
        }
    }
}

impl ScoringModel for RuleBasedModel {
    fn predict(&self, features: &FeatureVector) -> Result<Score, ModelError> {
        Ok(Self::decide(Self::score(features)))
    }

    fn kind(&self) -> ModelKind {
        ModelKind::RuleBased
    }
}

// ============================================================================
// TESTS
// ============================================================================
