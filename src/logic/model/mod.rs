//! Model Module - URL Scoring Engine
//!
//! One capability (`ScoringModel::predict`), two interchangeable variants:
//! - `StatisticalModel`: wraps a trained binary classifier (ONNX artifact)
//! - `RuleBasedModel`: deterministic weighted-rule fallback, always available
//!
//! The variant is chosen once by `loader::load_scoring_model`.

pub mod loader;
pub mod onnx;
pub mod rules;
pub mod statistical;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::features::{FeatureVector, LayoutMismatchError};

pub use loader::{load_scoring_model, LoadedModel, ModelInfo};
pub use onnx::{ModelMetadata, OnnxClassifier};
pub use rules::RuleBasedModel;
pub use statistical::{ProbabilityClassifier, StatisticalModel};

// ============================================================================
// SCORE
// ============================================================================

/// Output of one model inference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub is_phishing: bool,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Which model variant produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Statistical,
    RuleBased,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Statistical => "statistical",
            ModelKind::RuleBased => "rule_based",
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not found: {0}")]
    NotFound(String),

    #[error("model metadata error: {0}")]
    Metadata(String),

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error("inference runtime error: {0}")]
    Runtime(String),

    #[error("invalid model output: {0}")]
    InvalidOutput(String),
}

// ============================================================================
// SCORING MODEL TRAIT
// ============================================================================

/// Binary classification with confidence over a feature vector.
///
/// Implementations are read-only after construction and shared across
/// concurrent predictions.
pub trait ScoringModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Score, ModelError>;

    fn kind(&self) -> ModelKind;
}
