//! Phishing Predictor - pipeline orchestration
//!
//! URL → features → model score → risk level → `Verdict`.
//!
//! Fail-open: an inference fault (error or panic inside the model) yields the
//! neutral verdict instead of propagating. The model is chosen once at
//! construction and shared read-only across concurrent calls.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use crate::logic::features::{FeatureExtractor, FeatureVector, UrlFeatureExtractor};
use crate::logic::model::{load_scoring_model, LoadedModel, ModelInfo, ModelKind, ScoringModel};
use crate::logic::risk::{classify, RiskLevel};

/// Confidence reported by the neutral verdict
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

// ============================================================================
// VERDICT
// ============================================================================

/// How a verdict was produced. Internal only, not part of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictSource {
    Statistical,
    RuleBased,
    /// Neutral verdict after an inference fault
    Fallback,
}

/// Result of classifying one URL
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub url: String,
    pub is_phishing: bool,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    /// `None` only for the neutral fallback verdict
    pub features: Option<FeatureVector>,
    pub source: VerdictSource,
}

impl Verdict {
    /// Fixed verdict returned when inference fails
    pub fn neutral(url: &str) -> Self {
        Self {
            url: url.to_string(),
            is_phishing: false,
            confidence: NEUTRAL_CONFIDENCE,
            risk_level: RiskLevel::Uncertain,
            features: None,
            source: VerdictSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == VerdictSource::Fallback
    }
}

// ============================================================================
// PREDICTOR
// ============================================================================

pub struct PhishingPredictor {
    extractor: Box<dyn FeatureExtractor>,
    model: Arc<dyn ScoringModel>,
    info: ModelInfo,
}

impl PhishingPredictor {
    /// Use an already constructed model
    pub fn new(model: Arc<dyn ScoringModel>) -> Self {
        let info = ModelInfo::new(model.kind());
        Self::from_loaded(LoadedModel { model, info })
    }

    pub fn from_loaded(loaded: LoadedModel) -> Self {
        Self {
            extractor: Box::new(UrlFeatureExtractor::new()),
            model: loaded.model,
            info: loaded.info,
        }
    }

    /// Statistical model from `model_path` if loadable, rule-based otherwise
    pub fn from_model_path(model_path: &Path) -> Self {
        let loaded = load_scoring_model(model_path);
        tracing::info!(
            model = %loaded.info.kind,
            artifact = loaded.info.artifact.as_deref().unwrap_or("-"),
            "Phishing predictor ready"
        );
        Self::from_loaded(loaded)
    }

    pub fn rule_based() -> Self {
        Self::from_loaded(LoadedModel::rule_based())
    }

    /// Replace the feature extractor
    pub fn with_extractor(mut self, extractor: impl FeatureExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn model_info(&self) -> &ModelInfo {
        &self.info
    }

    /// Classify an already normalized URL. Never fails.
    pub fn predict(&self, url: &str) -> Verdict {
        let features = self.extractor.extract(url);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.model.predict(&features)));
        let score = match outcome {
            Ok(Ok(score)) => score,
            Ok(Err(e)) => {
                tracing::warn!(url, error = %e, "Inference failed, returning neutral verdict");
                return Verdict::neutral(url);
            }
            Err(_) => {
                tracing::error!(url, "Model panicked during inference, returning neutral verdict");
                return Verdict::neutral(url);
            }
        };

        let source = match self.model.kind() {
            ModelKind::Statistical => VerdictSource::Statistical,
            ModelKind::RuleBased => VerdictSource::RuleBased,
        };

        Verdict {
            url: url.to_string(),
            is_phishing: score.is_phishing,
            confidence: score.confidence,
            risk_level: classify(score.is_phishing, score.confidence),
            features: Some(features),
            source,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
