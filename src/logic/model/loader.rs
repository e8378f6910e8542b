//! Model selection at startup.
//!
//! Never fails: a missing or unusable artifact falls back to the rule-based model.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::onnx::OnnxClassifier;
use super::rules::RuleBasedModel;
use super::statistical::StatisticalModel;
use super::{ModelError, ModelKind, ScoringModel};
use crate::logic::features::layout::{layout_hash, FEATURE_VERSION};

/// Describes the active model (for logs and the model endpoint)
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub kind: ModelKind,
    /// Artifact path, when a statistical model was loaded from disk
    pub artifact: Option<String>,
    /// Why the artifact was not used, when falling back
    pub fallback_reason: Option<String>,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub loaded_at: DateTime<Utc>,
}

impl ModelInfo {
    pub fn new(kind: ModelKind) -> Self {
        Self {
            kind,
            artifact: None,
            fallback_reason: None,
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            loaded_at: Utc::now(),
        }
    }
}

/// The selected model together with its description
#[derive(Clone)]
pub struct LoadedModel {
    pub model: Arc<dyn ScoringModel>,
    pub info: ModelInfo,
}

impl LoadedModel {
    pub fn rule_based() -> Self {
        Self {
            model: Arc::new(RuleBasedModel::new()),
            info: ModelInfo::new(ModelKind::RuleBased),
        }
    }
}

/// Load the statistical model at `path`, or fall back to the rule-based model
pub fn load_scoring_model(path: &Path) -> LoadedModel {
    match OnnxClassifier::load(path) {
        Ok(classifier) => {
            let mut info = ModelInfo::new(ModelKind::Statistical);
            info.artifact = Some(path.display().to_string());
            LoadedModel {
                model: Arc::new(StatisticalModel::new(classifier)),
                info,
            }
        }
        Err(e) => {
            match &e {
                ModelError::NotFound(_) => {
                    tracing::info!("Model not found at {}, using rule-based model", path.display())
                }
                _ => tracing::warn!(error = %e, "Failed to load model, using rule-based model"),
            }
            let mut fallback = LoadedModel::rule_based();
            fallback.info.fallback_reason = Some(e.to_string());
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_scoring_model(&dir.path().join("missing.onnx"));

        assert_eq!(loaded.model.kind(), ModelKind::RuleBased);
        assert_eq!(loaded.info.kind, ModelKind::RuleBased);
        assert!(loaded.info.artifact.is_none());
        assert!(loaded.info.fallback_reason.unwrap().contains("not found"));
    }

    #[test]
    fn test_bad_sidecar_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("model.onnx");
        std::fs::write(&model_path, b"").unwrap();
        std::fs::write(dir.path().join("model.json"), r#"{"feature_names": ["url_length"]}"#).unwrap();

        let loaded = load_scoring_model(&model_path);
        assert_eq!(loaded.model.kind(), ModelKind::RuleBased);
        assert!(loaded.info.fallback_reason.is_some());
    }
}
