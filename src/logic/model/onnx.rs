//! ONNX Classifier - ONNX Runtime Integration
//!
//! Loads a binary URL classifier exported to ONNX and exposes its class
//! probabilities. Expected graph contract:
//! - input: float tensor `[1, FEATURE_COUNT]` in `FEATURE_LAYOUT` order
//! - output: float probabilities `[1, 2]` (legitimate, phishing), or a single
//!   phishing probability `[1, 1]`. The output type is checked at load, so a
//!   zipmap (sequence of maps) output is rejected before serving.
//!
//! An optional sidecar `<model>.json` (`ModelMetadata`) declares the feature
//! names the model was trained on; it is checked against the layout before
//! the session is created.

use std::path::{Path, PathBuf};

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::tensor::TensorElementType;
use ort::value::Tensor;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::statistical::ProbabilityClassifier;
use super::ModelError;
use crate::logic::features::layout::validate_feature_names;
use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_VERSION};

/// Output name preferred when the sidecar doesn't name one
pub const DEFAULT_PROBABILITY_OUTPUT: &str = "probabilities";

// ============================================================================
// MODEL METADATA (sidecar)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub feature_version: Option<u8>,
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub probability_output: Option<String>,
}

impl ModelMetadata {
    pub fn sidecar_path(model_path: &Path) -> PathBuf {
        model_path.with_extension("json")
    }

    /// Read the sidecar next to `model_path`, if there is one
    pub fn load_for(model_path: &Path) -> Result<Option<Self>, ModelError> {
        let path = Self::sidecar_path(model_path);
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| ModelError::Metadata(format!("{}: {}", path.display(), e)))?;
        let metadata = serde_json::from_str(&raw)
            .map_err(|e| ModelError::Metadata(format!("{}: {}", path.display(), e)))?;

        Ok(Some(metadata))
    }

    /// The model must have been trained on this build's feature layout
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(version) = self.feature_version {
            if version != FEATURE_VERSION {
                return Err(ModelError::Metadata(format!(
                    "model trained on feature layout v{version}, extractor is v{FEATURE_VERSION}"
                )));
            }
        }
        validate_feature_names(&self.feature_names)?;
        Ok(())
    }
}

// ============================================================================
// ONNX CLASSIFIER
// ============================================================================

pub struct OnnxClassifier {
    /// `Session::run` needs exclusive access
    session: Mutex<Session>,
    probability_output: String,
    path: PathBuf,
    metadata: Option<ModelMetadata>,
}

impl OnnxClassifier {
    /// Load ONNX model from file
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        tracing::info!("Loading ONNX model from: {}", path.display());

        if !path.exists() {
            return Err(ModelError::NotFound(path.display().to_string()));
        }

        let metadata = ModelMetadata::load_for(path)?;
        if let Some(meta) = &metadata {
            meta.validate()?;
        }

        let session = Session::builder()
            .map_err(|e| ModelError::Runtime(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Runtime(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelError::Runtime(format!("Failed to load model: {}", e)))?;

        let outputs: Vec<OutputSignature> = session
            .outputs
            .iter()
            .map(|o| OutputSignature {
                name: o.name.clone(),
                element: o.output_type.tensor_type(),
                shape: o.output_type.tensor_shape().map(|s| s.iter().copied().collect()),
            })
            .collect();
        let selected = select_probability_output(&outputs, metadata.as_ref())?;
        selected.check_probabilities()?;
        let probability_output = selected.name.clone();

        tracing::info!(
            output = %probability_output,
            model_type = metadata.as_ref().and_then(|m| m.model_type.as_deref()).unwrap_or("unknown"),
            "ONNX model loaded successfully"
        );

        Ok(Self {
            session: Mutex::new(session),
            probability_output,
            path: path.to_path_buf(),
            metadata,
        })
    }

}

/// Name and declared type of one graph output.
/// `element` and `shape` are `None` for non-tensor outputs (sequences, maps).
#[derive(Debug, Clone, PartialEq)]
struct OutputSignature {
    name: String,
    element: Option<TensorElementType>,
    shape: Option<Vec<i64>>,
}

impl OutputSignature {
    /// Must be an f32 tensor whose last axis holds 1 or 2 probabilities.
    /// A dynamic (-1) last axis is accepted and checked per request.
    fn check_probabilities(&self) -> Result<(), ModelError> {
        match self.element {
            Some(TensorElementType::Float32) => {}
            Some(other) => {
                return Err(ModelError::InvalidOutput(format!(
                    "output {} has element type {:?}, expected f32",
                    self.name, other
                )))
            }
            None => {
                return Err(ModelError::InvalidOutput(format!(
                    "output {} is not a tensor (zipmap must be disabled at export)",
                    self.name
                )))
            }
        }

        match self.shape.as_deref().and_then(|dims| dims.last()) {
            Some(1) | Some(2) | Some(-1) => Ok(()),
            Some(n) => Err(ModelError::InvalidOutput(format!(
                "output {} has {} classes, expected 1 or 2",
                self.name, n
            ))),
            None => Err(ModelError::InvalidOutput(format!(
                "output {} is a scalar, expected [batch, classes]",
                self.name
            ))),
        }
    }
}

/// Pick the probability output: sidecar name, then `probabilities`, then the last output
fn select_probability_output<'a>(
    outputs: &'a [OutputSignature],
    metadata: Option<&ModelMetadata>,
) -> Result<&'a OutputSignature, ModelError> {
    if let Some(wanted) = metadata.and_then(|m| m.probability_output.as_ref()) {
        return outputs.iter().find(|o| &o.name == wanted).ok_or_else(|| {
            let names: Vec<&str> = outputs.iter().map(|o| o.name.as_str()).collect();
            ModelError::Metadata(format!("output {wanted:?} not in model outputs {names:?}"))
        });
    }

    outputs
        .iter()
        .find(|o| o.name == DEFAULT_PROBABILITY_OUTPUT)
        .or_else(|| outputs.last())
        .ok_or_else(|| ModelError::InvalidOutput("model defines no outputs".to_string()))
}

/// Normalize raw probability data to `[p(legitimate), p(phishing)]`
fn to_class_probabilities(data: &[f32]) -> Result<[f64; 2], ModelError> {
    match *data {
        [phishing] => Ok([1.0 - phishing as f64, phishing as f64]),
        [legit, phishing] => Ok([legit as f64, phishing as f64]),
        _ => Err(ModelError::InvalidOutput(format!(
            "expected 1 or 2 probabilities, got {}",
            data.len()
        ))),
    }
}

impl ProbabilityClassifier for OnnxClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], ModelError> {
        let start_time = std::time::Instant::now();

        let input_array =
            Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_f32_array().to_vec())
                .map_err(|e| ModelError::Runtime(format!("Array error: {}", e)))?;

        let input_tensor = Tensor::from_array(input_array)
            .map_err(|e| ModelError::Runtime(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Runtime(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.probability_output)
            .ok_or_else(|| ModelError::InvalidOutput(format!("missing output {}", self.probability_output)))?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::InvalidOutput(format!("Extract error: {}", e)))?;

        let probabilities = to_class_probabilities(data)?;

        tracing::trace!(
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "ONNX inference complete"
        );

        Ok(probabilities)
    }
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("path", &self.path)
            .field("probability_output", &self.probability_output)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
