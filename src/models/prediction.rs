//! Prediction request/response schemas

use serde::{Deserialize, Serialize, Serializer};

use crate::logic::features::FeatureVector;
use crate::logic::Verdict;

#[derive(Debug, Deserialize)]
pub struct UrlItem {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub url: String,
    pub is_phishing: bool,
    pub confidence: f64,
    pub risk_level: String,
    #[serde(serialize_with = "serialize_features")]
    pub features: Option<FeatureVector>,
}

/// The neutral verdict carries no features and is rendered as `{}`
fn serialize_features<S: Serializer>(
    features: &Option<FeatureVector>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match features {
        Some(vector) => vector.serialize(serializer),
        None => serializer.collect_map(std::iter::empty::<(&str, f64)>()),
    }
}

impl From<Verdict> for PredictionResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            url: verdict.url,
            is_phishing: verdict.is_phishing,
            confidence: verdict.confidence,
            risk_level: verdict.risk_level.to_string(),
            features: verdict.features,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub health: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub message: String,
    pub version: String,
    pub features: Vec<&'static str>,
}
