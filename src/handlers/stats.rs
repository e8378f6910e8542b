//! Service statistics and active model handlers

use axum::{extract::State, Json};

use crate::logic::model::ModelInfo;
use crate::models::StatsResponse;
use crate::AppState;

/// Analyses performed on every URL
pub const ANALYSES: &[&str] = &[
    "URL length analysis",
    "IP address host detection",
    "Suspicious word analysis",
    "HTTPS verification",
    "Domain structure analysis",
];

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        message: format!("{} - Phishing Detection", state.config.app_name),
        version: state.config.app_version.clone(),
        features: ANALYSES.to_vec(),
    })
}

pub async fn model(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.predictor.model_info().clone())
}
