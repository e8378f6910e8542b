//! URL prediction handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::models::{PredictionResponse, UrlItem};
use crate::{AppError, AppResult, AppState};

/// Trim and prepend `http://` when no http(s) scheme is given.
/// Returns `None` for blank input.
pub fn normalize_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_string())
    } else {
        Some(format!("http://{url}"))
    }
}

/// Analyze a URL and return the phishing verdict
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<UrlItem>, JsonRejection>,
) -> AppResult<Json<PredictionResponse>> {
    let Json(item) = payload?;
    let url = normalize_url(&item.url)
        .ok_or_else(|| AppError::ValidationError("URL must not be empty".to_string()))?;

    let predictor = state.predictor.clone();
    let verdict = tokio::task::spawn_blocking(move || predictor.predict(&url)).await?;

    tracing::info!(
        url = %verdict.url,
        is_phishing = verdict.is_phishing,
        confidence = verdict.confidence,
        risk = %verdict.risk_level,
        fallback = verdict.is_fallback(),
        "Analysis complete"
    );

    Ok(Json(verdict.into()))
}
