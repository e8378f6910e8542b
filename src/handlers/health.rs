//! Root and health check handlers

use axum::{extract::State, Json};

use crate::models::{HealthResponse, RootResponse};
use crate::AppState;

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", state.config.app_name),
        version: state.config.app_version.clone(),
        health: "/api/v1/health",
    })
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: format!("{} is running", state.config.app_name),
    })
}
