//! PhishGuard - URL phishing detection service
//!
//! Classifies a URL as phishing or legitimate with a confidence score and a
//! qualitative risk level.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        PHISHGUARD                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   POST /api/v1/predict                      │
//! │  │  API      │──────────────┐                              │
//! │  │  (Axum)   │              ▼                              │
//! │  └───────────┘   ┌─────────────────────┐                   │
//! │                  │ PhishingPredictor   │                   │
//! │                  └──────────┬──────────┘                   │
//! │        ┌────────────────────┼────────────────────┐         │
//! │        ▼                    ▼                    ▼         │
//! │  ┌───────────┐   ┌─────────────────────┐  ┌────────────┐   │
//! │  │ Features  │   │ ScoringModel        │  │ Risk       │   │
//! │  │ (URL)     │   │ ONNX | rule-based   │  │ Classifier │   │
//! │  └───────────┘   └─────────────────────┘  └────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;
pub use error::{AppError, AppResult};
pub use logic::{PhishingPredictor, Verdict};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<PhishingPredictor>,
    pub config: Config,
}

impl AppState {
    pub fn new(predictor: PhishingPredictor, config: Config) -> Self {
        Self {
            predictor: Arc::new(predictor),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))
        .route("/stats", get(handlers::stats::stats))
        .route("/model", get(handlers::stats::model));

    Router::new()
        .route("/", get(handlers::health::root))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
