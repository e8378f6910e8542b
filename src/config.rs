//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Service name shown by the root and stats endpoints
    pub app_name: String,

    /// Service version
    pub app_version: String,

    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// ONNX classifier artifact; rule-based model is used when absent
    pub model_path: PathBuf,

    /// Default log level when RUST_LOG is not set
    pub log_level: String,

    /// CORS origins ("*" = any)
    pub allow_origins: Vec<String>,

    /// Verbose mode (debug logging)
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "PhishGuard API".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            model_path: PathBuf::from("ml_model/phishing_classifier_model.onnx"),
            log_level: "info".to_string(),
            allow_origins: vec!["*".to_string()],
            debug: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),

            app_version: lookup("APP_VERSION").unwrap_or(defaults.app_version),

            host: lookup("HOST").unwrap_or(defaults.host),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),

            log_level: lookup("LOG_LEVEL")
                .map(|l| l.to_lowercase())
                .unwrap_or(defaults.log_level),

            allow_origins: lookup("ALLOW_ORIGINS")
                .map(|o| {
                    o.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .filter(|origins: &Vec<String>| !origins.is_empty())
                .unwrap_or(defaults.allow_origins),

            debug: lookup("DEBUG")
                .map(|d| matches!(d.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.debug),
        }
    }

    /// Log filter used when RUST_LOG is not set
    pub fn log_filter(&self) -> String {
        let level = if self.debug { "debug" } else { self.log_level.as_str() };
        format!("phishguard={level},tower_http={level}")
    }

    /// Check if any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.iter().any(|o| o == "*")
    }
}
