//! Risk Module
//!
//! Maps a model's (label, confidence) to a qualitative risk level.
//!
//! ## Structure
//! - `types`: `RiskLevel`
//! - `classifier`: thresholds and the classification function
//!
//! ## Usage
//! ```
//! use phishguard::logic::risk::{classify, RiskLevel};
//!
//! assert_eq!(classify(true, 0.9), RiskLevel::High);
//! assert_eq!(classify(false, 0.9), RiskLevel::Low);
//! assert_eq!(classify(true, 0.7), RiskLevel::Medium);
//! assert_eq!(classify(false, 0.3), RiskLevel::Uncertain);
//! ```

pub mod classifier;
pub mod types;

pub use classifier::{classify, HIGH_CONFIDENCE_MIN, MEDIUM_CONFIDENCE_MIN};
pub use types::RiskLevel;
