//! Risk Classifier
//!
//! Pure, total function of (label, confidence). Lower bounds are inclusive.

use super::types::RiskLevel;

/// At or above: High (phishing) or Low (legitimate)
pub const HIGH_CONFIDENCE_MIN: f64 = 0.8;

/// At or above (and below HIGH_CONFIDENCE_MIN): Medium regardless of label
pub const MEDIUM_CONFIDENCE_MIN: f64 = 0.6;

/// Classify a prediction into a risk level.
///
/// NaN confidence compares false everywhere and lands on `Uncertain`.
pub fn classify(is_phishing: bool, confidence: f64) -> RiskLevel {
    if confidence >= HIGH_CONFIDENCE_MIN {
        if is_phishing {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    } else if confidence >= MEDIUM_CONFIDENCE_MIN {
        RiskLevel::Medium
    } else {
        RiskLevel::Uncertain
    }
}
