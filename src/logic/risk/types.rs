//! Risk Types

use serde::{Deserialize, Serialize};

/// Qualitative risk of a classified URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Confidently legitimate
    Low,
    /// Moderately confident, either label
    Medium,
    /// Confidently phishing
    High,
    /// Not confident enough to call
    Uncertain,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Uncertain => "Uncertain",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
