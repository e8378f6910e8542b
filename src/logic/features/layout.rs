//! Feature Layout - Centralized URL Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! The statistical model consumes the vector positionally, so a layout change
//! invalidates every trained artifact.

use crc32fast::Hasher;
use once_cell::sync::Lazy;
use thiserror::Error;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
/// This is the SINGLE SOURCE OF TRUTH for feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    "url_length",           // 0: Character count of the full URL
    "num_dots",             // 1: Count of '.' anywhere in the URL
    "num_subdomains",       // 2: Host labels minus two, floored at zero
    "has_ip",               // 3: 1.0 if host is a dotted-quad IPv4 address
    "has_suspicious_words", // 4: Vocabulary hits / 3, capped at 1.0
    "num_suspicious_chars", // 5: Count of -_?=&% / 10, capped at 1.0
    "domain_age",           // 6: Domain age proxy in [0, 1]
    "has_https",            // 7: 1.0 if scheme is exactly https
    "url_depth",            // 8: Non-empty path segments
    "num_params",           // 9: '&'-separated query parameters
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 10;

/// Positional indices into the feature vector
pub mod index {
    pub const URL_LENGTH: usize = 0;
    pub const NUM_DOTS: usize = 1;
    pub const NUM_SUBDOMAINS: usize = 2;
    pub const HAS_IP: usize = 3;
    pub const HAS_SUSPICIOUS_WORDS: usize = 4;
    pub const NUM_SUSPICIOUS_CHARS: usize = 5;
    pub const DOMAIN_AGE: usize = 6;
    pub const HAS_HTTPS: usize = 7;
    pub const URL_DEPTH: usize = 8;
    pub const NUM_PARAMS: usize = 9;
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

static LAYOUT_HASH: Lazy<u32> = Lazy::new(compute_layout_hash);

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches between the extractor and a model artifact
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Layout hash, computed once per process
pub fn layout_hash() -> u32 {
    *LAYOUT_HASH
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a feature layout doesn't match the one compiled into this build
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutMismatchError {
    #[error("feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), got v{actual_version} (hash: {actual_hash:08x})")]
    Version {
        expected_version: u8,
        expected_hash: u32,
        actual_version: u8,
        actual_hash: u32,
    },

    #[error("feature names mismatch at position {position}: expected {expected:?}, got {actual:?}")]
    Names {
        position: usize,
        expected: Option<String>,
        actual: Option<String>,
    },
}

/// Validate that a (version, hash) pair matches the current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError::Version {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

/// Validate that a declared feature list equals FEATURE_LAYOUT (names and order)
pub fn validate_feature_names<S: AsRef<str>>(names: &[S]) -> Result<(), LayoutMismatchError> {
    let longest = names.len().max(FEATURE_COUNT);

    for position in 0..longest {
        let expected = FEATURE_LAYOUT.get(position).copied();
        let actual = names.get(position).map(|n| n.as_ref());

        if expected != actual {
            return Err(LayoutMismatchError::Names {
                position,
                expected: expected.map(str::to_string),
                actual: actual.map(str::to_string),
            });
        }
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 10);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_index_constants_match_layout() {
        assert_eq!(feature_index("url_length"), Some(index::URL_LENGTH));
        assert_eq!(feature_index("num_dots"), Some(index::NUM_DOTS));
        assert_eq!(feature_index("num_subdomains"), Some(index::NUM_SUBDOMAINS));
        assert_eq!(feature_index("has_ip"), Some(index::HAS_IP));
        assert_eq!(feature_index("has_suspicious_words"), Some(index::HAS_SUSPICIOUS_WORDS));
        assert_eq!(feature_index("num_suspicious_chars"), Some(index::NUM_SUSPICIOUS_CHARS));
        assert_eq!(feature_index("domain_age"), Some(index::DOMAIN_AGE));
        assert_eq!(feature_index("has_https"), Some(index::HAS_HTTPS));
        assert_eq!(feature_index("url_depth"), Some(index::URL_DEPTH));
        assert_eq!(feature_index("num_params"), Some(index::NUM_PARAMS));
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(compute_layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
        assert!(validate_layout(FEATURE_VERSION + 1, layout_hash()).is_err());
        assert!(validate_layout(FEATURE_VERSION, layout_hash().wrapping_add(1)).is_err());
    }

    #[test]
    fn test_validate_feature_names() {
        assert!(validate_feature_names(FEATURE_LAYOUT).is_ok());

        let mut swapped: Vec<&str> = FEATURE_LAYOUT.to_vec();
        swapped.swap(0, 1);
        let err = validate_feature_names(&swapped).unwrap_err();
        assert!(matches!(err, LayoutMismatchError::Names { position: 0, .. }));

        let short = &FEATURE_LAYOUT[..9];
        let err = validate_feature_names(short).unwrap_err();
        assert_eq!(
            err,
            LayoutMismatchError::Names {
                position: 9,
                expected: Some("num_params".to_string()),
                actual: None,
            }
        );
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("url_length"));
        assert_eq!(feature_name(9), Some("num_params"));
        assert_eq!(feature_name(10), None);
    }
}
