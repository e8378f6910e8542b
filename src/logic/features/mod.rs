//! Features Module - URL Feature Extraction
//!
//! Turns a URL string into the fixed, versioned feature vector consumed by
//! the scoring models. New lexical features go through `layout.rs` first.

pub mod domain_age;
pub mod extractor;
pub mod layout;
pub mod vector;

pub use domain_age::{DomainAgeProvider, HostLengthProxy};
pub use extractor::{FeatureExtractor, UrlFeatureExtractor, SUSPICIOUS_CHARS, SUSPICIOUS_WORDS};
pub use layout::{LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;
