//! Classification core
//!
//! Pure pipeline with no transport concerns:
//! `features` → `model` → `risk`, orchestrated by `predictor`.

pub mod features;
pub mod model;
pub mod predictor;
pub mod risk;

pub use predictor::{PhishingPredictor, Verdict, VerdictSource};
