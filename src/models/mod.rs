//! Request/response schemas

pub mod prediction;

pub use prediction::*;
