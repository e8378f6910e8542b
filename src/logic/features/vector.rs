//! Feature Vector - Core data structure for model input
//!
//! **Versioned feature vector with layout validation**
//!
//! Uses centralized layout from `layout.rs` for:
//! - Consistent feature ordering
//! - Version tracking
//! - Layout hash for compatibility checks

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::layout::{
    feature_index, layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION,
};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned feature vector with layout metadata.
///
/// Always carries every feature of `FEATURE_LAYOUT`; a feature that could not
/// be computed stays at 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector with current version
    pub fn new() -> Self {
        Self::from_values([0.0; FEATURE_COUNT])
    }

    /// Create from raw values with current version
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Values narrowed to f32, the tensor element type of the ONNX model
    pub fn to_f32_array(&self) -> [f32; FEATURE_COUNT] {
        self.values.map(|v| v as f32)
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index (out-of-range indices are ignored)
    pub fn set(&mut self, index: usize, value: f64) {
        if index < FEATURE_COUNT {
            self.values[index] = value;
        }
    }

    /// Set feature by name
    pub fn set_by_name(&mut self, name: &str, value: f64) -> bool {
        if let Some(index) = feature_index(name) {
            self.set(index, value);
            true
        } else {
            false
        }
    }

    /// (name, value) pairs in layout order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_LAYOUT.iter().copied().zip(self.values.iter().copied())
    }

    /// Validate that this vector is compatible with current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

/// Serialized as `{name: value}` in layout order.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed_and_compatible() {
        let vector = FeatureVector::new();
        assert!(vector.as_slice().iter().all(|&v| v == 0.0));
        assert!(vector.is_compatible());
        assert_eq!(vector.feature_names().len(), FEATURE_COUNT);
    }

    #[test]
    fn test_set_and_get_by_name() {
        let mut vector = FeatureVector::new();
        assert!(vector.set_by_name("has_ip", 1.0));
        assert!(!vector.set_by_name("page_rank", 1.0));

        assert_eq!(vector.get_by_name("has_ip"), Some(1.0));
        assert_eq!(vector.get(3), Some(1.0));
        assert_eq!(vector.get_by_name("page_rank"), None);

        vector.set(FEATURE_COUNT, 5.0);
        assert_eq!(vector.get(FEATURE_COUNT), None);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = 22.0;
        values[7] = 1.0;
        let json = serde_json::to_string(&FeatureVector::from(values)).unwrap();

        assert!(json.starts_with("{\"url_length\":22.0,\"num_dots\":0.0"));
        assert!(json.ends_with("\"num_params\":0.0}"));
        assert!(json.contains("\"has_https\":1.0"));
    }

    #[test]
    fn test_incompatible_version_detected() {
        let mut vector = FeatureVector::new();
        vector.version = FEATURE_VERSION + 1;
        assert!(!vector.is_compatible());
    }
}
