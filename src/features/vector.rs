//! Feature Vector - model input
//!
//! Fixed-width numeric input for the regressors, tagged with the layout
//! version and hash it was built against so a drifted layout is caught
//! before it reaches a model.

use serde::{Deserialize, Serialize};

use super::layout::{
    feature_index, layout_hash, validate_layout,
    FEATURE_COUNT, FEATURE_VERSION, LayoutMismatchError,
};

/// Versioned feature vector
///
/// All model input goes through this type; never hand a raw `[f32; N]`
/// to a regressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Slot values in the order defined by FEATURE_LAYOUT
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector with the current layout
    pub fn new() -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get slot value by layout name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).and_then(|i| self.values.get(i).copied())
    }

    /// Set slot value by layout name; false if the name is not in the layout
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        if let Some(index) = feature_index(name) {
            self.values[index] = value;
            true
        } else {
            false
        }
    }

    /// Validate that this vector is compatible with the current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}
