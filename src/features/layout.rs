//! Feature Layout - the encoder/model contract
//!
//! The slot order below is the exact order the cost and CO₂ regressors
//! were trained with. It cannot be inferred at runtime; treat it as a
//! versioned contract between the encoder and the model artifacts.
//!
//! ## Rules (NEVER break these):
//! 1. Add a slot → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove a slot → increment FEATURE_VERSION

use crc32fast::Hasher;

/// Current feature layout version
/// MUST be incremented when the layout changes
pub const FEATURE_VERSION: u8 = 1;

/// Slot names in the exact order the models consume them
/// This is the SINGLE SOURCE OF TRUTH for the feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Scalars (0-2) ===
    "weight",                          // 0: Package weight
    "durability",                      // 1: Durability rating, 0-10
    "recyclable",                      // 2: 0/1 flag

    // === Material one-hot block (3-10) ===
    "material_Bagasse Fiber",          // 3
    "material_Biodegradable Plastic",  // 4
    "material_Corn Starch Polymer",    // 5
    "material_Glass",                  // 6
    "material_Molded Pulp",            // 7
    "material_PLA Bioplastic",         // 8
    "material_Recycled Cardboard",     // 9
    "material_Recycled Paperboard",    // 10
];

/// Total number of slots
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 11;

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches at the inference boundary
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[FEATURE_VERSION]);

    // Hash all slot names in order
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

/// Error when a vector was built against a different layout
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version,
            self.expected_hash,
            self.actual_version,
            self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that a vector's provenance matches the current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

/// Get slot index by name (O(n) but slots are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 11);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_consistency() {
        // Hash should be consistent across calls
        let hash1 = compute_layout_hash();
        let hash2 = compute_layout_hash();
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_layout_hash_non_zero() {
        let hash = layout_hash();
        assert_ne!(hash, 0);
    }

    #[test]
    fn test_validate_layout_success() {
        let result = validate_layout(FEATURE_VERSION, layout_hash());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_layout_version_mismatch() {
        let result = validate_layout(FEATURE_VERSION + 1, layout_hash());
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_layout_hash_mismatch() {
        let result = validate_layout(FEATURE_VERSION, layout_hash() + 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("weight"), Some(0));
        assert_eq!(feature_index("recyclable"), Some(2));
        assert_eq!(feature_index("material_Glass"), Some(6));
        assert_eq!(feature_index("material_Recycled Paperboard"), Some(10));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_material_block_is_contiguous() {
        for (i, name) in FEATURE_LAYOUT.iter().enumerate() {
            if i >= 3 {
                assert!(name.starts_with("material_"), "slot {} should be a material slot", i);
            } else {
                assert!(!name.starts_with("material_"));
            }
        }
    }
}
