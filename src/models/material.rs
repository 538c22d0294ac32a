//! Packaging materials

use serde::{Deserialize, Serialize};

/// The closed set of materials the models were trained on
///
/// Wire names are exact-match and case-sensitive; anything else is
/// rejected before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "Bagasse Fiber")]
    BagasseFiber,
    #[serde(rename = "Biodegradable Plastic")]
    BiodegradablePlastic,
    #[serde(rename = "Corn Starch Polymer")]
    CornStarchPolymer,
    #[serde(rename = "Glass")]
    Glass,
    #[serde(rename = "Molded Pulp")]
    MoldedPulp,
    #[serde(rename = "PLA Bioplastic")]
    PlaBioplastic,
    #[serde(rename = "Recycled Cardboard")]
    RecycledCardboard,
    #[serde(rename = "Recycled Paperboard")]
    RecycledPaperboard,
}

impl Material {
    /// Every known material, in feature-layout order
    pub const ALL: [Material; 8] = [
        Material::BagasseFiber,
        Material::BiodegradablePlastic,
        Material::CornStarchPolymer,
        Material::Glass,
        Material::MoldedPulp,
        Material::PlaBioplastic,
        Material::RecycledCardboard,
        Material::RecycledPaperboard,
    ];

    /// Parse a wire name (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Canonical wire/storage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::BagasseFiber => "Bagasse Fiber",
            Material::BiodegradablePlastic => "Biodegradable Plastic",
            Material::CornStarchPolymer => "Corn Starch Polymer",
            Material::Glass => "Glass",
            Material::MoldedPulp => "Molded Pulp",
            Material::PlaBioplastic => "PLA Bioplastic",
            Material::RecycledCardboard => "Recycled Cardboard",
            Material::RecycledPaperboard => "Recycled Paperboard",
        }
    }

    /// One-hot slot name in the feature layout
    pub fn feature_name(&self) -> &'static str {
        match self {
            Material::BagasseFiber => "material_Bagasse Fiber",
            Material::BiodegradablePlastic => "material_Biodegradable Plastic",
            Material::CornStarchPolymer => "material_Corn Starch Polymer",
            Material::Glass => "material_Glass",
            Material::MoldedPulp => "material_Molded Pulp",
            Material::PlaBioplastic => "material_PLA Bioplastic",
            Material::RecycledCardboard => "material_Recycled Cardboard",
            Material::RecycledPaperboard => "material_Recycled Paperboard",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::layout::feature_index;

    #[test]
    fn test_from_name_round_trip() {
        for material in Material::ALL {
            assert_eq!(Material::from_name(material.as_str()), Some(material));
        }
    }

    #[test]
    fn test_from_name_is_exact_match() {
        assert_eq!(Material::from_name("Glass"), Some(Material::Glass));
        assert_eq!(Material::from_name("glass"), None);
        assert_eq!(Material::from_name("GLASS"), None);
        assert_eq!(Material::from_name(" Glass"), None);
        assert_eq!(Material::from_name("Plastic"), None);
    }

    #[test]
    fn test_every_material_has_a_layout_slot() {
        for material in Material::ALL {
            assert!(
                feature_index(material.feature_name()).is_some(),
                "{} has no slot in the feature layout",
                material
            );
        }
    }
}
