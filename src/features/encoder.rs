//! Feature encoding for the prediction pipeline
//!
//! Maps a raw /predict payload into the fixed-width vector the regressors
//! were trained on. Absent fields and unknown materials surface as client
//! errors before any model call; encoding itself has no failure modes and
//! no side effects.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use crate::models::Material;
use super::vector::FeatureVector;

#[derive(Debug, Error, PartialEq)]
pub enum EncodingError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for field: {0}")]
    InvalidField(&'static str),
    #[error("unknown material: {0}")]
    UnknownMaterial(String),
}

/// Raw JSON body of POST /api/v1/predict
///
/// Fields stay optional so a missing field resolves to MissingField
/// instead of a framework-level reject.
#[derive(Debug, Deserialize)]
pub struct PredictPayload {
    pub weight: Option<f64>,
    pub durability: Option<f64>,
    pub recyclable: Option<Value>,
    pub material: Option<String>,
}

/// Resolved, typed prediction request
#[derive(Debug, Clone, Validate)]
pub struct PredictionRequest {
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
    #[validate(range(min = 0.0, max = 10.0))]
    pub durability: f64,
    pub recyclable: bool,
    pub material: Material,
}

impl PredictPayload {
    /// Resolve the raw payload into a typed request
    pub fn resolve(self) -> Result<PredictionRequest, EncodingError> {
        let weight = self.weight.ok_or(EncodingError::MissingField("weight"))?;
        let durability = self.durability.ok_or(EncodingError::MissingField("durability"))?;
        let recyclable = self.recyclable
            .ok_or(EncodingError::MissingField("recyclable"))
            .and_then(|v| coerce_recyclable(&v))?;
        let material = self.material.ok_or(EncodingError::MissingField("material"))?;
        let material = Material::from_name(&material)
            .ok_or(EncodingError::UnknownMaterial(material))?;

        Ok(PredictionRequest { weight, durability, recyclable, material })
    }
}

/// Accept JSON true/false and the numbers 0/1
fn coerce_recyclable(value: &Value) -> Result<bool, EncodingError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(EncodingError::InvalidField("recyclable")),
        },
        _ => Err(EncodingError::InvalidField("recyclable")),
    }
}

/// Build the model input vector for a resolved request
///
/// Zero-initialized across all slots, scalars overwritten, then exactly
/// one material slot set to 1 via the layout's name→slot mapping.
pub fn encode(request: &PredictionRequest) -> FeatureVector {
    let mut vector = FeatureVector::new();
    vector.set_by_name("weight", request.weight as f32);
    vector.set_by_name("durability", request.durability as f32);
    vector.set_by_name("recyclable", if request.recyclable { 1.0 } else { 0.0 });
    vector.set_by_name(request.material.feature_name(), 1.0);
    vector
}
