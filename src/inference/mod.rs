//! Prediction adapter over the trained regression models
//!
//! The two regressors (cost, CO₂) are opaque artifacts loaded once at
//! startup. The adapter's only job is shape-correct marshalling in and
//! scalar extraction out.

pub mod onnx;

pub use onnx::OnnxRegressor;

use thiserror::Error;

use crate::features::vector::FeatureVector;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model artifact unavailable: {0}")]
    ModelUnavailable(String),
    #[error("feature layout mismatch: {0}")]
    LayoutMismatch(String),
    #[error("inference failed: {0}")]
    Failed(String),
}

/// A trained regressor: feature vector in, one scalar out
///
/// The concrete artifact format is opaque; anything that honors the
/// documented slot order satisfies the contract.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;
}

/// The two regressors the server serves, loaded once at startup
pub struct ModelSet {
    cost: Box<dyn Regressor>,
    co2: Box<dyn Regressor>,
}

impl ModelSet {
    /// Load both ONNX artifacts; a failure here aborts process startup
    pub fn load(cost_path: &str, co2_path: &str) -> Result<Self, InferenceError> {
        let cost = OnnxRegressor::load("cost", cost_path)?;
        let co2 = OnnxRegressor::load("co2", co2_path)?;
        Ok(Self::new(Box::new(cost), Box::new(co2)))
    }

    /// Assemble from arbitrary regressor implementations
    pub fn new(cost: Box<dyn Regressor>, co2: Box<dyn Regressor>) -> Self {
        Self { cost, co2 }
    }

    pub fn predict_cost(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        self.cost.predict(features)
    }

    pub fn predict_co2(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        self.co2.predict(features)
    }
}
