//! ONNX Runtime regressor
//!
//! Wraps one ONNX session per artifact. Input is a (1, FEATURE_COUNT)
//! f32 tensor in the documented slot order; output is the first scalar
//! of the first output tensor.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::RwLock;

use crate::features::layout::FEATURE_COUNT;
use crate::features::vector::FeatureVector;

use super::{InferenceError, Regressor};

/// A regressor backed by a serialized ONNX artifact
pub struct OnnxRegressor {
    name: &'static str,
    session: RwLock<Session>,
}

impl OnnxRegressor {
    /// Load a session from an artifact on disk
    pub fn load(name: &'static str, model_path: &str) -> Result<Self, InferenceError> {
        tracing::info!("Loading {} model from: {}", name, model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError::ModelUnavailable(
                format!("{} model not found: {}", name, model_path),
            ));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::ModelUnavailable(format!("{}: {}", name, e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::ModelUnavailable(format!("{}: {}", name, e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::ModelUnavailable(format!("{}: {}", name, e)))?;

        tracing::info!("{} model loaded successfully", name);

        Ok(Self {
            name,
            session: RwLock::new(session),
        })
    }
}

impl Regressor for OnnxRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        features.validate()
            .map_err(|e| InferenceError::LayoutMismatch(e.to_string()))?;

        // Input tensor: shape (1, FEATURE_COUNT)
        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.as_slice().to_vec(),
        ).map_err(|e| InferenceError::Failed(format!("{}: {}", self.name, e)))?;

        // Write lock: Session::run needs exclusive access
        let mut session_guard = self.session.write();
        let session = &mut *session_guard;

        // Get output name BEFORE run to avoid borrow conflict
        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::Failed(format!("{}: no output defined", self.name)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Failed(format!("{}: {}", self.name, e)))?;

        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Failed(format!("{}: {}", self.name, e)))?;

        let output = outputs.get(&output_name)
            .ok_or_else(|| InferenceError::Failed(format!("{}: no output from model", self.name)))?;

        let output_tensor = output.try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Failed(format!("{}: {}", self.name, e)))?;

        let data = output_tensor.1;
        let scalar = data.first()
            .copied()
            .ok_or_else(|| InferenceError::Failed(format!("{}: empty output tensor", self.name)))?;

        Ok(scalar as f64)
    }
}
