//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::features::encoder::EncodingError;
use crate::inference::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Client input errors
    MissingField(&'static str),
    InvalidField(&'static str),
    UnknownMaterial(String),
    ValidationError(String),

    // Inference errors
    InferenceError(String),

    // Database errors
    DatabaseError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {}", field),
            ),
            AppError::InvalidField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid value for field: {}", field),
            ),
            AppError::UnknownMaterial(material) => {
                tracing::warn!("Unknown material requested: {}", material);
                (StatusCode::BAD_REQUEST, "Invalid material".to_string())
            }
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InferenceError(msg) => {
                tracing::error!("Inference error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Model inference failed".to_string())
            }
            AppError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error occurred".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<EncodingError> for AppError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::MissingField(field) => AppError::MissingField(field),
            EncodingError::InvalidField(field) => AppError::InvalidField(field),
            EncodingError::UnknownMaterial(material) => AppError::UnknownMaterial(material),
        }
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::InferenceError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
