//! Prediction log handlers

use axum::{extract::State, Json};

use crate::{AppState, AppResult};
use crate::models::PredictionRecord;

/// List every recorded prediction, oldest first
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PredictionRecord>>> {
    let records = PredictionRecord::list_all(&state.pool).await?;
    Ok(Json(records))
}
