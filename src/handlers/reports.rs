//! Reporting handlers
//!
//! Read-side aggregations over the prediction log. The reduction figures
//! compare the best observed value against the average:
//! ((avg - min) / avg) * 100.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::{AppState, AppResult};
use crate::models::PredictionRecord;
use crate::scoring::round_dp;

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub total_predictions: i64,
    pub avg_cost: f64,
    pub min_cost: f64,
    pub cost_reduction_pct: f64,
    pub avg_co2: f64,
    pub min_co2: f64,
    pub co2_reduction_pct: f64,
    pub avg_environment_score: f64,
}

impl SummaryReport {
    fn empty() -> Self {
        Self {
            total_predictions: 0,
            avg_cost: 0.0,
            min_cost: 0.0,
            cost_reduction_pct: 0.0,
            avg_co2: 0.0,
            min_co2: 0.0,
            co2_reduction_pct: 0.0,
            avg_environment_score: 0.0,
        }
    }
}

/// Aggregate metrics over the whole prediction log
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<SummaryReport>> {
    let report = match PredictionRecord::summary(&state.pool).await? {
        Some(s) => SummaryReport {
            total_predictions: s.total_predictions,
            avg_cost: round_dp(s.avg_cost, 2),
            min_cost: round_dp(s.min_cost, 2),
            cost_reduction_pct: reduction_pct(s.avg_cost, s.min_cost),
            avg_co2: round_dp(s.avg_co2, 2),
            min_co2: round_dp(s.min_co2, 2),
            co2_reduction_pct: reduction_pct(s.avg_co2, s.min_co2),
            avg_environment_score: round_dp(s.avg_score, 3),
        },
        None => SummaryReport::empty(),
    };

    Ok(Json(report))
}

/// ((avg - min) / avg) * 100, rounded to 2 decimals
fn reduction_pct(avg: f64, min: f64) -> f64 {
    if avg == 0.0 {
        return 0.0;
    }
    round_dp((avg - min) / avg * 100.0, 2)
}

/// Export the full log as CSV (spreadsheet-consumable)
pub async fn export_csv(State(state): State<AppState>) -> AppResult<Response> {
    let records = PredictionRecord::list_all(&state.pool).await?;

    let mut csv = String::from(
        "id,weight,durability,recyclable,material,predicted_cost,predicted_co2,environment_score,created_at\n",
    );
    for r in &records {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            r.id,
            r.weight,
            r.durability,
            r.recyclable as u8,
            csv_field(&r.material),
            r.predicted_cost,
            r.predicted_co2,
            r.environment_score,
            r.created_at.to_rfc3339(),
        ));
    }

    tracing::debug!("Exported {} prediction records as CSV", records.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"predictions.csv\""),
        ],
        csv,
    ).into_response())
}

/// Quote a field when it contains CSV metacharacters
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
