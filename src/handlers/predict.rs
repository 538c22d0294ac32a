//! Prediction handler

use axum::{extract::State, Json};
use serde::Serialize;
use validator::Validate;

use crate::{AppState, AppResult};
use crate::features::encoder::{self, PredictPayload};
use crate::models::{NewPrediction, PredictionRecord};
use crate::scoring::{environment_score, round_dp};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predicted_cost: f64,
    pub predicted_co2: f64,
    pub environment_score: f64,
}

/// Score one packaging configuration
///
/// resolve → encode → predict cost/CO₂ → derive score → append to the
/// log. The response is only sent once the record is durable; a failed
/// insert fails the request.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictPayload>,
) -> AppResult<Json<PredictResponse>> {
    let request = payload.resolve()?;
    request.validate()?;

    let vector = encoder::encode(&request);

    let cost = state.models.predict_cost(&vector)?;
    let co2 = state.models.predict_co2(&vector)?;
    let score = environment_score(co2, request.recyclable, request.durability);

    let record = PredictionRecord::append(&state.pool, NewPrediction {
        weight: request.weight,
        durability: request.durability,
        recyclable: request.recyclable,
        material: request.material.to_string(),
        predicted_cost: cost,
        predicted_co2: co2,
        environment_score: score,
    }).await?;

    tracing::debug!("Prediction {} recorded for {}", record.id, record.material);

    Ok(Json(PredictResponse {
        predicted_cost: round_dp(cost, 2),
        predicted_co2: round_dp(co2, 2),
        environment_score: score,
    }))
}

// End-to-end pipeline test against a scratch Postgres database; run with
//   TEST_DATABASE_URL=postgres://... cargo test -- --ignored
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use serde_json::json;

    use crate::config::Config;
    use crate::features::vector::FeatureVector;
    use crate::inference::{InferenceError, ModelSet, Regressor};

    struct FixedRegressor(f64);

    impl Regressor for FixedRegressor {
        fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
            features.validate()
                .map_err(|e| InferenceError::LayoutMismatch(e.to_string()))?;
            Ok(self.0)
        }
    }

    async fn test_state() -> AppState {
        let url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must point at a scratch Postgres database");
        let pool = crate::db::create_pool(&url).await.expect("connect");
        crate::db::run_migrations(&pool).await.expect("migrate");

        AppState {
            pool,
            config: Config::from_env(),
            models: Arc::new(ModelSet::new(
                Box::new(FixedRegressor(12.504)),
                Box::new(FixedRegressor(1.2)),
            )),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn predict_scores_and_records() {
        let state = test_state().await;

        let payload: PredictPayload = serde_json::from_value(json!({
            "weight": 1.0,
            "durability": 8,
            "recyclable": 1,
            "material": "Glass"
        })).unwrap();

        let max_id_before = crate::models::PredictionRecord::list_all(&state.pool)
            .await
            .expect("list")
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0);

        let response = predict(State(state.clone()), Json(payload))
            .await
            .expect("predict")
            .0;

        assert_eq!(response.predicted_cost, 12.5);
        assert_eq!(response.predicted_co2, 1.2);
        // (1 / 2.2) * 0.5 + 0.3 + 0.16
        assert_eq!(response.environment_score, 0.687);

        let records = crate::models::PredictionRecord::list_all(&state.pool)
            .await
            .expect("list");
        let appended = records
            .iter()
            .find(|r| r.id > max_id_before && r.material == "Glass" && r.predicted_cost == 12.504)
            .expect("record appended");

        assert!(appended.recyclable);
        assert_eq!(appended.weight, 1.0);
        assert_eq!(appended.environment_score, 0.687);
        assert!(records
            .iter()
            .filter(|r| r.id <= max_id_before)
            .all(|r| r.created_at <= appended.created_at));
    }

    #[tokio::test]
    #[ignore]
    async fn predict_rejects_unknown_material_without_recording() {
        let state = test_state().await;

        let payload: PredictPayload = serde_json::from_value(json!({
            "weight": 1.0,
            "durability": 8,
            "recyclable": 1,
            "material": "Unobtainium"
        })).unwrap();

        let result = predict(State(state.clone()), Json(payload)).await;
        assert!(result.is_err());

        let records = crate::models::PredictionRecord::list_all(&state.pool)
            .await
            .expect("list");
        assert!(
            records.iter().all(|r| r.material != "Unobtainium"),
            "a rejected request must leave no partial effects"
        );
    }
}
