//! Prediction record model - the append-only prediction log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Row};

/// A scored prediction, as persisted
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PredictionRecord {
    pub id: i64,
    pub weight: f64,
    pub durability: f64,
    pub recyclable: bool,
    pub material: String,
    pub predicted_cost: f64,
    pub predicted_co2: f64,
    pub environment_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Fields the caller supplies for a new row
///
/// id and created_at are assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewPrediction {
    pub weight: f64,
    pub durability: f64,
    pub recyclable: bool,
    pub material: String,
    pub predicted_cost: f64,
    pub predicted_co2: f64,
    pub environment_score: f64,
}

/// Read-side aggregates for the reporting views
#[derive(Debug, Clone)]
pub struct PredictionSummary {
    pub total_predictions: i64,
    pub avg_cost: f64,
    pub min_cost: f64,
    pub avg_co2: f64,
    pub min_co2: f64,
    pub avg_score: f64,
}

impl PredictionRecord {
    /// Append one scored prediction
    ///
    /// Single-statement insert: the row is either fully durable and visible
    /// to subsequent reads, or nothing is persisted. created_at comes from
    /// Postgres so concurrent appends order consistently with insertion.
    pub async fn append(pool: &PgPool, data: NewPrediction) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, PredictionRecord>(
            r#"
            INSERT INTO predictions (weight, durability, recyclable, material, predicted_cost, predicted_co2, environment_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#
        )
        .bind(data.weight)
        .bind(data.durability)
        .bind(data.recyclable)
        .bind(&data.material)
        .bind(data.predicted_cost)
        .bind(data.predicted_co2)
        .bind(data.environment_score)
        .fetch_one(pool)
        .await
    }

    /// All records, oldest first
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, PredictionRecord>(
            "SELECT * FROM predictions ORDER BY created_at ASC, id ASC"
        )
        .fetch_all(pool)
        .await
    }

    /// Aggregates over the whole log; None when the log is empty
    pub async fn summary(pool: &PgPool) -> Result<Option<PredictionSummary>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) as total,
                AVG(predicted_cost) as avg_cost,
                MIN(predicted_cost) as min_cost,
                AVG(predicted_co2) as avg_co2,
                MIN(predicted_co2) as min_co2,
                AVG(environment_score) as avg_score
            FROM predictions
            "#
        )
        .fetch_one(pool)
        .await?;

        let total: i64 = row.get("total");
        if total == 0 {
            return Ok(None);
        }

        Ok(Some(PredictionSummary {
            total_predictions: total,
            avg_cost: row.get("avg_cost"),
            min_cost: row.get("min_cost"),
            avg_co2: row.get("avg_co2"),
            min_co2: row.get("min_co2"),
            avg_score: row.get("avg_score"),
        }))
    }
}

// Store tests need a scratch Postgres database; run with
//   TEST_DATABASE_URL=postgres://... cargo test -- --ignored
#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> PgPool {
        let url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must point at a scratch Postgres database");
        let pool = crate::db::create_pool(&url).await.expect("connect");
        crate::db::run_migrations(&pool).await.expect("migrate");
        pool
    }

    fn sample(material: &str, co2: f64) -> NewPrediction {
        NewPrediction {
            weight: 1.0,
            durability: 8.0,
            recyclable: true,
            material: material.to_string(),
            predicted_cost: 12.5,
            predicted_co2: co2,
            environment_score: 0.687,
        }
    }

    #[tokio::test]
    #[ignore]
    async fn append_then_list_round_trip() {
        let pool = test_pool().await;

        let appended = PredictionRecord::append(&pool, sample("Glass", 2.1))
            .await
            .expect("append");

        let records = PredictionRecord::list_all(&pool).await.expect("list");
        let found = records.iter().find(|r| r.id == appended.id).expect("row visible");

        assert_eq!(found.weight, 1.0);
        assert_eq!(found.durability, 8.0);
        assert!(found.recyclable);
        assert_eq!(found.material, "Glass");
        assert_eq!(found.predicted_cost, 12.5);
        assert_eq!(found.predicted_co2, 2.1);
        assert_eq!(found.environment_score, 0.687);
    }

    #[tokio::test]
    #[ignore]
    async fn created_at_orders_with_insertion() {
        let pool = test_pool().await;

        let first = PredictionRecord::append(&pool, sample("Molded Pulp", 1.0))
            .await
            .expect("append first");
        let second = PredictionRecord::append(&pool, sample("Molded Pulp", 1.1))
            .await
            .expect("append second");

        assert!(second.created_at >= first.created_at);
        assert!(second.id > first.id);

        let records = PredictionRecord::list_all(&pool).await.expect("list");
        let pos_first = records.iter().position(|r| r.id == first.id).unwrap();
        let pos_second = records.iter().position(|r| r.id == second.id).unwrap();
        assert!(pos_second > pos_first);

        for pair in records.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }

    #[tokio::test]
    #[ignore]
    async fn concurrent_appends_lose_no_writes() {
        let pool = test_pool().await;
        let n = 16;

        let mut handles = Vec::new();
        for i in 0..n {
            let pool = pool.clone();
            handles.push(tokio::spawn(async move {
                PredictionRecord::append(&pool, sample("PLA Bioplastic", i as f64)).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            let record = handle.await.expect("task").expect("append");
            ids.push(record.id);
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), n, "every concurrent append must yield a distinct row");

        let records = PredictionRecord::list_all(&pool).await.expect("list");
        for id in ids {
            let row = records.iter().find(|r| r.id == id).expect("row present");
            // No partial writes: every column round-trips intact
            assert_eq!(row.material, "PLA Bioplastic");
            assert_eq!(row.weight, 1.0);
            assert_eq!(row.environment_score, 0.687);
        }
    }

    #[tokio::test]
    #[ignore]
    async fn summary_aggregates_match_the_log() {
        let pool = test_pool().await;

        PredictionRecord::append(&pool, sample("Glass", 4.0)).await.expect("append");
        PredictionRecord::append(&pool, sample("Glass", 2.0)).await.expect("append");

        let summary = PredictionRecord::summary(&pool)
            .await
            .expect("summary")
            .expect("log is non-empty");

        assert!(summary.total_predictions >= 2);
        assert!(summary.min_co2 <= 2.0);
        assert!(summary.avg_co2 >= summary.min_co2);
        assert!(summary.avg_cost >= summary.min_cost);
    }
}
