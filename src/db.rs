//! Database module - PostgreSQL connection and migrations

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Create database connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create tables if not exist
    sqlx::query(SCHEMA_SQL)
        .execute(pool)
        .await?;

    tracing::info!("Database schema applied successfully");
    Ok(())
}

/// Database schema SQL
///
/// The predictions table is an append-only log: rows are inserted on each
/// successful /predict call and never updated or deleted. created_at is
/// assigned by the database, not the caller.
const SCHEMA_SQL: &str = r#"
-- Scored predictions
CREATE TABLE IF NOT EXISTS predictions (
    id BIGSERIAL PRIMARY KEY,
    weight DOUBLE PRECISION NOT NULL,
    durability DOUBLE PRECISION NOT NULL,
    recyclable BOOLEAN NOT NULL,
    material VARCHAR(64) NOT NULL,
    predicted_cost DOUBLE PRECISION NOT NULL,
    predicted_co2 DOUBLE PRECISION NOT NULL,
    environment_score DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_predictions_created ON predictions(created_at);
CREATE INDEX IF NOT EXISTS idx_predictions_material ON predictions(material);
"#;
