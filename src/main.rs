//! EcoPack Prediction Server
//!
//! Serves packaging cost and CO₂ predictions from two pre-trained
//! regression models, derives a sustainability score, records every
//! scored prediction in PostgreSQL and exposes simple reporting views.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    ECOPACK SERVER                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────────┐   ┌────────────────┐   │
//! │  │  API     │   │  Feature      │   │  Regressors    │   │
//! │  │  (Axum)  │──▶│  Encoder      │──▶│  (ONNX ×2)     │   │
//! │  └────┬─────┘   └───────────────┘   └───────┬────────┘   │
//! │       │          scorer + ranker            │            │
//! │       ▼                                     ▼            │
//! │  ┌─────────────┐                  ┌─────────────────┐    │
//! │  │ PostgreSQL  │◀─────────────────│ Prediction Log  │    │
//! │  └─────────────┘                  └─────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod error;
mod features;
mod handlers;
mod inference;
mod models;
mod recommend;
mod scoring;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

use inference::ModelSet;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "ecopack_server=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("EcoPack prediction server starting ({})...", config.environment);
    tracing::info!("Database: {}", config.database_url.split('@').last().unwrap_or("***"));

    // Initialize database pool
    let pool = db::create_pool(&config.database_url).await
        .expect("Failed to create database pool");

    // Run migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await
        .expect("Failed to run migrations");

    // Load the two regression artifacts. Missing or corrupt artifacts
    // abort startup; the server never lazily loads per request.
    let models = ModelSet::load(&config.cost_model_path, &config.co2_model_path)
        .expect("Failed to load model artifacts");

    // Build application state
    let state = AppState {
        pool,
        config: config.clone(),
        models: Arc::new(models),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: config::Config,
    pub models: Arc<ModelSet>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::home))
        .route("/health", get(handlers::health::check))

        // Prediction pipeline
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/recommend", post(handlers::recommend::recommend))

        // Reporting views (read-only)
        .route("/api/v1/predictions", get(handlers::predictions::list))
        .route("/api/v1/reports/summary", get(handlers::reports::summary))
        .route("/api/v1/reports/export.csv", get(handlers::reports::export_csv))
        .route("/dashboard", get(handlers::dashboard::dashboard))

        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
