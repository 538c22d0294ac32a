//! Recommendation handler

use axum::Json;
use serde::Serialize;

use crate::recommend::{self, RankedMaterial, CANDIDATES};

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommended_material: &'static str,
    pub ranking: Vec<RankedMaterial>,
}

/// Rank the candidate materials by environment score
pub async fn recommend() -> Json<RecommendResponse> {
    let ranking = recommend::rank(CANDIDATES);

    // CANDIDATES is a non-empty const table
    let best = recommend::best(CANDIDATES).expect("candidate table is non-empty");

    Json(RecommendResponse {
        recommended_material: best.material,
        ranking,
    })
}
