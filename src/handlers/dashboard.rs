//! Dashboard handler
//!
//! Minimal HTML view over the prediction log: headline figures plus the
//! most recent rows. No client-side charting.

use axum::extract::State;
use axum::response::Html;

use crate::{AppState, AppResult};
use crate::models::PredictionRecord;

/// Render the sustainability dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Html<String>> {
    let records = PredictionRecord::list_all(&state.pool).await?;

    if records.is_empty() {
        return Ok(Html("No prediction data available yet.".to_string()));
    }

    let total = records.len();
    let avg_cost = records.iter().map(|r| r.predicted_cost).sum::<f64>() / total as f64;
    let avg_co2 = records.iter().map(|r| r.predicted_co2).sum::<f64>() / total as f64;
    let avg_score = records.iter().map(|r| r.environment_score).sum::<f64>() / total as f64;

    let mut rows = String::new();
    for r in records.iter().rev().take(20) {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.3}</td><td>{}</td></tr>\n",
            r.id,
            escape_html(&r.material),
            r.predicted_cost,
            r.predicted_co2,
            r.environment_score,
            r.created_at.format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    let page = format!(
        r#"<html>
<head><title>EcoPack Sustainability Dashboard</title></head>
<body>
<h2>EcoPack Sustainability Dashboard</h2>
<p>{total} predictions recorded.
Average cost: {avg_cost:.2} | Average CO₂: {avg_co2:.2} | Average score: {avg_score:.3}</p>
<table border="1" cellpadding="4">
<tr><th>ID</th><th>Material</th><th>Cost</th><th>CO₂</th><th>Score</th><th>Recorded</th></tr>
{rows}
</table>
</body>
</html>"#
    );

    Ok(Html(page))
}

fn escape_html(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
