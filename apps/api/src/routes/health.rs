use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a status object with the service version and the row counts of
/// the loaded reference tables.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "waypoint-api",
        "tables": {
            "questions": state.dataset.questions.len(),
            "personalities": state.dataset.personalities.len(),
            "industries": state.dataset.industries.len(),
        }
    }))
}
