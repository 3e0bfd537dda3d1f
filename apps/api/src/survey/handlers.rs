use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::path::Path;

use crate::assets;
use crate::errors::AppError;
use crate::models::survey::Question;
use crate::state::AppState;
use crate::survey::analyze::{analyze, AnalysisResult};

/// Submission body. Answers that are not JSON strings are kept as empty
/// strings, which tally as "not yes" instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct SubmitSurveyRequest {
    #[serde(default)]
    pub answers: Vec<serde_json::Value>,
}

/// GET /api/survey/questions
pub async fn handle_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.dataset.questions.clone())
}

/// POST /api/survey/submit
///
/// Always responds 200 with a best-effort analysis; short, empty, or
/// malformed answer lists degrade to defaults rather than erroring.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitSurveyRequest>,
) -> Json<AnalysisResult> {
    let answers: Vec<String> = req
        .answers
        .iter()
        .map(|value| value.as_str().unwrap_or_default().to_string())
        .collect();
    Json(analyze(&answers, &state.dataset))
}

/// GET /api/survey/icon/:filename
pub async fn handle_icon(
    State(state): State<AppState>,
    UrlPath(filename): UrlPath<String>,
) -> Result<Response, AppError> {
    let dir = state.config.static_dir.join("icon");
    serve_png(&dir, assets::personality_icon_name(&filename)).await
}

/// GET /api/survey/school-icon/:filename
pub async fn handle_school_icon(
    State(state): State<AppState>,
    UrlPath(filename): UrlPath<String>,
) -> Result<Response, AppError> {
    let dir = state.config.static_dir.join("school_icon");
    serve_png(&dir, assets::school_logo_name(&filename)).await
}

async fn serve_png(dir: &Path, name: Option<String>) -> Result<Response, AppError> {
    let path = assets::resolve(dir, name)
        .ok_or_else(|| AppError::NotFound("asset not found".to_string()))?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::NotFound(format!("{}: {e}", path.display())))?;
    Ok((StatusCode::OK, [("content-type", "image/png")], bytes).into_response())
}
