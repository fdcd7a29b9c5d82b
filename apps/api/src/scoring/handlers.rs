//! Axum route handlers for resume scoring.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::parsing::handlers::read_file_field;
use crate::scoring::improve::ImprovedResume;
use crate::scoring::ScoreReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    pub text: String,
}

/// POST /api/v1/resume/analyze
///
/// Extracts text from an uploaded file and scores it. The stored resume is
/// left untouched.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreReport>, AppError> {
    let upload = read_file_field(&mut multipart).await?;
    let text = state
        .extractor
        .extract(upload.bytes, &upload.content_type)
        .await?;

    let report = state.scorer.score(&text).await?;
    info!(
        "Scored '{}' with {} backend: {}",
        upload.file_name, report.scorer_backend, report.overall_score
    );

    Ok(Json(report))
}

/// POST /api/v1/resume/score
pub async fn handle_score_text(
    State(state): State<AppState>,
    Json(request): Json<ScoreTextRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let report = state.scorer.score(&request.text).await?;
    Ok(Json(report))
}

/// POST /api/v1/resume/improve
///
/// Rewrites an uploaded resume as markdown with the LLM. Fails with 500 when
/// no LLM is configured; there is no heuristic rewrite.
pub async fn handle_improve_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImprovedResume>, AppError> {
    let upload = read_file_field(&mut multipart).await?;
    let text = state
        .extractor
        .extract(upload.bytes, &upload.content_type)
        .await?;

    let improver = state
        .improver
        .as_ref()
        .ok_or_else(|| AppError::LlmUnavailable("Gemini API key not configured".to_string()))?;

    info!("Improving resume '{}'", upload.file_name);
    Ok(Json(improver.improve(&text).await?))
}
