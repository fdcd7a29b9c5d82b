//! Axum route handlers for skill matching and the job catalog.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::matcher::{match_skills, recommend_skill_gap, trending_skills};
use crate::models::job::{JobPosting, MatchResult, SkillGapReport};
use crate::parsing::handlers::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillMatchRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub desired_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub current_skills: Vec<String>,
    pub target_role: String,
}

/// POST /api/v1/skills/match
pub async fn handle_match_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillMatchRequest>,
) -> Json<Vec<MatchResult>> {
    let results = match_skills(
        &request.skills,
        &state.catalog,
        request.desired_role.as_deref(),
    );
    debug!(
        "Matched {} skills against {} postings",
        request.skills.len(),
        results.len()
    );
    Json(results)
}

/// POST /api/v1/skills/gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Json<SkillGapReport> {
    let report = recommend_skill_gap(
        &request.current_skills,
        &request.target_role,
        &state.catalog,
        &mut rand::rng(),
    );
    Json(report)
}

/// GET /api/v1/skills/trending
pub async fn handle_trending_skills() -> Json<Vec<String>> {
    Json(trending_skills())
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.catalog.as_ref().clone())
}

/// GET /api/v1/resume/matches
///
/// Matches the skills detected in the stored resume against the catalog.
pub async fn handle_resume_matches(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<MatchResult>>>, AppError> {
    let stored = state.store.get().await.ok_or_else(AppError::no_resume)?;
    let skills = stored.record.skills.detected();
    Ok(DataResponse::ok(match_skills(&skills, &state.catalog, None)))
}
