pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::parsing::handlers as resume;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume structuring and storage
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume).delete(resume::handle_delete_resume),
        )
        .route("/api/v1/resume/upload", post(resume::handle_upload))
        .route("/api/v1/resume/parse", post(resume::handle_parse_text))
        .route("/api/v1/resume/skills", get(resume::handle_get_skills))
        .route(
            "/api/v1/resume/experience",
            get(resume::handle_get_experience),
        )
        .route(
            "/api/v1/resume/education",
            get(resume::handle_get_education),
        )
        .route("/api/v1/resume/contact", get(resume::handle_get_contact))
        .route("/api/v1/resume/analysis", get(resume::handle_get_analysis))
        .route(
            "/api/v1/resume/matches",
            get(matching::handle_resume_matches),
        )
        // Scoring
        .route(
            "/api/v1/resume/analyze",
            post(scoring::handle_analyze_upload),
        )
        .route("/api/v1/resume/score", post(scoring::handle_score_text))
        .route(
            "/api/v1/resume/improve",
            post(scoring::handle_improve_upload),
        )
        // Skill matching
        .route("/api/v1/skills/match", post(matching::handle_match_skills))
        .route("/api/v1/skills/gap", post(matching::handle_skill_gap))
        .route(
            "/api/v1/skills/trending",
            get(matching::handle_trending_skills),
        )
        .route("/api/v1/jobs", get(matching::handle_list_jobs))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
