use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus LLM and stored-resume flags.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let resume_loaded = state.store.has_resume().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-api",
        "llm_scoring": state.config.gemini_api_key.is_some(),
        "resume_loaded": resume_loaded
    }))
}
