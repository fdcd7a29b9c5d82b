use std::sync::Arc;

use crate::config::Config;
use crate::models::job::JobPosting;
use crate::parsing::extractor::TextExtractor;
use crate::scoring::improve::ResumeImprover;
use crate::scoring::ResumeScorer;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Single-slot resume store shared by every request.
    pub store: ResumeStore,
    /// Pluggable scorer. Default: FallbackScorer, with the LLM path only when GEMINI_API_KEY is set.
    pub scorer: Arc<dyn ResumeScorer>,
    /// LLM resume rewriting; `None` when GEMINI_API_KEY is unset.
    pub improver: Option<Arc<ResumeImprover>>,
    pub extractor: Arc<dyn TextExtractor>,
    pub catalog: Arc<Vec<JobPosting>>,
}
