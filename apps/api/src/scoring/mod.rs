//! Resume scoring: pluggable, trait-based scorers that grade raw resume text.
//!
//! `HeuristicScorer` is deterministic and always available. `LlmResumeScorer`
//! asks the completion backend for a structured assessment. `FallbackScorer`
//! composes the two: the LLM path runs under a timeout and any failure is
//! answered with the heuristic report instead.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`, wired at startup from config.
//! Markdown rewriting (`improve`) shares the LLM client but has no fallback.

pub mod handlers;
pub mod heuristic;
pub mod improve;
pub mod llm_scorer;
pub mod prompts;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::scoring::heuristic::HeuristicScorer;
use crate::scoring::llm_scorer::LlmResumeScorer;

/// Characters of the scored text echoed back in the report.
pub const EXCERPT_CHARS: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u32,
    pub content_quality: u32,
    pub formatting_score: u32,
    pub keyword_match: u32,
    pub experience_impact: u32,
    pub skills_relevance: u32,
    pub ats_compatibility: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub scorer_backend: String, // "llm" | "heuristic"
    pub extracted_text: String,
}

pub fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<ScoreReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackScorer
// ────────────────────────────────────────────────────────────────────────────

/// LLM first when configured, heuristic otherwise. Never returns an error.
pub struct FallbackScorer {
    llm: Option<LlmResumeScorer>,
    heuristic: HeuristicScorer,
    timeout: Duration,
}

impl FallbackScorer {
    pub fn new(llm: Option<LlmResumeScorer>, heuristic: HeuristicScorer, timeout: Duration) -> Self {
        Self {
            llm,
            heuristic,
            timeout,
        }
    }

    pub fn heuristic_only(heuristic: HeuristicScorer) -> Self {
        Self::new(None, heuristic, Duration::ZERO)
    }
}

#[async_trait]
impl ResumeScorer for FallbackScorer {
    async fn score(&self, text: &str) -> Result<ScoreReport, AppError> {
        if let Some(llm) = &self.llm {
            match tokio::time::timeout(self.timeout, llm.score(text)).await {
                Ok(Ok(report)) => return Ok(report),
                Ok(Err(e)) => warn!("LLM scoring failed, using heuristic scorer: {e}"),
                Err(_) => warn!(
                    "LLM scoring timed out after {}s, using heuristic scorer",
                    self.timeout.as_secs()
                ),
            }
        }
        Ok(self.heuristic.report(text))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::llm_client::{CompletionBackend, LlmError};

    const RESUME: &str = "Jane Doe\nEducation: Bachelor of Science\nExperience: developed billing APIs\nSkills: python";

    struct CannedBackend(Value);

    #[async_trait]
    impl CompletionBackend for CannedBackend {
        async fn complete_json(&self, _prompt: &str, _schema: &str) -> Result<Value, LlmError> {
            Ok(self.0.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn complete_json(&self, _prompt: &str, _schema: &str) -> Result<Value, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    struct StalledBackend;

    #[async_trait]
    impl CompletionBackend for StalledBackend {
        async fn complete_json(&self, _prompt: &str, _schema: &str) -> Result<Value, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(json!({}))
        }
    }

    fn fallback_with(backend: Arc<dyn CompletionBackend>) -> FallbackScorer {
        FallbackScorer::new(
            Some(LlmResumeScorer::new(backend)),
            HeuristicScorer::default(),
            Duration::from_secs(30),
        )
    }

    #[tokio::test]
    async fn test_heuristic_only_reports_heuristic_backend() {
        let scorer = FallbackScorer::heuristic_only(HeuristicScorer::default());
        let report = scorer.score(RESUME).await.unwrap();
        assert_eq!(report.scorer_backend, "heuristic");
    }

    #[tokio::test]
    async fn test_llm_report_used_when_backend_succeeds() {
        let scorer = fallback_with(Arc::new(CannedBackend(json!({"overall_score": 91}))));
        let report = scorer.score(RESUME).await.unwrap();
        assert_eq!(report.scorer_backend, "llm");
        assert_eq!(report.overall_score, 91);
    }

    #[tokio::test]
    async fn test_backend_error_falls_back() {
        let scorer = fallback_with(Arc::new(FailingBackend));
        let report = scorer.score(RESUME).await.unwrap();
        assert_eq!(report, HeuristicScorer::default().report(RESUME));
    }

    #[tokio::test]
    async fn test_unparseable_payload_falls_back() {
        let scorer = fallback_with(Arc::new(CannedBackend(json!({"strengths": "not a list"}))));
        let report = scorer.score(RESUME).await.unwrap();
        assert_eq!(report.scorer_backend, "heuristic");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_backend_times_out() {
        let scorer = fallback_with(Arc::new(StalledBackend));
        let report = scorer.score(RESUME).await.unwrap();
        assert_eq!(report.scorer_backend, "heuristic");
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let text = "é".repeat(600);
        assert_eq!(excerpt(&text).chars().count(), EXCERPT_CHARS);
        assert_eq!(excerpt("short"), "short");
    }
}
