//! LLM rewrite of a resume as markdown.
//!
//! Unlike scoring there is no heuristic counterpart: the improver only exists
//! when a completion backend is configured, and any LLM failure is surfaced.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{LlmError, TextBackend};
use crate::scoring::prompts::build_improvement_prompt;

/// Upper bound on one rewrite, retries included.
pub const IMPROVE_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovedResume {
    pub success: bool,
    pub improved_resume: String,
    pub original_length: usize,
    pub improved_length: usize,
}

pub struct ResumeImprover {
    backend: Arc<dyn TextBackend>,
    timeout: Duration,
}

impl ResumeImprover {
    pub fn new(backend: Arc<dyn TextBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub async fn improve(&self, text: &str) -> Result<ImprovedResume, AppError> {
        let prompt = build_improvement_prompt(text);
        let improved = tokio::time::timeout(self.timeout, self.backend.complete_text(&prompt))
            .await
            .map_err(|_| LlmError::Timeout {
                secs: self.timeout.as_secs(),
            })??;

        let result = ImprovedResume {
            success: true,
            original_length: text.chars().count(),
            improved_length: improved.chars().count(),
            improved_resume: improved,
        };
        info!(
            "Generated improved resume ({} -> {} chars)",
            result.original_length, result.improved_length
        );
        Ok(result)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use async_trait::async_trait;

    use super::*;

    /// Answers every prompt with the same text.
    pub(crate) struct CannedText(pub &'static str);

    #[async_trait]
    impl TextBackend for CannedText {
        async fn complete_text(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingText;

    #[async_trait]
    impl TextBackend for FailingText {
        async fn complete_text(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    struct StalledText;

    #[async_trait]
    impl TextBackend for StalledText {
        async fn complete_text(&self, _prompt: &str) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_improve_reports_lengths() {
        let improver = ResumeImprover::new(
            Arc::new(CannedText("# Jane Doe\n\n## Skills\n- Rust")),
            IMPROVE_TIMEOUT,
        );
        let result = improver.improve("Jane Doe résumé").await.unwrap();
        assert!(result.success);
        assert_eq!(result.improved_resume, "# Jane Doe\n\n## Skills\n- Rust");
        assert_eq!(result.original_length, 15);
        assert_eq!(result.improved_length, 28);
    }

    #[tokio::test]
    async fn test_backend_failure_is_surfaced() {
        let improver = ResumeImprover::new(Arc::new(FailingText), IMPROVE_TIMEOUT);
        let err = improver.improve("Jane Doe").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_backend_times_out() {
        let improver = ResumeImprover::new(Arc::new(StalledText), IMPROVE_TIMEOUT);
        let err = improver.improve("Jane Doe").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Timeout { secs: 45 })));
    }
}
