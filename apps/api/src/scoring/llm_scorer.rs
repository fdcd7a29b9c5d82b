use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, LlmError};
use crate::scoring::prompts::{build_scoring_prompt, SCORING_SCHEMA};
use crate::scoring::{excerpt, ResumeScorer, ScoreReport};

const MAX_STRENGTHS: usize = 6;
const MAX_IMPROVEMENTS: usize = 6;
const MAX_MISSING_KEYWORDS: usize = 8;
const MAX_SUGGESTED_SKILLS: usize = 7;

/// Raw shape of the model's answer. Every field is optional; absent scores
/// take fixed defaults and absent lists are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LlmScorePayload {
    overall_score: Option<f64>,
    content_quality: Option<f64>,
    formatting_score: Option<f64>,
    keyword_match: Option<f64>,
    experience_impact: Option<f64>,
    skills_relevance: Option<f64>,
    ats_compatibility: Option<f64>,
    strengths: Vec<String>,
    improvements: Vec<String>,
    missing_keywords: Vec<String>,
    suggested_skills: Vec<String>,
}

fn bounded_score(value: Option<f64>, default: u32) -> u32 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u32)
        .unwrap_or(default)
}

fn capped(mut items: Vec<String>, max: usize) -> Vec<String> {
    items.truncate(max);
    items
}

/// Scores resumes by asking the completion backend for a structured assessment.
pub struct LlmResumeScorer {
    backend: Arc<dyn CompletionBackend>,
}

impl LlmResumeScorer {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl ResumeScorer for LlmResumeScorer {
    async fn score(&self, text: &str) -> Result<ScoreReport, AppError> {
        let prompt = build_scoring_prompt(text);
        let value = self.backend.complete_json(&prompt, SCORING_SCHEMA).await?;
        let payload: LlmScorePayload = serde_json::from_value(value).map_err(LlmError::Parse)?;

        debug!("LLM scoring payload: {:?}", payload);

        Ok(ScoreReport {
            overall_score: bounded_score(payload.overall_score, 85),
            content_quality: bounded_score(payload.content_quality, 85),
            formatting_score: bounded_score(payload.formatting_score, 82),
            keyword_match: bounded_score(payload.keyword_match, 80),
            experience_impact: bounded_score(payload.experience_impact, 83),
            skills_relevance: bounded_score(payload.skills_relevance, 85),
            ats_compatibility: bounded_score(payload.ats_compatibility, 80),
            strengths: capped(payload.strengths, MAX_STRENGTHS),
            improvements: capped(payload.improvements, MAX_IMPROVEMENTS),
            missing_keywords: capped(payload.missing_keywords, MAX_MISSING_KEYWORDS),
            suggested_skills: capped(payload.suggested_skills, MAX_SUGGESTED_SKILLS),
            scorer_backend: "llm".to_string(),
            extracted_text: excerpt(text),
        })
    }
}
