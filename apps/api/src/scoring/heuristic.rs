//! Deterministic scorer used when no LLM is configured or the LLM path fails.
//!
//! Four keyword signals (education, experience, skills, contact) and two length
//! signals (word and line count) feed six bounded sub-scores. The overall score
//! is their integer average, so an empty document still lands at 73.

use crate::scoring::{excerpt, ScoreReport};

/// Keyword tables and fixed advice used by `HeuristicScorer`.
#[derive(Debug, Clone)]
pub struct HeuristicProfile {
    pub education_terms: &'static [&'static str],
    pub experience_terms: &'static [&'static str],
    pub skills_terms: &'static [&'static str],
    pub contact_terms: &'static [&'static str],
    pub missing_keywords: &'static [&'static str],
    pub suggested_skills: &'static [&'static str],
    /// Cap on strengths and on improvements.
    pub max_insights: usize,
}

impl Default for HeuristicProfile {
    fn default() -> Self {
        Self {
            education_terms: &[
                "education",
                "degree",
                "university",
                "college",
                "bachelor",
                "master",
            ],
            experience_terms: &["experience", "worked", "developed", "managed", "led"],
            skills_terms: &["skills", "python", "java", "javascript", "react", "node"],
            contact_terms: &["email", "phone", "linkedin", "@"],
            missing_keywords: &[
                "Leadership",
                "Team Collaboration",
                "Project Management",
                "Problem Solving",
                "Communication",
                "Agile/Scrum",
            ],
            suggested_skills: &[
                "Cloud Technologies (AWS/Azure)",
                "CI/CD Pipelines",
                "Database Management",
                "API Development",
                "Version Control (Git)",
            ],
            max_insights: 4,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Signals {
    education: bool,
    experience: bool,
    skills: bool,
    contact: bool,
    word_count: usize,
    line_count: usize,
}

impl Signals {
    fn detect(profile: &HeuristicProfile, text: &str) -> Self {
        let lower = text.to_lowercase();
        let any = |terms: &[&str]| terms.iter().any(|t| lower.contains(t));
        Self {
            education: any(profile.education_terms),
            experience: any(profile.experience_terms),
            skills: any(profile.skills_terms),
            contact: any(profile.contact_terms),
            word_count: text.split_whitespace().count(),
            line_count: text.split('\n').count(),
        }
    }
}

fn bonus(flag: bool, points: u32) -> u32 {
    if flag {
        points
    } else {
        0
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    profile: HeuristicProfile,
}

impl HeuristicScorer {
    pub fn new(profile: HeuristicProfile) -> Self {
        Self { profile }
    }

    pub fn report(&self, text: &str) -> ScoreReport {
        let s = Signals::detect(&self.profile, text);

        let content_quality = (75 + bonus(s.education, 15) + bonus(s.experience, 10)).min(100);
        let formatting_score = if s.word_count < 1000 {
            (75 + (s.word_count / 20) as u32).min(100)
        } else {
            95
        };
        let keyword_match =
            (70 + bonus(s.skills, 10) + bonus(s.experience, 10) + bonus(s.education, 10)).min(100);
        let experience_impact = if s.experience { 85 } else { 70 };
        let skills_relevance = if s.skills { 88 } else { 75 };
        let ats_compatibility = (75
            + bonus(s.contact, 8)
            + bonus(s.line_count > 20, 8)
            + bonus(s.word_count > 200, 9))
        .min(100);

        let overall_score = (content_quality
            + formatting_score
            + keyword_match
            + experience_impact
            + skills_relevance
            + ats_compatibility)
            / 6;

        ScoreReport {
            overall_score,
            content_quality,
            formatting_score,
            keyword_match,
            experience_impact,
            skills_relevance,
            ats_compatibility,
            strengths: self.strengths(&s),
            improvements: self.improvements(&s),
            missing_keywords: owned_list(self.profile.missing_keywords),
            suggested_skills: owned_list(self.profile.suggested_skills),
            scorer_backend: "heuristic".to_string(),
            extracted_text: excerpt(text),
        }
    }

    fn strengths(&self, s: &Signals) -> Vec<String> {
        [
            (s.education, "Strong educational background clearly presented"),
            (s.experience, "Relevant work experience highlighted effectively"),
            (s.skills, "Technical skills section is comprehensive"),
            (
                s.word_count > 300,
                "Adequate content length for detailed assessment",
            ),
        ]
        .into_iter()
        .filter(|(flag, _)| *flag)
        .map(|(_, msg)| msg.to_string())
        .take(self.profile.max_insights)
        .collect()
    }

    fn improvements(&self, s: &Signals) -> Vec<String> {
        [
            (
                !s.education,
                "Add education section with degree and institution details",
            ),
            (
                !s.experience,
                "Include work experience with quantifiable achievements",
            ),
            (
                s.word_count < 200,
                "Expand resume content - aim for 400-600 words",
            ),
            (true, "Use action verbs to describe accomplishments"),
        ]
        .into_iter()
        .filter(|(flag, _)| *flag)
        .map(|(_, msg)| msg.to_string())
        .take(self.profile.max_insights)
        .collect()
    }
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
