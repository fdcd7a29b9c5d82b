/// Characters of resume text embedded in the scoring prompt.
pub const PROMPT_TEXT_CHARS: usize = 3000;

pub fn build_scoring_prompt(resume_text: &str) -> String {
    let excerpt: String = resume_text.chars().take(PROMPT_TEXT_CHARS).collect();
    format!(
        "You are an expert resume analyzer and career coach. \
         Analyze the following resume text and provide detailed feedback.\n\n\
         Resume Text:\n{excerpt}"
    )
}

pub const SCORING_SCHEMA: &str = r#"Provide a comprehensive analysis in the following JSON format:
{
    "overall_score": <number 0-100>,
    "content_quality": <number 0-100>,
    "formatting_score": <number 0-100>,
    "keyword_match": <number 0-100>,
    "experience_impact": <number 0-100>,
    "skills_relevance": <number 0-100>,
    "ats_compatibility": <number 0-100>,
    "strengths": [<list of 4-6 specific strengths>],
    "improvements": [<list of 4-6 actionable improvements>],
    "missing_keywords": [<list of 6-8 important missing keywords/skills>],
    "suggested_skills": [<list of 5-7 skills to add based on career path>]
}

Scoring criteria:
- overall_score: Overall resume quality
- content_quality: Quality of written content, grammar, clarity
- formatting_score: Structure, readability, visual organization
- keyword_match: Presence of industry-relevant keywords
- experience_impact: How well experience demonstrates impact and achievements
- skills_relevance: Relevance and demand of listed skills
- ats_compatibility: How well it would parse through ATS systems"#;

/// Characters of resume text embedded in the improvement prompt.
pub const IMPROVE_PROMPT_TEXT_CHARS: usize = 4000;

pub fn build_improvement_prompt(resume_text: &str) -> String {
    let excerpt: String = resume_text.chars().take(IMPROVE_PROMPT_TEXT_CHARS).collect();
    format!(
        "You are an expert resume writer and career coach. Based on the following resume, \
         create an IMPROVED and ENHANCED version that:\n\n\
         1. Fixes grammar and formatting issues\n\
         2. Uses strong action verbs\n\
         3. Adds quantifiable achievements where applicable\n\
         4. Improves the professional summary\n\
         5. Optimizes for ATS (Applicant Tracking Systems)\n\
         6. Highlights key skills and accomplishments\n\
         7. Uses proper resume formatting and structure\n\n\
         Original Resume:\n{excerpt}\n\n\
         Please generate a complete, professional, improved resume in MARKDOWN format. \
         Include all sections: Contact Info, Professional Summary, Skills, Experience, \
         Education, etc. Make it compelling and achievement-focused.\n\n\
         Return ONLY the improved resume text in markdown format, no additional explanations."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = build_scoring_prompt("Jane Doe, Rust engineer");
        assert!(prompt.ends_with("Jane Doe, Rust engineer"));
    }

    #[test]
    fn test_prompt_truncates_long_text() {
        let prompt = build_scoring_prompt(&"#".repeat(5000));
        assert_eq!(prompt.matches('#').count(), PROMPT_TEXT_CHARS);
    }

    #[test]
    fn test_improvement_prompt_truncates_and_asks_for_markdown() {
        let prompt = build_improvement_prompt(&"#".repeat(6000));
        assert_eq!(prompt.matches('#').count(), IMPROVE_PROMPT_TEXT_CHARS);
        assert!(prompt.contains("MARKDOWN"));
    }
}
