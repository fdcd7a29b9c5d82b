use serde::{Deserialize, Serialize};

/// An open position from the in-process catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "job_title")]
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub location: String,
}

/// A posting scored against a candidate's skills. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skill: String,
    pub priority: Priority,
    /// Advisory only: randomly drawn, not reproducible.
    pub estimated_time: String,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub target_role: String,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<SkillRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_flattens_job() {
        let result = MatchResult {
            job: JobPosting {
                title: "Backend Engineer".to_string(),
                company: "Microsoft".to_string(),
                required_skills: vec!["Python".to_string()],
                salary_range: "$145k - $195k".to_string(),
                location: "Redmond, WA".to_string(),
            },
            match_percentage: 100,
            matched_skills: vec!["Python".to_string()],
            missing_skills: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["job_title"], "Backend Engineer");
        assert_eq!(json["match_percentage"], 100);
        let back: MatchResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""high""#);
        assert_eq!(
            serde_json::to_string(&Priority::Medium).unwrap(),
            r#""medium""#
        );
    }

    #[test]
    fn test_learning_resource_type_field() {
        let json = serde_json::to_value(LearningResource {
            kind: "course".to_string(),
            platform: "Udemy".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "course");
    }
}
