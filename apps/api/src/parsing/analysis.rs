use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

const BASE_SCORE: usize = 70;
const EXPERIENCE_WEIGHT: usize = 5;
const EDUCATION_WEIGHT: usize = 3;
const COMPLETENESS_WITH_SUMMARY: u32 = 95;
const COMPLETENESS_WITHOUT_SUMMARY: u32 = 80;

/// Summary statistics over a stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordAnalysis {
    pub overall_score: u32,
    pub total_skills: usize,
    pub experience_count: usize,
    pub education_count: usize,
    pub profile_completeness: u32,
}

pub fn analyze_record(record: &ResumeRecord) -> RecordAnalysis {
    let total_skills = record.skills.detected_count();
    let experience_count = record.experience.len();
    let education_count = record.education.len();

    let raw = BASE_SCORE
        + total_skills
        + EXPERIENCE_WEIGHT * experience_count
        + EDUCATION_WEIGHT * education_count;

    let profile_completeness = if record.about_me.trim().is_empty() {
        COMPLETENESS_WITHOUT_SUMMARY
    } else {
        COMPLETENESS_WITH_SUMMARY
    };

    RecordAnalysis {
        overall_score: raw.min(100) as u32,
        total_skills,
        experience_count,
        education_count,
        profile_completeness,
    }
}
