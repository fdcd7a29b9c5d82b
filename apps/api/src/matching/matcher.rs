//! Skill-to-job overlap scoring and skill-gap recommendations.
//!
//! Matching is exact after lowercasing and trimming: "Node.js" and "NodeJS"
//! are different skills.

use std::collections::HashSet;

use rand::Rng;

use crate::models::job::{
    JobPosting, LearningResource, MatchResult, Priority, SkillGapReport, SkillRecommendation,
};
use crate::parsing::vocabulary::TRENDING_SKILLS;

const MAX_RECOMMENDATIONS: usize = 5;
const HIGH_PRIORITY_COUNT: usize = 3;
const MIN_WEEKS: u32 = 2;
const MAX_WEEKS: u32 = 8;

fn normalized_set<S: AsRef<str>>(skills: &[S]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn title_matches(job: &JobPosting, role: &str) -> bool {
    job.title.to_lowercase().contains(&role.to_lowercase())
}

/// Integer percentage of `matched` over `required`, rounded half-up. Zero when
/// nothing is required.
fn match_percentage(matched: usize, required: usize) -> u32 {
    if required == 0 {
        return 0;
    }
    ((200 * matched + required) / (2 * required)) as u32
}

/// Scores every posting (optionally narrowed by a title substring) against
/// `user_skills` and returns them best match first. Ties keep catalog order.
pub fn match_skills<S: AsRef<str>>(
    user_skills: &[S],
    catalog: &[JobPosting],
    role_filter: Option<&str>,
) -> Vec<MatchResult> {
    let owned = normalized_set(user_skills);
    let role = role_filter.map(str::trim).filter(|r| !r.is_empty());

    let mut results: Vec<MatchResult> = catalog
        .iter()
        .filter(|job| role.map_or(true, |r| title_matches(job, r)))
        .map(|job| {
            let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job
                .required_skills
                .iter()
                .cloned()
                .partition(|skill| owned.contains(&skill.to_lowercase()));

            MatchResult {
                match_percentage: match_percentage(
                    matched_skills.len(),
                    job.required_skills.len(),
                ),
                job: job.clone(),
                matched_skills,
                missing_skills,
            }
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    results
}

fn learning_resources() -> Vec<LearningResource> {
    vec![
        LearningResource {
            kind: "course".to_string(),
            platform: "Udemy".to_string(),
        },
        LearningResource {
            kind: "documentation".to_string(),
            platform: "Official Docs".to_string(),
        },
    ]
}

/// Skills required by postings whose title contains `target_role` that the
/// candidate lacks. The estimate per skill is drawn from `rng`, so the report
/// is advisory and only reproducible with a seeded generator.
pub fn recommend_skill_gap<S: AsRef<str>, R: Rng + ?Sized>(
    current_skills: &[S],
    target_role: &str,
    catalog: &[JobPosting],
    rng: &mut R,
) -> SkillGapReport {
    let owned = normalized_set(current_skills);
    let role = target_role.trim();

    let mut seen = HashSet::new();
    // A blank role is contained in every title, so it selects the whole catalog.
    let missing_skills: Vec<String> = catalog
        .iter()
        .filter(|job| title_matches(job, role))
        .flat_map(|job| job.required_skills.iter())
        .filter(|skill| {
            let key = skill.to_lowercase();
            !owned.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect();

    let recommendations = missing_skills
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(i, skill)| SkillRecommendation {
            skill: skill.clone(),
            priority: if i < HIGH_PRIORITY_COUNT {
                Priority::High
            } else {
                Priority::Medium
            },
            estimated_time: format!("{} weeks", rng.random_range(MIN_WEEKS..=MAX_WEEKS)),
            resources: learning_resources(),
        })
        .collect();

    SkillGapReport {
        target_role: target_role.to_string(),
        missing_skills,
        recommendations,
    }
}

pub fn trending_skills() -> Vec<String> {
    TRENDING_SKILLS.iter().map(|s| s.to_string()).collect()
}
