//! Multi-entry sections. Both scanners walk the section line by line, open a
//! new entry on a start marker, and flush the open entry when the next marker
//! or the end of the section is reached.

use crate::models::resume::{EducationEntry, ExperienceEntry};
use crate::parsing::patterns::{
    first_match, DEGREE, DURATION, EDUCATION_SECTION_RULES, EXPERIENCE_SECTION_RULES, YEAR_SPAN,
};
use crate::parsing::vocabulary::{CORPORATE_KEYWORDS, INSTITUTION_KEYWORDS};

const ROLE_MAX_TOKENS: usize = 6;

fn section_lines(section: &str) -> impl Iterator<Item = &str> {
    section.lines().map(str::trim).filter(|l| !l.is_empty())
}

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let Some(section) = first_match(&EDUCATION_SECTION_RULES, text) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut current: Option<EducationEntry> = None;

    for line in section_lines(section) {
        if DEGREE.is_match(line) {
            entries.extend(current.take());
            current = Some(EducationEntry {
                degree: line.to_string(),
                ..Default::default()
            });
        }

        // The degree line itself may also carry the year or the institution.
        let Some(entry) = current.as_mut() else {
            continue;
        };
        if let Some(year) = YEAR_SPAN.find(line) {
            entry.year = year.as_str().to_string();
        }
        if INSTITUTION_KEYWORDS.iter().any(|k| line.contains(k)) {
            entry.institution = line.to_string();
        }
    }

    entries.extend(current);
    entries
}

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let Some(section) = first_match(&EXPERIENCE_SECTION_RULES, text) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut current: Option<ExperienceEntry> = None;

    for line in section_lines(section) {
        if let Some(duration) = DURATION.find(line) {
            entries.extend(current.take());
            current = Some(ExperienceEntry {
                duration: duration.as_str().to_string(),
                ..Default::default()
            });
            continue;
        }

        let Some(entry) = current.as_mut() else {
            continue;
        };
        if entry.role.is_empty() && looks_like_role(line) {
            entry.role = line.to_string();
        } else if entry.company.is_empty() && CORPORATE_KEYWORDS.iter().any(|k| line.contains(k))
        {
            entry.company = line.to_string();
        } else {
            entry.push_detail(line);
        }
    }

    entries.extend(current);
    entries
}

fn looks_like_role(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
        && line.split_whitespace().count() <= ROLE_MAX_TOKENS
}
