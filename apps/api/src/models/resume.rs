use serde::{Deserialize, Serialize};

/// Placeholder for a field or skill category the parser could not detect.
pub const NOT_FOUND: &str = "Not Found";
/// Placeholder for an undetected location.
pub const NOT_SPECIFIED: &str = "Not Specified";
/// Title used when no role phrase is found.
pub const DEFAULT_TITLE: &str = "Professional";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub location: String,
    pub email: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: String::new(),
            location: NOT_SPECIFIED.to_string(),
            email: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub duration: String,
    pub role: String,
    pub company: String,
    pub details: String,
}

impl ExperienceEntry {
    /// Appends a line to the free-text details, space-joined.
    pub fn push_detail(&mut self, line: &str) {
        if !self.details.is_empty() {
            self.details.push(' ');
        }
        self.details.push_str(line);
    }
}

/// Skills grouped by category. An empty category holds the single `NOT_FOUND` sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    pub programming_languages: Vec<String>,
    pub web_technologies: Vec<String>,
    pub tools_and_technologies: Vec<String>,
    pub soft_skills: Vec<String>,
}

impl Default for SkillSet {
    fn default() -> Self {
        Self {
            programming_languages: vec![NOT_FOUND.to_string()],
            web_technologies: vec![NOT_FOUND.to_string()],
            tools_and_technologies: vec![NOT_FOUND.to_string()],
            soft_skills: vec![NOT_FOUND.to_string()],
        }
    }
}

impl SkillSet {
    fn categories(&self) -> [&Vec<String>; 4] {
        [
            &self.programming_languages,
            &self.web_technologies,
            &self.tools_and_technologies,
            &self.soft_skills,
        ]
    }

    /// Every detected skill across categories, sentinels excluded.
    pub fn detected(&self) -> Vec<String> {
        self.categories()
            .into_iter()
            .flatten()
            .filter(|s| s.as_str() != NOT_FOUND)
            .cloned()
            .collect()
    }

    pub fn detected_count(&self) -> usize {
        self.categories()
            .into_iter()
            .flatten()
            .filter(|s| s.as_str() != NOT_FOUND)
            .count()
    }
}

/// Structured view of a free-text resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    pub contact: ContactInfo,
    pub about_me: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillSet,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            name: NOT_FOUND.to_string(),
            title: DEFAULT_TITLE.to_string(),
            contact: ContactInfo::default(),
            about_me: String::new(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: SkillSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_uses_sentinels() {
        let record = ResumeRecord::default();
        assert_eq!(record.name, NOT_FOUND);
        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.contact.location, NOT_SPECIFIED);
        assert!(record.contact.phone.is_empty());
        assert_eq!(record.skills.soft_skills, vec![NOT_FOUND.to_string()]);
    }

    #[test]
    fn test_detected_skips_sentinels() {
        let skills = SkillSet {
            programming_languages: vec!["Rust".to_string(), "Go".to_string()],
            web_technologies: vec![NOT_FOUND.to_string()],
            tools_and_technologies: vec!["Docker".to_string()],
            soft_skills: vec![NOT_FOUND.to_string()],
        };
        assert_eq!(skills.detected(), vec!["Rust", "Go", "Docker"]);
        assert_eq!(skills.detected_count(), 3);
        assert_eq!(SkillSet::default().detected_count(), 0);
    }

    #[test]
    fn test_push_detail_space_joins() {
        let mut entry = ExperienceEntry::default();
        entry.push_detail("Built the billing service");
        entry.push_detail("Mentored two engineers");
        assert_eq!(
            entry.details,
            "Built the billing service Mentored two engineers"
        );
    }

    #[test]
    fn test_record_json_field_names() {
        let json = serde_json::to_value(ResumeRecord::default()).unwrap();
        assert!(json.get("about_me").is_some());
        assert!(json["skills"].get("tools_and_technologies").is_some());
        let back: ResumeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, ResumeRecord::default());
    }
}
