// Resume structuring: raw text in, ResumeRecord out.
// Extraction is best-effort; a field that no rule recognises falls back to its sentinel.

pub mod analysis;
pub mod docx;
pub mod extractor;
pub mod handlers;
pub mod header;
pub mod patterns;
pub mod sections;
pub mod skills;
pub mod vocabulary;

use tracing::debug;

use crate::models::resume::ResumeRecord;

/// Builds a `ResumeRecord` from free-form resume text. Never fails.
pub fn structure(raw_text: &str) -> ResumeRecord {
    let record = ResumeRecord {
        name: header::extract_name(raw_text),
        title: header::extract_title(raw_text),
        contact: header::extract_contact(raw_text),
        about_me: header::extract_summary(raw_text),
        education: sections::extract_education(raw_text),
        experience: sections::extract_experience(raw_text),
        skills: skills::extract_skills(raw_text),
    };

    debug!(
        kb_version = vocabulary::KNOWLEDGE_BASE_VERSION,
        education = record.education.len(),
        experience = record.experience.len(),
        skills = record.skills.detected_count(),
        "Structured resume text ({} chars)",
        raw_text.len()
    );

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{NOT_FOUND, NOT_SPECIFIED};

    const SAMPLE_RESUME: &str = "\
Jane Doe
Senior Software Engineer
jane.doe@example.com | (415) 555-0134 | San Francisco, CA

PROFESSIONAL SUMMARY
Backend engineer with eight years of experience designing payment platforms, leading small teams and mentoring new hires.

WORK EXPERIENCE
Jan 2020 - Present
Staff Engineer
Acme Technologies Inc
Led migration of 40 services to Kubernetes

EDUCATION
Bachelor of Science in Computer Science
University of Washington, 2012 - 2016

SKILLS
Python, Rust, SQL, React, Docker, Git, Leadership";

    #[test]
    fn test_structure_empty_text_yields_defaults() {
        let record = structure("");
        assert_eq!(record, ResumeRecord::default());
        assert_eq!(record.name, NOT_FOUND);
        assert_eq!(record.title, "Professional");
        assert_eq!(record.contact.location, NOT_SPECIFIED);
        assert!(record.education.is_empty());
        assert!(record.experience.is_empty());
        assert_eq!(record.skills.programming_languages, vec![NOT_FOUND]);
    }

    #[test]
    fn test_structure_sample_resume() {
        let record = structure(SAMPLE_RESUME);

        assert_eq!(record.name, "Jane Doe");
        // Rules match a qualifier directly followed by the role noun.
        assert_eq!(record.title, "Software Engineer");
        assert_eq!(record.contact.email, "jane.doe@example.com");
        assert_eq!(record.contact.phone, "(415) 555-0134");
        assert_eq!(record.contact.location, "San Francisco, CA");
        assert!(record.about_me.starts_with("Backend engineer"));

        assert_eq!(record.education.len(), 1);
        assert!(record.education[0].degree.starts_with("Bachelor of Science"));
        assert_eq!(
            record.education[0].institution,
            "University of Washington, 2012 - 2016"
        );
        assert_eq!(record.education[0].year, "2012 - 2016");

        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].role, "Staff Engineer");
        assert_eq!(record.experience[0].company, "Acme Technologies Inc");

        assert_eq!(
            record.skills.programming_languages,
            vec!["Python", "Rust", "SQL"]
        );
        assert_eq!(record.skills.web_technologies, vec!["React"]);
        assert_eq!(record.skills.soft_skills, vec!["Leadership"]);
    }

    #[test]
    fn test_structure_is_deterministic() {
        assert_eq!(structure(SAMPLE_RESUME), structure(SAMPLE_RESUME));
    }

    #[test]
    fn test_structured_record_survives_json() {
        let record = structure(SAMPLE_RESUME);
        let json = serde_json::to_string(&record).unwrap();
        let back: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_summary_opening_with_experienced_keeps_experience_section() {
        let text = "Jane Doe\nSUMMARY\nExperienced engineer building payment systems.\nSKILLS\nRust, Python\nEXPERIENCE\nJan 2020 - Present\nStaff Engineer\nAcme Corp\n";
        let record = structure(text);
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].duration, "Jan 2020 - Present");
        assert_eq!(record.experience[0].role, "Staff Engineer");
        assert_eq!(record.experience[0].company, "Acme Corp");
    }

    #[test]
    fn test_prose_starting_with_academic_keeps_education_section() {
        let text = "Jane Doe\nAcademically strong engineer\nEXPERIENCE\nJan 2020 - Present\nStaff Engineer\nEDUCATION\nBachelor of Science\nState University\n";
        let record = structure(text);
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].degree, "Bachelor of Science");
        assert_eq!(record.education[0].institution, "State University");
        assert_eq!(record.experience.len(), 1);
    }
}
