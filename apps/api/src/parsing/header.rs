//! Single-value fields found near the top of a resume: name, title, contact, summary.

use crate::models::resume::{ContactInfo, DEFAULT_TITLE, NOT_FOUND, NOT_SPECIFIED};
use crate::parsing::patterns::{
    first_match, EMAIL_RULES, LOCATION_RULES, PHONE_RULES, SUMMARY_RULES, TITLE_RULES,
};
use crate::parsing::vocabulary::NAME_EXCLUSIONS;

const NAME_SCAN_LINES: usize = 5;
const NAME_MAX_TOKENS: usize = 4;
const NAME_MIN_CHARS: usize = 4;
const SUMMARY_MAX_CHARS: usize = 500;

/// First short, digit-free line among the opening lines that isn't a document heading.
pub fn extract_name(text: &str) -> String {
    text.split('\n')
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| is_name_candidate(line))
        .map(str::to_string)
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

fn is_name_candidate(line: &str) -> bool {
    if line.is_empty() || line.split_whitespace().count() > NAME_MAX_TOKENS {
        return false;
    }
    if line.chars().any(char::is_numeric) || line.chars().count() < NAME_MIN_CHARS {
        return false;
    }
    let lower = line.to_lowercase();
    !NAME_EXCLUSIONS.iter().any(|word| lower.contains(word))
}

pub fn extract_title(text: &str) -> String {
    first_match(&TITLE_RULES, text)
        .map(title_case)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

pub fn extract_contact(text: &str) -> ContactInfo {
    let email = first_match(&EMAIL_RULES, text).unwrap_or_default();
    let phone = first_match(&PHONE_RULES, text).unwrap_or_default();
    let location = first_match(&LOCATION_RULES, text)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(NOT_SPECIFIED);

    ContactInfo {
        phone: phone.to_string(),
        location: location.to_string(),
        email: email.to_string(),
    }
}

pub fn extract_summary(text: &str) -> String {
    first_match(&SUMMARY_RULES, text)
        .map(|body| {
            body.split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .chars()
                .take(SUMMARY_MAX_CHARS)
                .collect()
        })
        .unwrap_or_default()
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_first_qualifying_line() {
        let text = "RESUME\n\nJane Doe\nSenior Software Engineer at Initech";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_name_skips_lines_with_digits_or_too_many_tokens() {
        let text = "Call 555 0134\nA very long opening line with many words\nAl\nMaria Garcia";
        assert_eq!(extract_name(text), "Maria Garcia");
    }

    #[test]
    fn test_name_only_scans_first_five_lines() {
        let text = "1\n2\n3\n4\n5\nJohn Smith";
        assert_eq!(extract_name(text), NOT_FOUND);
    }

    #[test]
    fn test_name_rejects_curriculum_heading() {
        assert_eq!(extract_name("Curriculum Vitae"), NOT_FOUND);
    }

    #[test]
    fn test_title_is_title_cased() {
        assert_eq!(
            extract_title("experienced FULL STACK developer"),
            "Full Stack Developer"
        );
    }

    #[test]
    fn test_title_named_role() {
        assert_eq!(
            extract_title("Worked as a product manager for 4 years"),
            "Product Manager"
        );
    }

    #[test]
    fn test_title_default() {
        assert_eq!(extract_title("Chef and restaurateur"), DEFAULT_TITLE);
    }

    #[test]
    fn test_contact_extraction() {
        let text = "Jane Doe\njane.doe@example.com | 555-123-4567\nAddress: 12 Pike St, Seattle";
        let contact = extract_contact(text);
        assert_eq!(contact.email, "jane.doe@example.com");
        assert_eq!(contact.phone, "555-123-4567");
        assert_eq!(contact.location, "12 Pike St, Seattle");
    }

    #[test]
    fn test_contact_defaults() {
        let contact = extract_contact("no contact details here");
        assert_eq!(contact, ContactInfo::default());
    }

    #[test]
    fn test_summary_collapses_whitespace() {
        let body = "Backend engineer   with eight years building payment systems, \
                    mentoring engineers and leading platform migrations across teams.";
        let text = format!("PROFESSIONAL SUMMARY:\n{body}\nEXPERIENCE");
        let summary = extract_summary(&text);
        assert!(summary.starts_with("Backend engineer with eight years"));
        assert!(!summary.contains("  "));
    }

    #[test]
    fn test_summary_requires_minimum_body() {
        assert_eq!(extract_summary("SUMMARY\nToo short to count."), "");
    }

    #[test]
    fn test_summary_truncated_to_limit() {
        let body = "word ".repeat(200);
        let text = format!("Objective: {body}");
        assert!(extract_summary(&text).chars().count() <= SUMMARY_MAX_CHARS);
    }
}
