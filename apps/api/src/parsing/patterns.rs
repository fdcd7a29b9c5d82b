//! Ordered extraction rules for resume fields.
//!
//! Each field owns a list of rules tried in priority order; the first rule
//! that matches anywhere in the text wins. A rule yields capture group 1 when
//! its pattern has one, otherwise the whole match.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

pub struct Rule {
    pub label: &'static str,
    pub regex: Regex,
}

impl Rule {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = self.regex.captures(text)?;
        caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str())
    }
}

/// Runs `rules` in order and returns the first hit.
pub fn first_match<'t>(rules: &[Rule], text: &'t str) -> Option<&'t str> {
    rules.iter().find_map(|rule| {
        let found = rule.find(text)?;
        trace!(rule = rule.label, "extraction rule matched");
        Some(found)
    })
}

const MONTH: &str = r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?";
const YEAR: &str = r"(?:19|20)\d{2}";
const RANGE_DASH: &str = r"\s*(?:-|–|—|to)\s*";

const EDUCATION_HEADER: &str =
    r"(?:EDUCATION(?:AL BACKGROUND)?|ACADEMIC(?:S| BACKGROUND)?|QUALIFICATIONS?)";
const EXPERIENCE_HEADER: &str = r"(?:PROFESSIONAL EXPERIENCE|WORK EXPERIENCE|WORK HISTORY|EXPERIENCE|EMPLOYMENT(?: HISTORY)?)";
// A section-ending header stands alone or is followed by a colon.
const HEADER_END: &str = r"[ \t]*(?::|$)";

lazy_static! {
    pub static ref TITLE_RULES: Vec<Rule> = vec![
        Rule::new(
            "qualified_role",
            r"(?i)\b(?:software|web|full stack|frontend|backend|data|senior|junior)\s+(?:developer|engineer|analyst|scientist)",
        ),
        Rule::new(
            "named_role",
            r"(?i)\b(?:project manager|product manager|business analyst)",
        ),
        Rule::new(
            "generic_role",
            r"(?i)\b(?:designer|architect|consultant|specialist)",
        ),
    ];

    pub static ref EMAIL_RULES: Vec<Rule> = vec![Rule::new(
        "email",
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
    )];

    pub static ref PHONE_RULES: Vec<Rule> = vec![
        Rule::new(
            "us_hyphenated",
            r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        ),
        Rule::new("international_plain", r"\+?\d{1,3}[-.\s]?\d{10}"),
        Rule::new("us_parenthesized", r"\(\d{3}\)\s*\d{3}[-.\s]?\d{4}"),
    ];

    pub static ref LOCATION_RULES: Vec<Rule> = vec![
        Rule::new("labelled", r"(?i)\b(?:Location|Address|City)[\s:]+([^\n]+)"),
        Rule::new("city_state", r"([A-Z][a-z]+(?:[ \t][A-Z][a-z]+)*,[ \t]*[A-Z]{2})\b"),
        Rule::new("city_country", r"([A-Z][a-z]+,[ \t]*[A-Z][a-z]+)"),
    ];

    pub static ref SUMMARY_RULES: Vec<Rule> = vec![Rule::new(
        "summary_header",
        r"(?i)\b(?:PROFESSIONAL SUMMARY|SUMMARY|ABOUT ME|OBJECTIVE|PROFILE)[\s:]+([^\n]{100,500})",
    )];

    /// A line holding only the header (optional trailing colon) first, then
    /// the header anywhere in the text.
    pub static ref EDUCATION_SECTION_RULES: Vec<Rule> = vec![
        Rule::new(
            "line_header",
            &format!(r"(?ims)^[ \t]*{EDUCATION_HEADER}[ \t]*:?[ \t]*$(.*?)(?:^[ \t]*(?:{EXPERIENCE_HEADER}|SKILLS|TECHNICAL SKILLS|PROJECTS){HEADER_END}|\z)"),
        ),
        Rule::new(
            "inline_header",
            r"(?is)\b(?:EDUCATION|ACADEMIC|QUALIFICATION)(.*?)(?:\b(?:EXPERIENCE|WORK|SKILLS|PROJECTS)|\z)",
        ),
    ];

    pub static ref EXPERIENCE_SECTION_RULES: Vec<Rule> = vec![
        Rule::new(
            "line_header",
            &format!(r"(?ims)^[ \t]*{EXPERIENCE_HEADER}[ \t]*:?[ \t]*$(.*?)(?:^[ \t]*(?:{EDUCATION_HEADER}|SKILLS|TECHNICAL SKILLS|PROJECTS){HEADER_END}|\z)"),
        ),
        Rule::new(
            "inline_header",
            r"(?is)\b(?:WORK EXPERIENCE|WORK HISTORY|EXPERIENCE|EMPLOYMENT)(.*?)(?:\b(?:EDUCATION|SKILLS|PROJECTS)|\z)",
        ),
    ];

    pub static ref DEGREE: Regex = Regex::new(
        r"(?i)\b(?:Bachelor|Master|Associate)(?:'?s)?\b|\b(?:Ph\.?\s?D|MBA|B\.?Tech|M\.?Tech|B\.?Sc|M\.?Sc|BCA|MCA|Diplomas?|Certificates?)\b"
    ).unwrap();

    pub static ref YEAR_SPAN: Regex = Regex::new(&format!(
        r"(?i)\b{YEAR}{RANGE_DASH}(?:{YEAR}\b|Present|Current)|\b{YEAR}\b"
    )).unwrap();

    pub static ref DURATION: Regex = Regex::new(&format!(
        r"(?i)\b{MONTH}\s+{YEAR}{RANGE_DASH}(?:Present|Current|{MONTH}\s+{YEAR})"
    )).unwrap();
}
