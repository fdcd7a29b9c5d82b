use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::{SkillSet, NOT_FOUND};
use crate::parsing::vocabulary::{
    PROGRAMMING_LANGUAGES, SOFT_SKILLS, TOOLS_AND_TECHNOLOGIES, WEB_TECHNOLOGIES,
};

/// Whole-word, case-insensitive membership test for a fixed term list.
///
/// A term counts as a whole word when it is not glued to an ASCII letter,
/// digit or underscore on either side, which keeps `Java` out of
/// `JavaScript` while still matching `C++`, `C#` and `Node.js`.
struct VocabularyMatcher {
    terms: Vec<(&'static str, Regex)>,
}

impl VocabularyMatcher {
    fn new(vocabulary: &[&'static str]) -> Self {
        let terms = vocabulary
            .iter()
            .map(|&term| (term, Regex::new(&term_pattern(term)).unwrap()))
            .collect();
        Self { terms }
    }

    /// Matched terms in vocabulary order, or the `NOT_FOUND` sentinel.
    fn scan(&self, text: &str) -> Vec<String> {
        let found: Vec<String> = self
            .terms
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(term, _)| term.to_string())
            .collect();

        if found.is_empty() {
            vec![NOT_FOUND.to_string()]
        } else {
            found
        }
    }
}

fn term_pattern(term: &str) -> String {
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    format!(r"(?i)(?:^|[^A-Za-z0-9_]){body}(?:[^A-Za-z0-9_]|$)")
}

lazy_static! {
    static ref LANGUAGES: VocabularyMatcher = VocabularyMatcher::new(PROGRAMMING_LANGUAGES);
    static ref WEB: VocabularyMatcher = VocabularyMatcher::new(WEB_TECHNOLOGIES);
    static ref TOOLS: VocabularyMatcher = VocabularyMatcher::new(TOOLS_AND_TECHNOLOGIES);
    static ref SOFT: VocabularyMatcher = VocabularyMatcher::new(SOFT_SKILLS);
}

pub fn extract_skills(text: &str) -> SkillSet {
    SkillSet {
        programming_languages: LANGUAGES.scan(text),
        web_technologies: WEB.scan(text),
        tools_and_technologies: TOOLS.scan(text),
        soft_skills: SOFT.scan(text),
    }
}
