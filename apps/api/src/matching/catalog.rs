use crate::models::job::JobPosting;

/// (title, company, required skills, salary range, location)
type PostingRow = (
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
);

const POSTINGS: &[PostingRow] = &[
    (
        "Senior Frontend Developer",
        "Google",
        &["JavaScript", "React", "TypeScript", "Node.js"],
        "$150k - $200k",
        "Mountain View, CA",
    ),
    (
        "Full Stack Engineer",
        "Meta",
        &["JavaScript", "React", "Python", "GraphQL"],
        "$160k - $210k",
        "Menlo Park, CA",
    ),
    (
        "React Developer",
        "Amazon",
        &["JavaScript", "React", "AWS", "Redux"],
        "$140k - $190k",
        "Seattle, WA",
    ),
    (
        "Backend Engineer",
        "Microsoft",
        &["Python", "Django", "PostgreSQL", "Docker"],
        "$145k - $195k",
        "Redmond, WA",
    ),
    (
        "DevOps Engineer",
        "Netflix",
        &["Kubernetes", "Docker", "AWS", "Jenkins", "Terraform"],
        "$155k - $205k",
        "Los Gatos, CA",
    ),
    (
        "Mobile Developer",
        "Apple",
        &["Swift", "iOS", "React Native", "Firebase"],
        "$165k - $215k",
        "Cupertino, CA",
    ),
    (
        "Data Engineer",
        "Airbnb",
        &["Python", "Spark", "SQL", "Hadoop", "Kafka"],
        "$150k - $200k",
        "San Francisco, CA",
    ),
    (
        "Cloud Architect",
        "Oracle",
        &["AWS", "Azure", "Kubernetes", "Terraform", "Python"],
        "$170k - $220k",
        "Austin, TX",
    ),
    (
        "UI/UX Engineer",
        "Adobe",
        &["JavaScript", "React", "CSS", "Figma", "TypeScript"],
        "$135k - $185k",
        "San Jose, CA",
    ),
    (
        "Machine Learning Engineer",
        "Tesla",
        &["Python", "TensorFlow", "PyTorch", "Scikit-learn", "Docker"],
        "$175k - $230k",
        "Palo Alto, CA",
    ),
    (
        "Software Engineer",
        "Spotify",
        &["Java", "Kotlin", "React", "GraphQL", "Docker"],
        "$140k - $190k",
        "New York, NY",
    ),
    (
        "Frontend Developer",
        "Uber",
        &["JavaScript", "React", "Redux", "CSS"],
        "$135k - $180k",
        "San Francisco, CA",
    ),
    (
        "Solutions Architect",
        "Salesforce",
        &["AWS", "Microservices", "Node.js", "Docker", "Kubernetes"],
        "$160k - $210k",
        "San Francisco, CA",
    ),
    (
        "Platform Engineer",
        "Stripe",
        &["Ruby", "Go", "Kubernetes", "Terraform", "AWS"],
        "$165k - $220k",
        "San Francisco, CA",
    ),
    (
        "Web Developer",
        "Shopify",
        &["JavaScript", "React", "Node.js", "GraphQL", "MongoDB"],
        "$130k - $175k",
        "Remote",
    ),
];

/// The built-in job catalog, in display order.
pub fn default_catalog() -> Vec<JobPosting> {
    POSTINGS
        .iter()
        .map(|&(title, company, skills, salary, location)| JobPosting {
            title: title.to_string(),
            company: company.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            salary_range: salary.to_string(),
            location: location.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_fifteen_postings() {
        assert_eq!(default_catalog().len(), 15);
    }

    #[test]
    fn test_every_posting_requires_skills() {
        assert!(default_catalog()
            .iter()
            .all(|job| !job.required_skills.is_empty()));
    }

    #[test]
    fn test_catalog_order() {
        let catalog = default_catalog();
        assert_eq!(catalog[0].title, "Senior Frontend Developer");
        assert_eq!(catalog[14].company, "Shopify");
    }
}
