//! Fixed knowledge base for resume structuring.
//!
//! Skill categories are reported in the order declared here, not in the order
//! the terms appear in the resume. Bump `KNOWLEDGE_BASE_VERSION` whenever a
//! list changes so stored records can be traced to the tables that built them.

pub const KNOWLEDGE_BASE_VERSION: u32 = 1;

pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "TypeScript",
    "Scala",
    "R",
    "MATLAB",
    "SQL",
    "Dart",
];

pub const WEB_TECHNOLOGIES: &[&str] = &[
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "ASP.NET",
    "Bootstrap",
    "Tailwind CSS",
    "jQuery",
    "Next.js",
    "Nuxt.js",
    "Redux",
    "GraphQL",
    "REST API",
];

pub const TOOLS_AND_TECHNOLOGIES: &[&str] = &[
    "Git",
    "GitHub",
    "GitLab",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "AWS",
    "Azure",
    "GCP",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Elasticsearch",
    "Kafka",
    "RabbitMQ",
    "Terraform",
    "Ansible",
    "VS Code",
    "IntelliJ",
    "Figma",
    "Jira",
    "Postman",
    "Linux",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Leadership",
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Critical Thinking",
    "Time Management",
    "Adaptability",
    "Creativity",
    "Analytical Thinking",
    "Collaboration",
    "Project Management",
];

/// Lines containing any of these (case-insensitive) are never taken as the candidate name.
pub const NAME_EXCLUSIONS: &[&str] = &["resume", "cv", "curriculum"];

/// Case-sensitive markers of an institution line in the education section.
pub const INSTITUTION_KEYWORDS: &[&str] = &["University", "College", "Institute", "School"];

/// Case-sensitive markers of a company line in the experience section.
pub const CORPORATE_KEYWORDS: &[&str] = &[
    "Inc",
    "Ltd",
    "LLC",
    "Corp",
    "Company",
    "Technologies",
    "Solutions",
];

/// Market-wide skills surfaced by the trending endpoint.
pub const TRENDING_SKILLS: &[&str] = &[
    "TypeScript",
    "Next.js",
    "Docker",
    "Kubernetes",
    "GraphQL",
    "React Native",
    "Tailwind CSS",
    "FastAPI",
];
