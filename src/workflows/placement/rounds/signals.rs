use super::super::domain::{SizeCategory, SkillTagSet};

const WEB_STACK: &[&str] = &["React", "Node.js", "Express", "Next.js"];
const CLOUD_STACK: &[&str] = &["AWS", "Docker", "Kubernetes", "GCP", "Azure"];
const SQL_STACK: &[&str] = &["SQL", "PostgreSQL", "MySQL"];

/// Tag count at which system design is assumed even without an explicit tag.
const BROAD_SKILL_THRESHOLD: usize = 6;

/// Boolean facts derived from the raw skill-tag set.
///
/// Each signal is a case-insensitive exact membership test; none of them
/// mutate or reorder the underlying set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSignals {
    pub has_dsa: bool,
    pub has_web: bool,
    pub has_cloud: bool,
    pub has_sql: bool,
    pub has_java: bool,
    pub has_python: bool,
    pub has_oop: bool,
    pub has_os: bool,
    pub has_system_design: bool,
}

impl SkillSignals {
    pub fn derive(size: SizeCategory, tags: &SkillTagSet) -> Self {
        Self {
            has_dsa: tags.contains("DSA"),
            has_web: tags.contains_any(WEB_STACK),
            has_cloud: tags.contains_any(CLOUD_STACK),
            has_sql: tags.contains_any(SQL_STACK),
            has_java: tags.contains("Java"),
            has_python: tags.contains("Python"),
            has_oop: tags.contains("OOP"),
            has_os: tags.contains("OS"),
            has_system_design: tags.contains("System Design")
                || tags.len() >= BROAD_SKILL_THRESHOLD
                || size == SizeCategory::Enterprise,
        }
    }

    /// Name of the language deep-dive clause, Java taking priority.
    pub fn deep_dive_language(&self) -> &'static str {
        if self.has_java {
            "Java"
        } else if self.has_python {
            "Python"
        } else {
            "Core CS"
        }
    }
}
