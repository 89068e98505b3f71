use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored placement analyses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

/// Coarse company-size classification driving round-template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeCategory {
    Enterprise,
    #[serde(rename = "Mid-size")]
    MidSize,
    Startup,
}

impl SizeCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SizeCategory::Enterprise => "Enterprise",
            SizeCategory::MidSize => "Mid-size",
            SizeCategory::Startup => "Startup",
        }
    }

    /// Approximate headcount band shown alongside the classification.
    pub const fn size_range(self) -> &'static str {
        match self {
            SizeCategory::Enterprise => "2,000+",
            SizeCategory::MidSize => "200–2,000",
            SizeCategory::Startup => "< 200",
        }
    }

    /// What hiring at this tier typically optimizes for.
    pub const fn hiring_focus(self) -> &'static str {
        match self {
            SizeCategory::Enterprise => {
                "Strong emphasis on DSA fundamentals, core CS subjects (OS, DBMS, Networks), \
                 and system design. Candidates are expected to demonstrate algorithmic thinking \
                 and structured communication. Multiple rounds — patience and consistency matter."
            }
            SizeCategory::MidSize => {
                "Balanced focus between technical depth and real-world problem solving. Expect \
                 coding problems, architecture discussions, and questions about past projects. \
                 Culture fit and ownership mindset are valued."
            }
            SizeCategory::Startup => {
                "Practical execution over theoretical depth. Expect take-home tasks, fast \
                 prototyping discussions, and questions around your stack experience. Cultural \
                 alignment and initiative are weighted heavily in decision-making."
            }
        }
    }
}

/// Case-insensitive, deduplicated set of skill tags.
///
/// Tags keep their original casing and insertion order for display;
/// membership tests and deduplication compare lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTagSet {
    tags: Vec<String>,
}

impl SkillTagSet {
    pub fn new(raw: impl IntoIterator<Item = String>) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for tag in raw {
            let trimmed = tag.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !tags.iter().any(|seen| seen.eq_ignore_ascii_case(trimmed)) {
                tags.push(trimmed.to_string());
            }
        }
        Self { tags }
    }

    /// Case-insensitive exact membership test.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|seen| seen.eq_ignore_ascii_case(tag))
    }

    pub fn contains_any(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|candidate| self.contains(candidate))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

/// Company metadata resolved from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub industry: String,
    pub size_category: SizeCategory,
}

/// Classification envelope handed to callers, including the fallback case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIntel {
    pub company_name: String,
    pub industry: String,
    pub size_category: SizeCategory,
    pub size_range: String,
    pub hiring_focus: String,
    pub is_known: bool,
}

/// One interview round in a generated plan. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDefinition {
    pub label: String,
    pub name: String,
    pub topics: String,
    pub rationale: String,
}

/// Structured resume handed to the scoring engine.
///
/// Every field defaults so that partially filled resumes deserialize cleanly;
/// missing data fails checklist predicates rather than the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: ProfessionalLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub graduation_year: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalLinks {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub portfolio: String,
}

/// Timestamp metadata attached when an analysis is stored. Never an input to
/// scoring; the engine stays a pure function of the request data.
pub type AnalyzedAt = DateTime<Utc>;
