use std::sync::OnceLock;

use regex::Regex;

use super::super::domain::ResumeProfile;

/// Summary word-count band rewarded by the checklist.
const SUMMARY_MIN_WORDS: usize = 40;
const SUMMARY_MAX_WORDS: usize = 120;

/// Minimum number of distinct skills rewarded by the checklist.
const MIN_DISTINCT_SKILLS: usize = 5;

/// Verbs that signal an outcome-oriented summary.
const ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "designed",
    "improved",
    "developed",
    "created",
    "managed",
    "delivered",
    "architected",
    "launched",
    "shipped",
    "optimized",
    "implemented",
    "scaled",
    "reduced",
    "increased",
    "drove",
    "mentored",
    "refactored",
    "automated",
    "integrated",
    "deployed",
    "wrote",
    "fixed",
    "coordinated",
    "analyzed",
    "researched",
    "trained",
    "established",
];

/// Matches quantified impact: percentages, multipliers, money, or any
/// number with at least two digits (e.g. "35%", "10k", "3x", "500+", "$2M").
fn quantified_impact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+%|\d+k|\d+x|\d+\+|\$\d+|\d{2,})").expect("valid impact pattern")
    })
}

/// One independently evaluated, positively weighted checklist rule.
///
/// Rules never inspect each other's results; reordering this table must not
/// change the total score for fixed input.
pub(crate) struct ChecklistItem {
    pub label: &'static str,
    pub points: u8,
    pub predicate: fn(&ResumeProfile) -> bool,
}

/// The fixed, ordered readiness checklist. Weights sum to exactly 100.
pub(crate) const CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        label: "Name provided",
        points: 10,
        predicate: has_name,
    },
    ChecklistItem {
        label: "Email address provided",
        points: 5,
        predicate: has_email,
    },
    ChecklistItem {
        label: "Phone number provided",
        points: 5,
        predicate: has_phone,
    },
    ChecklistItem {
        label: "Summary length 40–120 words",
        points: 10,
        predicate: summary_in_band,
    },
    ChecklistItem {
        label: "Summary uses action verbs",
        points: 10,
        predicate: summary_has_action_verb,
    },
    ChecklistItem {
        label: "Experience entry with bullet points",
        points: 15,
        predicate: experience_with_bullets,
    },
    ChecklistItem {
        label: "Measurable impact in bullets",
        points: 10,
        predicate: quantified_impact,
    },
    ChecklistItem {
        label: "Complete education entry",
        points: 10,
        predicate: education_complete,
    },
    ChecklistItem {
        label: "Project listed",
        points: 10,
        predicate: has_project,
    },
    ChecklistItem {
        label: "At least 5 distinct skills",
        points: 10,
        predicate: skill_breadth,
    },
    ChecklistItem {
        label: "GitHub or LinkedIn link",
        points: 5,
        predicate: professional_link,
    },
];

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn has_name(resume: &ResumeProfile) -> bool {
    present(&resume.name)
}

fn has_email(resume: &ResumeProfile) -> bool {
    present(&resume.email)
}

fn has_phone(resume: &ResumeProfile) -> bool {
    present(&resume.phone)
}

fn summary_in_band(resume: &ResumeProfile) -> bool {
    let words = resume.summary.split_whitespace().count();
    (SUMMARY_MIN_WORDS..=SUMMARY_MAX_WORDS).contains(&words)
}

fn summary_has_action_verb(resume: &ResumeProfile) -> bool {
    let summary = resume.summary.to_lowercase();
    ACTION_VERBS.iter().any(|verb| summary.contains(verb))
}

fn experience_with_bullets(resume: &ResumeProfile) -> bool {
    resume.experience.iter().any(|entry| {
        (present(&entry.company) || present(&entry.role))
            && entry.bullets.iter().any(|bullet| present(bullet))
    })
}

fn quantified_impact(resume: &ResumeProfile) -> bool {
    let pattern = quantified_impact_pattern();

    resume
        .experience
        .iter()
        .flat_map(|entry| entry.bullets.iter())
        .chain(resume.projects.iter().map(|project| &project.description))
        .any(|text| pattern.is_match(text))
}

fn education_complete(resume: &ResumeProfile) -> bool {
    resume.education.iter().any(|entry| {
        present(&entry.institution) && present(&entry.degree) && present(&entry.field)
    })
}

fn has_project(resume: &ResumeProfile) -> bool {
    resume.projects.iter().any(|project| present(&project.name))
}

fn skill_breadth(resume: &ResumeProfile) -> bool {
    let mut distinct: Vec<String> = Vec::new();
    for skill in &resume.skills {
        let normalized = skill.trim().to_lowercase();
        if !normalized.is_empty() && !distinct.contains(&normalized) {
            distinct.push(normalized);
        }
    }
    distinct.len() >= MIN_DISTINCT_SKILLS
}

fn professional_link(resume: &ResumeProfile) -> bool {
    present(&resume.links.github) || present(&resume.links.linkedin)
}
