mod checklist;

use serde::{Deserialize, Serialize};

use super::domain::ResumeProfile;
use checklist::CHECKLIST;

/// Upper bound on the readiness score.
const MAX_SCORE: u32 = 100;

/// Stateless engine evaluating the readiness checklist over a resume.
///
/// The score is a pure function of the resume: no time, randomness, or
/// hidden state. Missing fields fail their predicates; they are never
/// treated as invalid input.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    suggestion_limit: Option<usize>,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap suggestions to the first `limit` failed items (stable truncation,
    /// checklist order preserved, never re-sorted by weight).
    pub fn with_suggestion_limit(limit: usize) -> Self {
        Self {
            suggestion_limit: Some(limit),
        }
    }

    pub fn score(&self, resume: &ResumeProfile) -> ScoreReport {
        let mut breakdown = Vec::with_capacity(CHECKLIST.len());
        let mut total: u32 = 0;

        for item in CHECKLIST {
            let passed = (item.predicate)(resume);
            if passed {
                total += u32::from(item.points);
            }
            breakdown.push(ScoreBreakdownItem {
                label: item.label.to_string(),
                points: item.points,
                passed,
            });
        }

        let mut suggestions: Vec<Suggestion> = breakdown
            .iter()
            .filter(|item| !item.passed)
            .map(|item| Suggestion {
                label: item.label.clone(),
                points: item.points,
            })
            .collect();
        if let Some(limit) = self.suggestion_limit {
            suggestions.truncate(limit);
        }

        ScoreReport {
            score: total.min(MAX_SCORE) as u8,
            breakdown,
            suggestions,
        }
    }
}

/// Pass/fail record for one checklist rule, in checklist order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdownItem {
    pub label: String,
    pub points: u8,
    pub passed: bool,
}

/// Failed checklist rule surfaced as an improvement hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub points: u8,
}

/// Readiness score with the full audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u8,
    pub breakdown: Vec<ScoreBreakdownItem>,
    pub suggestions: Vec<Suggestion>,
}

impl ScoreReport {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

/// Coarse presentation tier derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Strong,
    Developing,
    NeedsWork,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 71 {
            ScoreTier::Strong
        } else if score >= 41 {
            ScoreTier::Developing
        } else {
            ScoreTier::NeedsWork
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreTier::Strong => "Strong Resume",
            ScoreTier::Developing => "Getting There",
            ScoreTier::NeedsWork => "Needs Work",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            ScoreTier::Strong => "green",
            ScoreTier::Developing => "amber",
            ScoreTier::NeedsWork => "red",
        }
    }
}
