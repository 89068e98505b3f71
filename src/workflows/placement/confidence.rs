use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Score delta attached to each skill marked as known.
const KNOWN_SKILL_BONUS: i32 = 2;

/// Binary per-skill confidence flag. Skills start as `Practice` until the
/// candidate first marks them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillConfidence {
    Know,
    #[default]
    Practice,
}

impl SkillConfidence {
    pub const fn label(self) -> &'static str {
        match self {
            SkillConfidence::Know => "know",
            SkillConfidence::Practice => "practice",
        }
    }

    const fn toggled(self) -> Self {
        match self {
            SkillConfidence::Know => SkillConfidence::Practice,
            SkillConfidence::Practice => SkillConfidence::Know,
        }
    }
}

/// Per-skill confidence state, "state in, state out".
///
/// The board is the only mutable entity around a stored analysis; the base
/// score and breakdown are never recomputed by toggling. Keys are compared
/// case-insensitively. The adjustment is derived from the current state, so
/// toggling a tag twice restores the previous adjusted score exactly, no
/// matter how many unrelated tags were toggled in between, and clamping at
/// read time is non-sticky.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfidenceBoard {
    entries: BTreeMap<String, SkillConfidence>,
}

impl ConfidenceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confidence(&self, tag: &str) -> SkillConfidence {
        self.entries
            .get(&normalize(tag))
            .copied()
            .unwrap_or_default()
    }

    /// Flip the flag for one tag, returning the new state.
    #[must_use]
    pub fn toggle(mut self, tag: &str) -> Self {
        let key = normalize(tag);
        if key.is_empty() {
            return self;
        }
        let next = self.confidence(tag).toggled();
        self.entries.insert(key, next);
        self
    }

    pub fn known_count(&self) -> usize {
        self.entries
            .values()
            .filter(|flag| **flag == SkillConfidence::Know)
            .count()
    }

    /// Base score plus the per-skill deltas, clamped to `[0, 100]`.
    pub fn adjusted_score(&self, base_score: u8) -> u8 {
        let adjustment = KNOWN_SKILL_BONUS * self.known_count() as i32;
        (i32::from(base_score) + adjustment).clamp(0, 100) as u8
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}
