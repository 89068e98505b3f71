mod signals;
mod templates;

pub use signals::SkillSignals;

use super::domain::{RoundDefinition, SizeCategory, SkillTagSet};

/// Build the fixed-length, fixed-order interview plan for a company tier.
///
/// Pure and total: every `(size, tags)` pair yields a plan. Enterprise plans
/// always have 4 rounds, Mid-size and Startup always 3.
pub fn build_rounds(size: SizeCategory, tags: &SkillTagSet) -> Vec<RoundDefinition> {
    let signals = SkillSignals::derive(size, tags);

    match size {
        SizeCategory::Enterprise => templates::enterprise_rounds(&signals),
        SizeCategory::MidSize => templates::mid_size_rounds(&signals),
        SizeCategory::Startup => templates::startup_rounds(&signals),
    }
}
