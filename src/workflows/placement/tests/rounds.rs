use super::common::*;
use crate::workflows::placement::domain::SizeCategory;
use crate::workflows::placement::rounds::{build_rounds, SkillSignals};

#[test]
fn round_counts_are_fixed_per_size_category() {
    let empty = tags(&[]);
    let broad = tags(&["DSA", "Java", "SQL", "React", "AWS", "Docker", "Python"]);

    for skill_set in [&empty, &broad] {
        assert_eq!(build_rounds(SizeCategory::Enterprise, skill_set).len(), 4);
        assert_eq!(build_rounds(SizeCategory::MidSize, skill_set).len(), 3);
        assert_eq!(build_rounds(SizeCategory::Startup, skill_set).len(), 3);
    }
}

#[test]
fn round_labels_are_ordinal() {
    let rounds = build_rounds(SizeCategory::Enterprise, &tags(&["DSA"]));
    let labels: Vec<&str> = rounds.iter().map(|round| round.label.as_str()).collect();
    assert_eq!(labels, ["Round 1", "Round 2", "Round 3", "Round 4"]);
}

#[test]
fn enterprise_dsa_profile_gets_dsa_screening() {
    let rounds = build_rounds(SizeCategory::Enterprise, &tags(&["DSA", "Java", "SQL"]));

    assert!(rounds[0].name.contains("DSA"));
    assert!(rounds[1].topics.contains("SQL queries, Joins, Indexing"));
    assert!(rounds[1].topics.contains("Java deep-dive"));
    assert_eq!(rounds[3].name, "HR / Managerial");
}

#[test]
fn startup_web_profile_gets_practical_task() {
    let rounds = build_rounds(SizeCategory::Startup, &tags(&["React", "Node.js"]));

    assert!(rounds[0].name.contains("Practical Coding Task"));
    assert!(rounds[1].topics.contains("Discuss how you would scale it"));
}

#[test]
fn absent_clauses_are_dropped_not_left_blank() {
    // With no tags, the enterprise core-CS round keeps only its
    // unconditional language clause.
    let rounds = build_rounds(SizeCategory::Enterprise, &tags(&[]));
    assert_eq!(rounds[1].topics, "Core CS deep-dive");

    for round in build_rounds(SizeCategory::Startup, &tags(&[])) {
        assert!(!round.topics.starts_with(" · "));
        assert!(!round.topics.ends_with(" · "));
        assert!(!round.topics.contains(" ·  · "));
    }
}

#[test]
fn skill_membership_is_case_insensitive() {
    let rounds = build_rounds(SizeCategory::Enterprise, &tags(&["dsa", "java"]));
    assert!(rounds[0].name.contains("DSA"));
    assert!(rounds[1].topics.contains("Java deep-dive"));
}

#[test]
fn system_design_signal_sources() {
    let explicit = SkillSignals::derive(SizeCategory::MidSize, &tags(&["system design"]));
    assert!(explicit.has_system_design);

    let broad = SkillSignals::derive(
        SizeCategory::MidSize,
        &tags(&["A", "B", "C", "D", "E", "F"]),
    );
    assert!(broad.has_system_design);

    let enterprise = SkillSignals::derive(SizeCategory::Enterprise, &tags(&[]));
    assert!(enterprise.has_system_design);

    let narrow = SkillSignals::derive(SizeCategory::Startup, &tags(&["React"]));
    assert!(!narrow.has_system_design);
}

#[test]
fn python_deep_dive_when_no_java() {
    let signals = SkillSignals::derive(SizeCategory::MidSize, &tags(&["Python"]));
    assert_eq!(signals.deep_dive_language(), "Python");

    let both = SkillSignals::derive(SizeCategory::MidSize, &tags(&["Python", "Java"]));
    assert_eq!(both.deep_dive_language(), "Java");
}

#[test]
fn duplicate_tags_do_not_inflate_breadth() {
    // Six entries but only three distinct tags; the breadth-based system
    // design signal must not fire.
    let noisy = tags(&["React", "react", "REACT", "SQL", "sql", "DSA"]);
    assert_eq!(noisy.len(), 3);

    let signals = SkillSignals::derive(SizeCategory::Startup, &noisy);
    assert!(!signals.has_system_design);
}
