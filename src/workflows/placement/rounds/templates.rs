use super::super::domain::{RoundDefinition, SizeCategory};
use super::signals::SkillSignals;

/// Separator between surviving topic clauses.
const TOPIC_SEPARATOR: &str = " · ";

/// A topic clause that only appears when its signal holds.
fn clause(present: bool, text: &str) -> Option<String> {
    present.then(|| text.to_string())
}

/// Join the surviving clauses; absent clauses are dropped, never left blank.
fn join_topics(clauses: impl IntoIterator<Item = Option<String>>) -> String {
    clauses
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(TOPIC_SEPARATOR)
}

fn round(label: String, name: String, topics: String, rationale: &str) -> RoundDefinition {
    RoundDefinition {
        label,
        name,
        topics,
        rationale: rationale.to_string(),
    }
}

fn ordinal(index: usize) -> String {
    format!("Round {index}")
}

pub(super) fn enterprise_rounds(signals: &SkillSignals) -> Vec<RoundDefinition> {
    vec![
        round(
            ordinal(1),
            if signals.has_dsa {
                "Online Test — DSA + Aptitude".to_string()
            } else {
                "Online Aptitude + Coding".to_string()
            },
            if signals.has_dsa {
                "Arrays, Strings, Sorting, Basic DP + Quant Aptitude".to_string()
            } else {
                "Quant Aptitude, Verbal, Basic Coding".to_string()
            },
            "Filters candidates at scale. Most rejections happen here. A timed environment \
             rewards preparation over brilliance — practice daily.",
        ),
        round(
            ordinal(2),
            if signals.has_dsa {
                "Technical — DSA + Core CS".to_string()
            } else {
                "Technical — Core CS + Stack".to_string()
            },
            join_topics([
                clause(
                    signals.has_dsa,
                    "Data Structures, Algorithms, Time Complexity",
                ),
                clause(signals.has_sql, "SQL queries, Joins, Indexing"),
                clause(signals.has_oop, "OOP Design, SOLID Principles"),
                clause(signals.has_os, "OS: Processes, Threading, Scheduling"),
                Some(format!("{} deep-dive", signals.deep_dive_language())),
            ]),
            "Tests fundamental knowledge your role depends on. Interviewers probe depth — \
             know your basics cold, not just surface-level.",
        ),
        round(
            ordinal(3),
            format!(
                "Technical — Projects + {}",
                if signals.has_system_design {
                    "System Design"
                } else {
                    "Architecture"
                }
            ),
            join_topics([
                Some("Walk through your best project in 3 minutes".to_string()),
                clause(
                    signals.has_system_design,
                    "Design a scalable system (e.g. URL shortener, chat app)",
                ),
                clause(signals.has_web, "Frontend/backend architecture discussion"),
                clause(signals.has_cloud, "Cloud deployment & scaling approaches"),
            ]),
            "Evaluates real-world thinking and ownership. They want to know if you can \
             build, not just answer questions.",
        ),
        round(
            ordinal(4),
            "HR / Managerial".to_string(),
            "Behavioural questions, situational scenarios, compensation discussion".to_string(),
            "Culture and communication fit check. Know your strengths, be honest about gaps, \
             and have questions prepared for the interviewer.",
        ),
    ]
}

pub(super) fn mid_size_rounds(signals: &SkillSignals) -> Vec<RoundDefinition> {
    vec![
        round(
            ordinal(1),
            "Technical Screening (Phone / Video)".to_string(),
            join_topics([
                Some(if signals.has_dsa {
                    "2–3 DSA coding problems".to_string()
                } else {
                    "Problem-solving discussion".to_string()
                }),
                clause(signals.has_sql, "SQL scenario question"),
                Some("Quick resume review".to_string()),
            ]),
            "Short calibration round to assess communication and technical baseline. First \
             impressions matter — be concise and confident.",
        ),
        round(
            ordinal(2),
            if signals.has_web {
                "Full-Stack / Practical Problem".to_string()
            } else {
                "Technical Deep-Dive + Projects".to_string()
            },
            join_topics([
                clause(
                    signals.has_web,
                    "Live coding: build a small component or API endpoint",
                ),
                clause(signals.has_dsa, "Medium-level coding problem"),
                clause(signals.has_system_design, "Light system design discussion"),
                Some("Deep-dive into your strongest project".to_string()),
            ]),
            "Tests what you can actually build under mild pressure. Real-world execution is \
             valued more than textbook knowledge here.",
        ),
        round(
            ordinal(3),
            "Culture Fit + HR".to_string(),
            "Values, team collaboration, growth mindset, offer discussion".to_string(),
            "Ownership, accountability, and curiosity matter in smaller organisations. Show \
             you can work autonomously and care about outcomes.",
        ),
    ]
}

pub(super) fn startup_rounds(signals: &SkillSignals) -> Vec<RoundDefinition> {
    vec![
        round(
            ordinal(1),
            if signals.has_web {
                "Practical Coding Task (Take-home or Live)".to_string()
            } else {
                "Take-home Assignment".to_string()
            },
            join_topics([
                Some(if signals.has_web {
                    "Build a working mini-project with your stack".to_string()
                } else {
                    "Solve a real problem relevant to the business".to_string()
                }),
                clause(signals.has_dsa, "1–2 coding questions included"),
            ]),
            "Startups skip theoretical filtering — they want proof you can build. Treat this \
             like a mini product demo.",
        ),
        round(
            ordinal(2),
            "System / Architecture Discussion".to_string(),
            join_topics([
                Some("Walk through your take-home solution".to_string()),
                Some(if signals.has_web {
                    "Discuss how you would scale it".to_string()
                } else {
                    "Explain design decisions".to_string()
                }),
                clause(signals.has_cloud, "Deployment and infrastructure choices"),
            ]),
            "Shows you can think beyond the immediate task. Founders and leads want to see \
             judgment, not just code.",
        ),
        round(
            ordinal(3),
            "Culture Fit / Founders Round".to_string(),
            "Motivation, risk tolerance, autonomy, speed of learning, compensation".to_string(),
            "In startups, culture is product. They are evaluating whether you will thrive in \
             ambiguity and contribute beyond your job description.",
        ),
    ]
}
