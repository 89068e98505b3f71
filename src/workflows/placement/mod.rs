//! Deterministic placement readiness analysis.
//!
//! Four cooperating rule engines: company classification against an ordered
//! directory, interview-round planning from derived skill signals, checklist
//! scoring of a structured resume, and reversible per-skill confidence
//! adjustments. All of them are pure, synchronous functions; the service and
//! repository layers only orchestrate and persist their outputs.

pub mod company;
pub mod confidence;
pub mod domain;
pub mod repository;
pub mod router;
pub mod rounds;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use company::{CompanyDirectory, DirectoryEntry};
pub use confidence::{ConfidenceBoard, SkillConfidence};
pub use domain::{
    AnalysisId, CompanyIntel, CompanyRecord, EducationEntry, ExperienceEntry, ProfessionalLinks,
    ProjectEntry, ResumeProfile, RoundDefinition, SizeCategory, SkillTagSet,
};
pub use repository::{
    AnalysisRecord, AnalysisRepository, AnalysisSummaryView, InMemoryAnalysisRepository,
    RepositoryError,
};
pub use router::placement_router;
pub use rounds::{build_rounds, SkillSignals};
pub use scoring::{ScoreBreakdownItem, ScoreReport, ScoreTier, ScoringEngine, Suggestion};
pub use service::{
    AnalysisRequest, AnalysisServiceError, ConfidenceView, PlacementAnalysisService,
};
