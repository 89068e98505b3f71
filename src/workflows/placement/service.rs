use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::company::CompanyDirectory;
use super::domain::{AnalysisId, ResumeProfile, SkillTagSet};
use super::repository::{AnalysisRecord, AnalysisRepository, AnalysisSummaryView, RepositoryError};
use super::rounds;
use super::scoring::ScoringEngine;

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("analysis-{id:06}"))
}

/// One analysis request: a target company, the extracted skill tags, and the
/// candidate's structured resume. Skill extraction from free text happens
/// upstream; this service only consumes the flat tag list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resume: ResumeProfile,
}

/// Service composing the company directory, round templates, and scoring
/// engine over a pluggable repository.
pub struct PlacementAnalysisService<R> {
    directory: CompanyDirectory,
    engine: ScoringEngine,
    repository: Arc<R>,
}

impl<R> PlacementAnalysisService<R>
where
    R: AnalysisRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_parts(CompanyDirectory::standard(), ScoringEngine::new(), repository)
    }

    pub fn with_parts(
        directory: CompanyDirectory,
        engine: ScoringEngine,
        repository: Arc<R>,
    ) -> Self {
        Self {
            directory,
            engine,
            repository,
        }
    }

    /// Run the full pipeline and persist the outcome.
    pub fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        let AnalysisRequest {
            company,
            skills,
            resume,
        } = request;

        let intel = self.directory.intel(&company);
        let tags = SkillTagSet::new(skills);
        let rounds = rounds::build_rounds(intel.size_category, &tags);
        let score = self.engine.score(&resume);

        let record = AnalysisRecord {
            analysis_id: next_analysis_id(),
            company: intel,
            skills: tags,
            rounds,
            score,
            confidence: Default::default(),
            analyzed_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    pub fn get(&self, id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<AnalysisSummaryView>, AnalysisServiceError> {
        let records = self.repository.recent(limit)?;
        Ok(records.iter().map(AnalysisRecord::summary_view).collect())
    }

    /// Flip one skill's confidence flag and persist the new board.
    ///
    /// The stored base score and breakdown are left untouched; only the
    /// board changes and the adjusted score is re-derived from it.
    pub fn toggle_confidence(
        &self,
        id: &AnalysisId,
        tag: &str,
    ) -> Result<ConfidenceView, AnalysisServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        record.confidence = record.confidence.toggle(tag);
        let view = ConfidenceView {
            analysis_id: record.analysis_id.clone(),
            skill: tag.trim().to_string(),
            confidence: record.confidence.confidence(tag).label(),
            base_score: record.score.score,
            adjusted_score: record.adjusted_score(),
        };

        self.repository.update(record)?;
        Ok(view)
    }
}

/// Toggle outcome returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceView {
    pub analysis_id: AnalysisId,
    pub skill: String,
    pub confidence: &'static str,
    pub base_score: u8,
    pub adjusted_score: u8,
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
