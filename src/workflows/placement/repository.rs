use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::confidence::ConfidenceBoard;
use super::domain::{AnalysisId, AnalyzedAt, CompanyIntel, RoundDefinition, SkillTagSet};
use super::scoring::ScoreReport;

/// Stored outcome of one analysis request.
///
/// Everything except `confidence` is immutable once written; toggles replace
/// the board and leave the base score and breakdown untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: AnalysisId,
    pub company: CompanyIntel,
    pub skills: SkillTagSet,
    pub rounds: Vec<RoundDefinition>,
    pub score: ScoreReport,
    pub confidence: ConfidenceBoard,
    pub analyzed_at: AnalyzedAt,
}

impl AnalysisRecord {
    pub fn adjusted_score(&self) -> u8 {
        self.confidence.adjusted_score(self.score.score)
    }

    pub fn summary_view(&self) -> AnalysisSummaryView {
        AnalysisSummaryView {
            analysis_id: self.analysis_id.clone(),
            company_name: self.company.company_name.clone(),
            size_category: self.company.size_category.label(),
            round_count: self.rounds.len(),
            base_score: self.score.score,
            adjusted_score: self.adjusted_score(),
            tier: self.score.tier().label(),
        }
    }
}

/// Condensed listing row for history views.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummaryView {
    pub analysis_id: AnalysisId,
    pub company_name: String,
    pub size_category: &'static str,
    pub round_count: usize,
    pub base_score: u8,
    pub adjusted_score: u8,
    pub tier: &'static str,
}

/// Storage abstraction so the service can be exercised in isolation. The
/// actual medium (memory, browser storage, database) stays outside the core.
pub trait AnalysisRepository: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;
    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("analysis already exists")]
    Conflict,
    #[error("analysis not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository used by the demo server and tests.
#[derive(Default, Clone)]
pub struct InMemoryAnalysisRepository {
    records: Arc<Mutex<HashMap<AnalysisId, AnalysisRecord>>>,
}

impl AnalysisRepository for InMemoryAnalysisRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.analysis_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.analysis_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.analysis_id) {
            guard.insert(record.analysis_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<AnalysisRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.analyzed_at.cmp(&a.analyzed_at));
        records.truncate(limit);
        Ok(records)
    }
}
