use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::placement::company::CompanyDirectory;
use crate::workflows::placement::domain::{
    EducationEntry, ExperienceEntry, ProfessionalLinks, ProjectEntry, ResumeProfile, SkillTagSet,
};
use crate::workflows::placement::repository::{
    AnalysisRecord, AnalysisRepository, InMemoryAnalysisRepository, RepositoryError,
};
use crate::workflows::placement::router::placement_router;
use crate::workflows::placement::scoring::ScoringEngine;
use crate::workflows::placement::service::{AnalysisRequest, PlacementAnalysisService};
use crate::workflows::placement::AnalysisId;

pub(super) fn directory() -> CompanyDirectory {
    CompanyDirectory::standard()
}

pub(super) fn tags(raw: &[&str]) -> SkillTagSet {
    SkillTagSet::new(raw.iter().map(|tag| tag.to_string()))
}

/// Resume that passes every checklist rule.
pub(super) fn strong_resume() -> ResumeProfile {
    ResumeProfile {
        name: "Asha Pillai".to_string(),
        email: "asha.pillai@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        summary: "Backend engineer who designed, built, and shipped resilient payment \
                  services for three product teams. Led a migration that reduced deployment \
                  time by hours, mentored four junior developers, and improved observability \
                  across the stack. Comfortable owning a feature from design review through \
                  rollout, with a strong bias for measurable outcomes."
            .to_string(),
        education: vec![EducationEntry {
            institution: "NIT Trichy".to_string(),
            degree: "B.Tech".to_string(),
            field: "Computer Science".to_string(),
            graduation_year: Some(2021),
        }],
        experience: vec![ExperienceEntry {
            company: "Finline".to_string(),
            role: "Software Engineer".to_string(),
            bullets: vec![
                "Cut p99 checkout latency by 35% by batching ledger writes".to_string(),
                "Onboarded 10k merchants to the new settlement pipeline".to_string(),
            ],
        }],
        projects: vec![
            ProjectEntry {
                name: "LedgerLite".to_string(),
                description: "Double-entry bookkeeping library used by 3 internal services"
                    .to_string(),
            },
            ProjectEntry {
                name: "Shipmate".to_string(),
                description: "CLI that automates release notes".to_string(),
            },
        ],
        skills: vec![
            "Java".to_string(),
            "Spring Boot".to_string(),
            "SQL".to_string(),
            "Docker".to_string(),
            "Kafka".to_string(),
            "AWS".to_string(),
        ],
        links: ProfessionalLinks {
            github: "https://github.com/ashapillai".to_string(),
            linkedin: "https://linkedin.com/in/ashapillai".to_string(),
            portfolio: String::new(),
        },
    }
}

pub(super) fn empty_resume() -> ResumeProfile {
    ResumeProfile::default()
}

pub(super) fn analysis_request(
    company: &str,
    skills: &[&str],
    resume: ResumeProfile,
) -> AnalysisRequest {
    AnalysisRequest {
        company: company.to_string(),
        skills: skills.iter().map(|tag| tag.to_string()).collect(),
        resume,
    }
}

pub(super) fn build_service() -> (
    PlacementAnalysisService<InMemoryAnalysisRepository>,
    Arc<InMemoryAnalysisRepository>,
) {
    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let service = PlacementAnalysisService::new(repository.clone());
    (service, repository)
}

pub(super) fn build_service_with_engine(
    engine: ScoringEngine,
) -> PlacementAnalysisService<InMemoryAnalysisRepository> {
    let repository = Arc::new(InMemoryAnalysisRepository::default());
    PlacementAnalysisService::with_parts(CompanyDirectory::standard(), engine, repository)
}

pub(super) fn placement_router_with_service(
    service: Arc<PlacementAnalysisService<InMemoryAnalysisRepository>>,
) -> axum::Router {
    placement_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Repository stub that always reports an outage.
pub(super) struct UnavailableRepository;

impl AnalysisRepository for UnavailableRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn update(&self, _record: AnalysisRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}
