//! Integration scenarios for the placement analysis workflow.
//!
//! Everything here goes through the public service facade and HTTP router so
//! classification, round planning, scoring, and confidence toggles are
//! validated end to end without reaching into private modules.

mod common {
    use std::sync::Arc;

    use placement_intel::workflows::placement::{
        AnalysisRequest, EducationEntry, ExperienceEntry, InMemoryAnalysisRepository,
        PlacementAnalysisService, ProfessionalLinks, ProjectEntry, ResumeProfile,
    };

    pub(super) fn resume() -> ResumeProfile {
        ResumeProfile {
            name: "Dev Narayan".to_string(),
            email: "dev.narayan@example.com".to_string(),
            phone: "+91 90000 11111".to_string(),
            summary: "Full-stack developer who built and launched three customer-facing \
                      products, improved page load times across a large storefront, and \
                      mentored interns through their first production releases. Delivered \
                      measurable wins under tight deadlines while keeping services reliable, \
                      observable, and easy for the rest of the team to extend and operate."
                .to_string(),
            education: vec![EducationEntry {
                institution: "BITS Pilani".to_string(),
                degree: "B.E.".to_string(),
                field: "Information Systems".to_string(),
                graduation_year: Some(2022),
            }],
            experience: vec![ExperienceEntry {
                company: "Cartful".to_string(),
                role: "SDE-1".to_string(),
                bullets: vec!["Cut image bandwidth 60% with on-the-fly resizing".to_string()],
            }],
            projects: vec![ProjectEntry {
                name: "Shelfie".to_string(),
                description: "Inventory tracker adopted by 20+ stores".to_string(),
            }],
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "SQL".to_string(),
                "Docker".to_string(),
                "TypeScript".to_string(),
            ],
            links: ProfessionalLinks {
                github: "https://github.com/devnarayan".to_string(),
                linkedin: String::new(),
                portfolio: String::new(),
            },
        }
    }

    pub(super) fn request(company: &str, skills: &[&str]) -> AnalysisRequest {
        AnalysisRequest {
            company: company.to_string(),
            skills: skills.iter().map(|tag| tag.to_string()).collect(),
            resume: resume(),
        }
    }

    pub(super) fn service() -> Arc<PlacementAnalysisService<InMemoryAnalysisRepository>> {
        Arc::new(PlacementAnalysisService::new(Arc::new(
            InMemoryAnalysisRepository::default(),
        )))
    }
}

use common::{request, service};
use placement_intel::workflows::placement::SizeCategory;

#[test]
fn enterprise_pipeline_builds_four_round_plan() {
    let service = service();

    let record = service
        .analyze(request("Infosys", &["DSA", "Java", "SQL"]))
        .expect("analysis succeeds");

    assert_eq!(record.company.size_category, SizeCategory::Enterprise);
    assert!(record.company.is_known);
    assert_eq!(record.rounds.len(), 4);
    assert!(record.rounds[0].name.contains("DSA"));
    assert!(record.score.score <= 100);

    let fetched = service.get(&record.analysis_id).expect("record readable");
    assert_eq!(fetched.rounds, record.rounds);
}

#[test]
fn unknown_company_falls_back_to_startup_track() {
    let service = service();

    let record = service
        .analyze(request("", &["React", "Node.js"]))
        .expect("analysis succeeds");

    assert!(!record.company.is_known);
    assert_eq!(record.company.size_category, SizeCategory::Startup);
    assert_eq!(record.company.industry, "Technology Services");
    assert_eq!(record.rounds.len(), 3);
    assert!(record.rounds[0].name.contains("Practical Coding Task"));
}

#[test]
fn repeated_analysis_of_identical_input_scores_identically() {
    let service = service();

    let first = service
        .analyze(request("Swiggy", &["DSA", "Python"]))
        .expect("first analysis");
    let second = service
        .analyze(request("Swiggy", &["DSA", "Python"]))
        .expect("second analysis");

    assert_ne!(first.analysis_id, second.analysis_id);
    assert_eq!(first.score, second.score);
    assert_eq!(first.rounds, second.rounds);
}

#[test]
fn confidence_round_trip_restores_adjusted_score() {
    let service = service();
    let record = service
        .analyze(request("Zoho", &["React", "SQL"]))
        .expect("analysis succeeds");
    let base = record.score.score;

    let up = service
        .toggle_confidence(&record.analysis_id, "React")
        .expect("toggle on");
    assert_eq!(up.adjusted_score, (base + 2).min(100));

    service
        .toggle_confidence(&record.analysis_id, "SQL")
        .expect("unrelated toggle");
    let down = service
        .toggle_confidence(&record.analysis_id, "React")
        .expect("toggle off");
    assert_eq!(down.adjusted_score, (base + 2).min(100));

    let stored = service.get(&record.analysis_id).expect("record readable");
    assert_eq!(stored.score.score, base);
}

mod http {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::common::resume;
    use placement_intel::workflows::placement::{
        placement_router, InMemoryAnalysisRepository, PlacementAnalysisService,
    };

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn analysis_and_toggle_flow_over_http() {
        let service = Arc::new(PlacementAnalysisService::new(Arc::new(
            InMemoryAnalysisRepository::default(),
        )));
        let router = placement_router(service);

        let payload = json!({
            "company": "Freshworks",
            "skills": ["React", "SQL", "AWS"],
            "resume": resume(),
        });
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/placement/analysis")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["company"]["size_category"], "Mid-size");
        let analysis_id = body["analysis_id"].as_str().expect("id string").to_string();
        let base = body["score"]["score"].as_u64().expect("score number");

        let toggle_uri = format!("/api/v1/placement/analysis/{analysis_id}/confidence/AWS");
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(&toggle_uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["confidence"], "know");
        assert_eq!(body["base_score"].as_u64().expect("base"), base);
        assert_eq!(
            body["adjusted_score"].as_u64().expect("adjusted"),
            (base + 2).min(100)
        );
    }
}
