use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::AnalysisId;
use super::repository::{AnalysisRepository, RepositoryError};
use super::service::{AnalysisRequest, AnalysisServiceError, PlacementAnalysisService};

/// Router builder exposing HTTP endpoints for analysis and confidence toggles.
pub fn placement_router<R>(service: Arc<PlacementAnalysisService<R>>) -> Router
where
    R: AnalysisRepository + 'static,
{
    Router::new()
        .route("/api/v1/placement/analysis", post(analyze_handler::<R>))
        .route(
            "/api/v1/placement/analysis/:analysis_id",
            get(get_handler::<R>),
        )
        .route(
            "/api/v1/placement/analysis/:analysis_id/confidence/:skill",
            post(toggle_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn analyze_handler<R>(
    State(service): State<Arc<PlacementAnalysisService<R>>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    match service.analyze(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<PlacementAnalysisService<R>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn toggle_handler<R>(
    State(service): State<Arc<PlacementAnalysisService<R>>>,
    Path((analysis_id, skill)): Path<(String, String)>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.toggle_confidence(&id, &skill) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: AnalysisServiceError) -> Response {
    let status = match &error {
        AnalysisServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AnalysisServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AnalysisServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
