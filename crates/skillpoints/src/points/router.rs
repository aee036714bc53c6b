use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ApplicantProfile;
use super::eligibility::VisaSubclass;
use super::service::PointsService;
use crate::error::AppError;

/// Request body for a single eligibility evaluation.
///
/// `base_points` is a score produced by the scoring tables, so it is never
/// negative; values outside `0..=65535` are rejected with 422.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityRequest {
    pub visa_subclass: VisaSubclass,
    pub base_points: u16,
    #[serde(default)]
    pub nomination_bonus: u8,
}

/// Router builder exposing the scoring and eligibility endpoints.
pub fn points_router(service: Arc<PointsService>) -> Router {
    Router::new()
        .route("/api/v1/points/assessment", post(assessment_handler))
        .route("/api/v1/points/eligibility", post(eligibility_handler))
        .route("/api/v1/points/subclasses", get(subclasses_handler))
        .route("/api/v1/points/suggestions", post(suggestions_handler))
        .with_state(service)
}

pub(crate) async fn assessment_handler(
    State(service): State<Arc<PointsService>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response {
    let assessment = service.assess(profile);
    (StatusCode::OK, axum::Json(assessment)).into_response()
}

pub(crate) async fn eligibility_handler(
    State(service): State<Arc<PointsService>>,
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Response {
    let outcome = service.eligibility(
        request.visa_subclass,
        request.base_points,
        request.nomination_bonus,
    );
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn subclasses_handler(State(service): State<Arc<PointsService>>) -> Response {
    (StatusCode::OK, axum::Json(service.subclasses())).into_response()
}

pub(crate) async fn suggestions_handler(
    State(service): State<Arc<PointsService>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Result<Response, AppError> {
    let response = match service.suggest(&profile).await? {
        Some(response) => axum::Json(response).into_response(),
        None => axum::Json(json!({ "suggestions": serde_json::Value::Null })).into_response(),
    };
    Ok(response)
}
