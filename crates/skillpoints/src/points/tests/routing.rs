use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use crate::points::router::{assessment_handler, suggestions_handler};
use crate::points::suggestions::SuggestionError;
use crate::points::ApplicantProfile;

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn assessment_handler_returns_breakdown_and_eligibility() {
    let (service, _) = build_service(StubProvider::answering("unused"));

    let response = assessment_handler(State(service), axum::Json(strong_profile())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["breakdown"]["total"], 75);
    assert_eq!(payload["breakdown"]["age"], 30);
    assert_eq!(payload["threshold"], 65);
    assert_eq!(payload["max_points"], 105);
    assert_eq!(payload["entries"].as_array().map(Vec::len), Some(5));
    assert_eq!(payload["eligibility"][0]["subclass"], "189");
    assert_eq!(payload["eligibility"][0]["status"], "eligible");
    assert_eq!(payload["eligibility"][0]["message"], "Eligible.");
}

#[tokio::test]
async fn assessment_route_accepts_partial_profiles() {
    let router = router_with_provider(StubProvider::answering("unused"));

    let response = router
        .oneshot(json_request(
            "/api/v1/points/assessment",
            json!({ "age": "18-24", "australianWorkExperience": "lt_3" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["breakdown"]["total"], 25);
    assert_eq!(payload["breakdown"]["australianWorkExperience"], 0);
    assert_eq!(payload["profile"]["englishProficiency"], "none");
    assert_eq!(payload["eligibility"][0]["deficit"], 40);
}

#[tokio::test]
async fn assessment_route_scores_null_fields_as_none() {
    let router = router_with_provider(StubProvider::answering("unused"));

    let response = router
        .clone()
        .oneshot(json_request("/api/v1/points/assessment", json!({ "age": null })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["breakdown"]["total"], 0);
    assert_eq!(payload["profile"]["age"], "none");

    let response = router
        .oneshot(json_request(
            "/api/v1/points/assessment",
            json!({ "age": 25, "education": "phd" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["breakdown"]["age"], 0);
    assert_eq!(payload["breakdown"]["total"], 20);
}

#[tokio::test]
async fn eligibility_route_evaluates_single_subclass() {
    let router = router_with_provider(StubProvider::answering("unused"));

    let response = router
        .oneshot(json_request(
            "/api/v1/points/eligibility",
            json!({ "visa_subclass": "190", "base_points": 60, "nomination_bonus": 5 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "pending_nomination");
    assert_eq!(
        payload["message"],
        "Eligible with nomination (5 pts). Current base: 60 pts."
    );
}

#[tokio::test]
async fn eligibility_route_defaults_bonus_to_zero() {
    let router = router_with_provider(StubProvider::answering("unused"));

    let response = router
        .oneshot(json_request(
            "/api/v1/points/eligibility",
            json!({ "visa_subclass": "491", "base_points": 70 }),
        ))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "pending_nomination");
    assert_eq!(payload["nomination_bonus"], 0);
}

#[tokio::test]
async fn eligibility_route_rejects_unknown_subclass() {
    let router = router_with_provider(StubProvider::answering("unused"));

    let response = router
        .oneshot(json_request(
            "/api/v1/points/eligibility",
            json!({ "visa_subclass": "186", "base_points": 70 }),
        ))
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn eligibility_route_rejects_negative_base_points() {
    let router = router_with_provider(StubProvider::answering("unused"));

    let response = router
        .oneshot(json_request(
            "/api/v1/points/eligibility",
            json!({ "visa_subclass": "189", "base_points": -5 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn subclasses_route_lists_fixed_subclasses() {
    let router = router_with_provider(StubProvider::answering("unused"));

    let response = router
        .oneshot(
            Request::get("/api/v1/points/subclasses")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["code"], "189");
    assert_eq!(payload[0]["supports_nomination"], false);
    assert_eq!(payload[1]["nomination_bonus"], 5);
    assert_eq!(payload[2]["name"], "Skilled Work Regional");
    assert_eq!(payload[2]["nomination_bonus"], 15);
}

#[tokio::test]
async fn suggestions_handler_returns_text() {
    let (service, _) = build_service(StubProvider::answering("Study in a regional area."));

    let response = suggestions_handler(State(service), axum::Json(graduate_profile()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["suggestions"], "Study in a regional area.");
}

#[tokio::test]
async fn suggestions_handler_returns_null_for_empty_profile() {
    let (service, provider) = build_service(StubProvider::answering("unused"));

    let response = suggestions_handler(State(service), axum::Json(ApplicantProfile::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["suggestions"].is_null());
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn suggestions_handler_maps_disabled_to_service_unavailable() {
    let (service, _) = build_service(StubProvider::failing(SuggestionError::Disabled));

    let response = suggestions_handler(State(service), axum::Json(strong_profile()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn suggestions_handler_maps_upstream_failure_to_bad_gateway() {
    let (service, _) = build_service(StubProvider::failing(SuggestionError::Network(
        "timed out".to_string(),
    )));

    let response = suggestions_handler(State(service), axum::Json(strong_profile()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("timed out"));
}
