use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::appraisal::router::council_handler;
use crate::appraisal::{AppraisalService, CouncilRegistry};

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn yield_route_scores_all_products() {
    let payload = serde_json::to_value(site()).unwrap();

    let response = router()
        .oneshot(post_json("/api/v1/sites/yield", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let scores = body.as_array().expect("array of scores");
    assert_eq!(scores.len(), 3);
    assert_eq!(scores[0]["productType"], json!("Duplex"));
    assert_eq!(scores[2]["productType"], json!("Quadplex"));
    assert_eq!(scores[0]["siteId"], json!("site-1"));
}

#[tokio::test]
async fn yield_route_accepts_minimal_site_payload() {
    let payload = json!({
        "council": "Monash",
        "zone": "GRZ1",
        "areaSqm": 650,
        "frontageM": 20,
        "depthM": 40
    });

    let response = router()
        .oneshot(post_json("/api/v1/sites/yield", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body[0]["score"], json!(100));
}

#[tokio::test]
async fn rescode_route_reports_issues() {
    let mut planning = planning_inputs();
    planning.site_coverage_percent = 70.0;
    let payload = json!({ "site": site(), "planningInputs": planning });

    let response = router()
        .oneshot(post_json("/api/v1/sites/rescode", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["compliant"], json!(false));
    assert_eq!(body["deemedToComply"], json!(false));
    assert_eq!(body["issues"], json!(["Site coverage exceeds 60% maximum."]));
}

#[tokio::test]
async fn feasibility_route_returns_waterfall() {
    let payload = json!({ "site": site(), "scenario": scenario() });

    let response = router()
        .oneshot(post_json("/api/v1/scenarios/feasibility", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["grossRealisation"], json!(4_500_000.0));
    assert_eq!(body["breakdown"]["construction"], json!(1_890_000.0));
    assert_eq!(body["bankabilityFlag"], json!("Red"));
}

#[tokio::test]
async fn feasibility_route_serialises_undefined_margin_as_null() {
    let payload = json!({ "site": site(), "scenario": zero_cost_scenario() });

    let response = router()
        .oneshot(post_json("/api/v1/scenarios/feasibility", &payload))
        .await
        .expect("route executes");

    let body = read_json_body(response).await;
    assert_eq!(body["marginOnCostPercent"], Value::Null);
}

#[tokio::test]
async fn appraisal_route_builds_pack() {
    let payload = json!({
        "site": site(),
        "scenarios": [scenario(), profitable_scenario()]
    });

    let response = router()
        .oneshot(post_json("/api/v1/appraisals", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["council"]["category"], json!("Protector"));
    assert_eq!(body["scenarios"].as_array().map(Vec::len), Some(2));
    assert!(body.get("preparedOn").is_some());
}

#[tokio::test]
async fn malformed_payload_is_rejected() {
    let payload = json!({ "site": site() });

    let response = router()
        .oneshot(post_json("/api/v1/scenarios/feasibility", &payload))
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn council_route_returns_profile() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/councils/monash")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["council"], json!("Monash"));
    assert_eq!(body["category"], json!("Facilitator"));
}

#[tokio::test]
async fn council_handler_returns_not_found_for_unknown_council() {
    let service = Arc::new(AppraisalService::new(CouncilRegistry::standard()));

    let response = council_handler(State(service), Path("Hume".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("Hume"));
}
