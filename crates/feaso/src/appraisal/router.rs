use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{PlanningInputs, Scenario, Site};
use super::input::AppraisalRequest;
use super::service::AppraisalService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescodeRequest {
    pub site: Site,
    pub planning_inputs: PlanningInputs,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityRequest {
    pub site: Site,
    pub scenario: Scenario,
}

/// Router builder exposing the calculators over HTTP.
pub fn appraisal_router(service: Arc<AppraisalService>) -> Router {
    Router::new()
        .route("/api/v1/sites/yield", post(yield_handler))
        .route("/api/v1/sites/rescode", post(rescode_handler))
        .route("/api/v1/scenarios/feasibility", post(feasibility_handler))
        .route("/api/v1/appraisals", post(appraisal_handler))
        .route("/api/v1/councils/:council", get(council_handler))
        .with_state(service)
}

pub(crate) async fn yield_handler(
    State(service): State<Arc<AppraisalService>>,
    Json(site): Json<Site>,
) -> Response {
    let scores = service.score_site(&site);
    (StatusCode::OK, Json(scores)).into_response()
}

pub(crate) async fn rescode_handler(
    State(service): State<Arc<AppraisalService>>,
    Json(request): Json<RescodeRequest>,
) -> Response {
    let result = service.check_rescode(&request.site, &request.planning_inputs);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn feasibility_handler(
    State(service): State<Arc<AppraisalService>>,
    Json(request): Json<FeasibilityRequest>,
) -> Response {
    let result = service.assess_feasibility(&request.site, &request.scenario);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn appraisal_handler(
    State(service): State<Arc<AppraisalService>>,
    Json(request): Json<AppraisalRequest>,
) -> Response {
    let today = Local::now().date_naive();
    let appraisal = service.appraise(&request, today);
    (StatusCode::OK, Json(appraisal)).into_response()
}

pub(crate) async fn council_handler(
    State(service): State<Arc<AppraisalService>>,
    Path(council): Path<String>,
) -> Response {
    match service.council_profile(&council) {
        Some(profile) => (StatusCode::OK, Json(profile)).into_response(),
        None => {
            let payload = json!({
                "error": format!("no risk profile for council '{council}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
