use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use ergosight::error::AppError;
use ergosight::workflows::assistant::markup::{render_lines, Segment};
use ergosight::workflows::assistant::{AssistantKind, AssistantReply, ChatError, Dispatcher};
use ergosight::workflows::catalog::{
    AnthroProfile, CatalogError, FeatureContribution, GeometryKpi, HeatmapRow, PortfolioSummary,
    RatingBand, VehicleModel,
};
use ergosight::workflows::scenario::{
    validate_baseline, DesignParameters, ParameterKey, ScenarioError, ScenarioEvaluation,
    ScenarioSession,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Serialize)]
pub(crate) struct VehicleSummary {
    #[serde(flatten)]
    pub(crate) vehicle: VehicleModel,
    pub(crate) band: RatingBand,
}

#[derive(Debug, Serialize)]
pub(crate) struct VehicleDetailResponse {
    #[serde(flatten)]
    pub(crate) summary: VehicleSummary,
    pub(crate) geometry: Vec<GeometryKpi>,
    pub(crate) contributions: Vec<FeatureContribution>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioResponse {
    pub(crate) summary: PortfolioSummary,
    pub(crate) heatmap: Vec<HeatmapRow>,
    pub(crate) suggested_queries: &'static [&'static str],
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScenarioRequest {
    #[serde(default)]
    pub(crate) profile: Option<String>,
    #[serde(default)]
    pub(crate) baseline_rating: Option<f64>,
    #[serde(default)]
    pub(crate) proposed: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DispatchRequest {
    pub(crate) query: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DispatchResponse<P> {
    pub(crate) assistant: AssistantKind,
    #[serde(flatten)]
    pub(crate) reply: AssistantReply<P>,
    pub(crate) lines: Vec<Vec<Segment>>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/vehicles", get(list_vehicles))
        .route("/api/v1/vehicles/:id", get(vehicle_detail))
        .route("/api/v1/portfolio", get(portfolio))
        .route("/api/v1/scenario/evaluate", post(evaluate_scenario))
        .route(
            "/api/v1/assistants/:assistant/dispatch",
            post(dispatch_assistant),
        )
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn summarize(vehicle: &VehicleModel) -> VehicleSummary {
    VehicleSummary {
        vehicle: vehicle.clone(),
        band: RatingBand::from_rating(vehicle.avg_rating),
    }
}

pub(crate) async fn list_vehicles(
    Extension(state): Extension<AppState>,
) -> Json<Vec<VehicleSummary>> {
    let vehicles = state.dashboard.catalog.vehicles();
    Json(vehicles.iter().map(summarize).collect())
}

pub(crate) async fn vehicle_detail(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let catalog = &state.dashboard.catalog;
    let vehicle = catalog.require(&id)?;

    Ok(Json(VehicleDetailResponse {
        summary: summarize(vehicle),
        geometry: catalog.geometry(vehicle.id).to_vec(),
        contributions: catalog.contributions(vehicle.id).to_vec(),
    }))
}

pub(crate) async fn portfolio(Extension(state): Extension<AppState>) -> Json<PortfolioResponse> {
    let catalog = &state.dashboard.catalog;
    Json(PortfolioResponse {
        summary: catalog.portfolio_summary(),
        heatmap: catalog.heatmap(),
        suggested_queries: catalog.suggested_queries(),
    })
}

pub(crate) async fn evaluate_scenario(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScenarioRequest>,
) -> Result<Json<ScenarioEvaluation>, AppError> {
    let dashboard = &state.dashboard;
    let ScenarioRequest {
        profile,
        baseline_rating,
        proposed,
    } = payload;

    let profile = match profile {
        Some(raw) => raw.parse::<AnthroProfile>().map_err(CatalogError::from)?,
        None => dashboard.scenario.default_profile,
    };
    let baseline = validate_baseline(
        baseline_rating.unwrap_or(dashboard.scenario.baseline_rating),
    )?;

    let mut session = ScenarioSession::new(
        dashboard.engine.clone(),
        baseline,
        DesignParameters::baseline(),
        profile,
    );
    for (name, value) in proposed {
        let key = name
            .parse::<ParameterKey>()
            .map_err(|name| ScenarioError::UnknownParameter { name })?;
        session.set_parameter(key, value);
    }

    let evaluation = session.evaluate();
    debug!(
        %profile,
        predicted = evaluation.predicted_rating,
        insights = evaluation.insights.len(),
        "scenario evaluated"
    );
    Ok(Json(evaluation))
}

pub(crate) async fn dispatch_assistant(
    Extension(state): Extension<AppState>,
    Path(assistant): Path<String>,
    Json(payload): Json<DispatchRequest>,
) -> Result<Response, AppError> {
    let kind = assistant.parse::<AssistantKind>()?;
    if payload.query.trim().is_empty() {
        return Err(ChatError::EmptyQuery.into());
    }

    let dashboard = &state.dashboard;
    let response = match kind {
        AssistantKind::Copilot => respond(kind, &dashboard.copilot, &payload.query),
        AssistantKind::Cad => respond(kind, &dashboard.cad, &payload.query),
    };
    Ok(response)
}

fn respond<P: Serialize>(kind: AssistantKind, dispatcher: &Dispatcher<P>, query: &str) -> Response {
    let reply = dispatcher.dispatch(query);
    let lines = render_lines(&reply.content);
    Json(DispatchResponse {
        assistant: kind,
        reply,
        lines,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{test_state, Dashboard};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use ergosight::config::ScenarioConfig;
    use ergosight::workflows::scenario::{ParameterTable, ScenarioEngine};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let response = router(test_state())
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn health_and_readiness_report_ok() {
        let (status, body) = call(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = call(get_request("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn vehicle_detail_includes_geometry_and_band() {
        let (status, body) = call(get_request("/api/v1/vehicles/XUV700")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "XUV700");
        assert_eq!(body["band"], "good");
        assert_eq!(body["geometry"].as_array().map(Vec::len), Some(6));
    }

    #[tokio::test]
    async fn unknown_vehicle_is_not_found() {
        let (status, body) = call(get_request("/api/v1/vehicles/nexon")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown vehicle 'nexon'");
    }

    #[tokio::test]
    async fn portfolio_lists_every_vehicle() {
        let (status, body) = call(get_request("/api/v1/portfolio")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["model_coverage"], 6);
        assert_eq!(body["heatmap"].as_array().map(Vec::len), Some(6));
        assert_eq!(body["summary"]["best_performer"]["id"], "xuv700");
    }

    #[tokio::test]
    async fn scenario_evaluation_ranks_insights() {
        let (status, body) = call(post_json(
            "/api/v1/scenario/evaluate",
            json!({
                "profile": "P95M",
                "proposed": { "sill_height": 555, "doorWidth": 730 }
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let predicted = body["predicted_rating"].as_f64().expect("rating");
        assert!((predicted - 8.15).abs() < 1e-9);
        assert_eq!(body["insights"][0]["impact"], "+0.5");
        assert_eq!(body["insights"][1]["change"], "+30.0 mm");
        assert_eq!(body["insights"][1]["impact"], "+0.4");
    }

    #[tokio::test]
    async fn scenario_uses_the_shared_engine() {
        let configs = ParameterTable::standard()
            .configs()
            .iter()
            .cloned()
            .map(|mut config| {
                if config.key == ParameterKey::DoorWidth {
                    config.weight = 0.03;
                }
                config
            })
            .collect();
        let table = ParameterTable::new(configs).expect("table is valid");

        let mut state = test_state();
        let mut dashboard = Dashboard::standard(ScenarioConfig {
            baseline_rating: 7.0,
            default_profile: AnthroProfile::P50Male,
        });
        dashboard.engine = ScenarioEngine::new(table);
        state.dashboard = Arc::new(dashboard);

        let response = router(state)
            .oneshot(post_json(
                "/api/v1/scenario/evaluate",
                json!({ "proposed": { "door_width": 730 } }),
            ))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");

        let predicted = body["predicted_rating"].as_f64().expect("rating");
        assert!((predicted - 7.9).abs() < 1e-9, "unexpected rating {predicted}");
        assert_eq!(body["insights"][0]["impact"], "+0.9");
    }

    #[tokio::test]
    async fn scenario_rejects_unknown_parameter() {
        let (status, body) = call(post_json(
            "/api/v1/scenario/evaluate",
            json!({ "proposed": { "wheelbase": 2750 } }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.contains("wheelbase")));
    }

    #[tokio::test]
    async fn copilot_dispatch_returns_table_payload() {
        let (status, body) = call(post_json(
            "/api/v1/assistants/copilot/dispatch",
            json!({ "query": "Which vehicles are worst for seniors?" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["assistant"], "copilot");
        assert_eq!(body["intent"], "worst_vehicles");
        assert_eq!(body["payload"]["type"], "table");
        assert_eq!(body["payload"]["vehicles"][0]["name"], "Thar");
    }

    #[tokio::test]
    async fn cad_dispatch_falls_back_with_echo() {
        let (status, body) = call(post_json(
            "/api/v1/assistants/cad/dispatch",
            json!({ "query": "hello there" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "fallback");
        assert!(body["content"]
            .as_str()
            .is_some_and(|content| content.contains("\"hello there\"")));
    }

    #[tokio::test]
    async fn dispatch_rejects_blank_query_and_unknown_assistant() {
        let (status, _) = call(post_json(
            "/api/v1/assistants/copilot/dispatch",
            json!({ "query": "   " }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(post_json(
            "/api/v1/assistants/oracle/dispatch",
            json!({ "query": "hi" }),
        ))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
