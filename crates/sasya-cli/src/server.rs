//! HTTP API for the planner.
//!
//! Every JSON response carries a `status` field: `"ok"` on success and
//! `"error"` alongside a `message` on failure. Request bodies are parsed
//! leniently; an empty body is treated as `{}` so every site field defaults.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::{error, info};
use sasya_core::{
    params::{Id, SavePlan, SiteRequest},
    Planner, PlannerError,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

type AppState = Arc<Planner>;

/// Builds the router with all endpoints and permissive CORS.
pub fn create_router(planner: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/crops", get(list_crops))
        .route("/api/trees", get(list_trees))
        .route("/api/generate_plan", post(generate_plan))
        .route("/api/ai_agent", post(advise))
        .route("/api/save_plan", post(save_plan))
        .route("/api/plans", get(list_plans))
        .route("/api/plans/:id", get(show_plan))
        .route("/api/plans/:id/report", get(plan_report))
        .route("/api/labels/:plan_id", get(get_labels))
        .layer(CorsLayer::permissive())
        .with_state(planner)
}

/// Serves the API until Ctrl-C.
pub async fn run_http_server(planner: Planner, host: &str, port: u16) -> Result<()> {
    let app = create_router(Arc::new(planner));

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl-C, shutting down gracefully...");
            }
        })
        .await
        .context("HTTP server failed")?;

    info!("HTTP server shutdown complete");
    Ok(())
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "sasya-backend"
    }))
}

async fn list_crops(State(planner): State<AppState>) -> Result<Json<Value>, AppError> {
    let rows = planner.list_crops().await?;
    Ok(Json(json!({
        "status": "ok",
        "count": rows.len(),
        "rows": rows
    })))
}

async fn list_trees(State(planner): State<AppState>) -> Result<Json<Value>, AppError> {
    let rows = planner.list_trees().await?;
    Ok(Json(json!({
        "status": "ok",
        "count": rows.len(),
        "rows": rows
    })))
}

async fn generate_plan(
    State(planner): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request: SiteRequest = parse_body(&body)?;
    let plan = planner.generate_plan(&request).await?;
    Ok(Json(with_ok_status(&plan)?))
}

async fn advise(State(planner): State<AppState>, body: Bytes) -> Result<Json<Value>, AppError> {
    let request: SiteRequest = parse_body(&body)?;
    let advice = planner.advise(&request).await?;
    Ok(Json(with_ok_status(&advice)?))
}

async fn save_plan(State(planner): State<AppState>, body: Bytes) -> Result<Json<Value>, AppError> {
    let payload: Value = parse_body(&body)?;
    let outcome = planner.save_plan(&SavePlan::from_payload(payload)).await?;
    Ok(Json(json!({
        "status": "ok",
        "message": "Plan saved",
        "plan_id": outcome.plan_id,
        "labels_saved": outcome.labels_saved
    })))
}

async fn list_plans(State(planner): State<AppState>) -> Result<Json<Value>, AppError> {
    let plans = planner.list_plans().await?;
    Ok(Json(json!({
        "status": "ok",
        "count": plans.len(),
        "plans": plans
    })))
}

async fn show_plan(
    State(planner): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let saved = planner.get_plan(&Id { id }).await?;
    Ok(Json(with_ok_status(&saved)?))
}

async fn plan_report(
    State(planner): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    let saved = planner.get_plan(&Id { id }).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        saved.to_string(),
    )
        .into_response())
}

async fn get_labels(
    State(planner): State<AppState>,
    Path(plan_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let labels = planner.get_labels(&Id { id: plan_id }).await?;
    Ok(Json(json!({
        "status": "ok",
        "plan_id": plan_id,
        "count": labels.len(),
        "labels": labels
    })))
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    let value = if body.iter().all(u8::is_ascii_whitespace) {
        json!({})
    } else {
        serde_json::from_slice::<Value>(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?
    };
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(format!("Invalid request: {e}")))
}

fn with_ok_status<T: Serialize>(body: &T) -> Result<Value, AppError> {
    let mut value = serde_json::to_value(body).map_err(PlannerError::from)?;
    if let Value::Object(map) = &mut value {
        map.insert("status".to_string(), json!("ok"));
    }
    Ok(value)
}

enum AppError {
    Planner(PlannerError),
    BadRequest(String),
}

impl From<PlannerError> for AppError {
    fn from(e: PlannerError) -> Self {
        AppError::Planner(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Planner(e) => {
                let status = match e {
                    PlannerError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                    PlannerError::PlanNotFound { .. } => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    error!("Request failed: {e}");
                }
                (status, e.to_string())
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": message
        }));

        (status, body).into_response()
    }
}
