use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

const SERVICE_NAME: &str = "edu-ai-backend";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/info", get(info))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthInfoResponse {
    service: &'static str,
    version: &'static str,
    start_time: String,
    uptime: u64,
}

async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Smart Education AI API is running",
    })
}

async fn info(State(state): State<AppState>) -> Json<HealthInfoResponse> {
    let started: DateTime<Utc> = state.started_at_system().into();

    Json(HealthInfoResponse {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        start_time: started.to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime_seconds(),
    })
}
