//! API route definitions.

use super::state::AppState;
use crate::pipeline::PipelineError;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/alerts", post(submit_alert))
        .route("/incidents", get(list_incidents))
        .route("/voice/{incident_id}", get(get_voice))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "data": {
            "status": "operational",
            "voice_alerts": state.config.synthesis_enabled()
        },
        "meta": {
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Run an alert through the pipeline and return the analysis.
async fn submit_alert(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<Value>, Response> {
    match state.pipeline.handle(raw).await {
        Ok(response) => Ok(Json(json!({
            "data": response,
            "meta": { "timestamp": chrono::Utc::now().to_rfc3339() }
        }))),
        Err(PipelineError::Validation(msg)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": msg })),
        )
            .into_response()),
    }
}

async fn list_incidents(State(state): State<AppState>) -> Json<Value> {
    let window = state.store.recent_window();
    Json(json!({
        "data": window,
        "meta": { "total": state.store.len() }
    }))
}

/// Fetch synthesized audio for an incident. Absent audio is a plain 404,
/// not a server error: synthesis may have been disabled or failed.
async fn get_voice(
    State(state): State<AppState>,
    Path(incident_id): Path<String>,
) -> Response {
    match state.store.get_audio(&incident_id) {
        Some(audio) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "audio/mpeg")],
            audio,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no audio for incident" })),
        )
            .into_response(),
    }
}
