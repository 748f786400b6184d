//! HTTP surface tests driven through the router with no real listener.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use sentinelvoice::api::{self, state::AppState};
use sentinelvoice::config::Config;
use sentinelvoice::pipeline::Pipeline;
use sentinelvoice::store::IncidentStore;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::without_synthesis();
    let store = Arc::new(IncidentStore::new());
    let pipeline = Arc::new(Pipeline::new(store.clone(), &config));
    api::router(AppState {
        pipeline,
        store,
        config,
    })
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_voice_alerts_disabled() {
    let response = app()
        .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response.into_body()).await;
    assert_eq!(json["data"]["status"], "operational");
    assert_eq!(json["data"]["voice_alerts"], false);
}

#[tokio::test]
async fn submitting_an_alert_returns_the_analysis() {
    let app = app();
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/alerts")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"category": "MalwareDetected", "severity": "High"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response.into_body()).await;
    assert_eq!(json["data"]["risk_score"], 85);
    assert_eq!(json["data"]["recommended_actions"][0], "Isolate affected device");
    assert_eq!(json["data"]["voice_url"], Value::Null);

    // The incident shows up in the recent window.
    let response = app
        .oneshot(
            Request::get("/api/v1/incidents")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["meta"]["total"], 1);
    assert_eq!(
        json["data"][0]["alert"]["category"],
        "MalwareDetected"
    );
}

#[tokio::test]
async fn malformed_alert_payload_is_unprocessable() {
    let response = app()
        .oneshot(
            Request::post("/api/v1/alerts")
                .header("content-type", "application/json")
                .body(Body::from("[1, 2, 3]"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn audio_for_unknown_incident_is_not_found() {
    let response = app()
        .oneshot(
            Request::get("/api/v1/voice/THR-19990101000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response.into_body()).await;
    assert_eq!(json["error"], "no audio for incident");
}

#[tokio::test]
async fn unknown_route_falls_back_to_404() {
    let response = app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
