//! End-to-end pipeline tests with synthesis disabled (no network).

use sentinelvoice::config::Config;
use sentinelvoice::pipeline::{Pipeline, PipelineError};
use sentinelvoice::store::IncidentStore;
use serde_json::json;
use std::sync::Arc;

fn pipeline() -> (Arc<IncidentStore>, Pipeline) {
    let store = Arc::new(IncidentStore::new());
    let pipeline = Pipeline::new(store.clone(), &Config::without_synthesis());
    (store, pipeline)
}

#[tokio::test]
async fn minimal_alert_flows_through_with_defaults() {
    let (store, pipeline) = pipeline();
    let response = pipeline.handle(json!({})).await.unwrap();

    // Defaults: BruteForce/High from "Defender".
    assert_eq!(response.analysis.risk_score, 85);
    assert_eq!(response.analysis.recommended_actions.len(), 4);
    assert_eq!(response.analysis.reasoning.len(), 6);
    assert!(response.analysis.auto_remediated);
    assert!(response.analysis.incident_id.starts_with("THR-"));

    // Synthesis disabled: no audio reference, nothing cached.
    assert!(response.voice_url.is_none());
    assert!(store.get_audio(&response.analysis.incident_id).is_none());

    // The incident landed in the log.
    let window = store.recent_window();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].alert.source, "Defender");
}

#[tokio::test]
async fn unknown_category_is_processed_not_rejected() {
    let (_store, pipeline) = pipeline();
    let response = pipeline
        .handle(json!({"category": "PortScan", "severity": "Low"}))
        .await
        .unwrap();

    assert!(response.analysis.recommended_actions.is_empty());
    assert!(response.analysis.auto_remediated);
    assert_eq!(response.analysis.risk_score, 60);
}

#[tokio::test]
async fn non_object_payload_is_a_validation_error() {
    let (store, pipeline) = pipeline();
    let err = pipeline.handle(json!("not an alert")).await.unwrap_err();
    assert!(matches!(err, PipelineError::Validation(_)));
    // Rejected alerts never reach the log.
    assert!(store.is_empty());
}

#[tokio::test]
async fn log_retains_fifty_most_recent_incidents() {
    let (store, pipeline) = pipeline();
    for n in 0..60 {
        pipeline
            .handle(json!({"source": format!("src-{}", n)}))
            .await
            .unwrap();
    }
    let window = store.recent_window();
    assert_eq!(window.len(), 50);
    assert_eq!(window[0].alert.source, "src-10");
    assert_eq!(window[49].alert.source, "src-59");
}

#[tokio::test]
async fn identical_alerts_get_distinct_ids_across_seconds() {
    // IDs are second-granularity timestamps; a >=1s gap guarantees
    // distinct IDs. No deduplication happens.
    let (store, pipeline) = pipeline();
    let first = pipeline.handle(json!({})).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let second = pipeline.handle(json!({})).await.unwrap();

    assert_ne!(first.analysis.incident_id, second.analysis.incident_id);
    assert_eq!(store.recent_window().len(), 2);
}

#[tokio::test]
async fn audio_for_unknown_incident_is_absent() {
    let (store, _pipeline) = pipeline();
    assert!(store.get_audio("THR-19990101000000").is_none());
}
