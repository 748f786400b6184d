//! SentinelVoice -- security operations pipeline with voice alerts.
//!
//! This crate provides the core library for alert intake, threat
//! classification and scoring, voice alert synthesis, and the bounded
//! in-memory incident log.

pub mod analyze;
pub mod api;
pub mod config;
pub mod pipeline;
pub mod store;
pub mod voice;

use crate::api::state::AppState;
use crate::pipeline::Pipeline;
use crate::store::IncidentStore;
use anyhow::Result;
use std::sync::Arc;

/// Start the SentinelVoice daemon: API server plus intake pipeline.
pub async fn serve(bind: &str) -> Result<()> {
    let config = config::Config::from_env();
    if config.synthesis_enabled() {
        tracing::info!(voice_id = %config.voice_id, "Voice alerts enabled");
    } else {
        tracing::info!("No synthesis credential found; voice alerts disabled");
    }

    // The store and pipeline live exactly as long as the process.
    let store = Arc::new(IncidentStore::new());
    let pipeline = Arc::new(Pipeline::new(store.clone(), &config));
    let state = AppState {
        pipeline,
        store,
        config,
    };

    let addr: std::net::SocketAddr = bind.parse()?;
    let app = api::router(state);

    tracing::info!(%addr, "SentinelVoice listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
