//! Pipeline orchestrator -- normalize, classify, synthesize, record.

use crate::analyze::{classify, normalize, Analysis};
use crate::config::Config;
use crate::store::{IncidentRecord, IncidentStore};
use crate::voice::Synthesizer;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid alert payload: {0}")]
    Validation(String),
}

/// What the caller gets back: the analysis plus, when synthesis
/// succeeded, a relative URL for fetching the audio.
#[derive(Debug, Serialize)]
pub struct ThreatResponse {
    #[serde(flatten)]
    pub analysis: Analysis,
    pub voice_url: Option<String>,
}

/// Sequences the intake pipeline. Owns nothing global: the store handle
/// is injected so tests can run isolated pipelines side by side.
pub struct Pipeline {
    store: Arc<IncidentStore>,
    synthesizer: Synthesizer,
}

impl Pipeline {
    pub fn new(store: Arc<IncidentStore>, config: &Config) -> Self {
        Self {
            store,
            synthesizer: Synthesizer::new(config),
        }
    }

    /// Run one alert through the full pipeline.
    ///
    /// The analysis is fixed at classification time; synthesis only adds
    /// an audio reference to the response, never alters the analysis.
    pub async fn handle(&self, raw: Value) -> Result<ThreatResponse, PipelineError> {
        let alert = normalize(raw)?;
        let analysis = classify(&alert);

        info!(
            incident_id = %analysis.incident_id,
            category = %alert.category,
            risk_score = analysis.risk_score,
            "alert classified"
        );

        let mut voice_url = None;
        if self.synthesizer.enabled() {
            if let Some(audio) = self.synthesizer.synthesize(&analysis, &alert).await {
                self.store.put_audio(&analysis.incident_id, audio);
                voice_url = Some(format!("/api/v1/voice/{}", analysis.incident_id));
            }
        }

        self.store.append(IncidentRecord {
            timestamp: Utc::now(),
            alert,
            analysis: analysis.clone(),
        });

        Ok(ThreatResponse {
            analysis,
            voice_url,
        })
    }
}
