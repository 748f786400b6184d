//! Voice synthesis adapter -- the pipeline's only networked dependency.
//!
//! Synthesis is strictly best-effort. Missing credentials, transport
//! errors, timeouts, and non-2xx responses all resolve to "no audio";
//! nothing here can fail the pipeline.

pub mod script;

use crate::analyze::{Alert, Analysis};
use crate::config::Config;
use bytes::Bytes;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const DEFAULT_API_BASE: &str = "https://api.elevenlabs.io";
const SYNTHESIS_MODEL: &str = "eleven_multilingual_v2";
const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the ElevenLabs text-to-speech API.
pub struct Synthesizer {
    client: Client,
    api_base: String,
    key: Option<String>,
    voice_id: String,
}

impl Synthesizer {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(SYNTHESIS_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_base: DEFAULT_API_BASE.to_string(),
            key: config.synthesis_key.clone(),
            voice_id: config.voice_id.clone(),
        }
    }

    /// Override the API base URL (test hook).
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn enabled(&self) -> bool {
        self.key.is_some()
    }

    /// Synthesize a voice alert for an analyzed incident.
    ///
    /// Returns `None` without touching the network when no credential is
    /// configured. Any failure of the single synthesis request also
    /// yields `None`; failures are never retried or surfaced.
    pub async fn synthesize(&self, analysis: &Analysis, alert: &Alert) -> Option<Bytes> {
        let key = self.key.as_deref()?;

        let text = script::build_script(analysis, alert);
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.api_base, self.voice_id
        );

        let result = self
            .client
            .post(&url)
            .header("xi-api-key", key)
            .json(&json!({
                "text": text,
                "model_id": SYNTHESIS_MODEL,
                "voice_settings": {
                    "stability": 0.5,
                    "similarity_boost": 0.75
                }
            }))
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => match resp.bytes().await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    debug!(incident_id = %analysis.incident_id, error = %e, "failed to read synthesis body");
                    None
                }
            },
            Ok(resp) => {
                debug!(incident_id = %analysis.incident_id, status = %resp.status(), "synthesis returned non-success");
                None
            }
            Err(e) => {
                debug!(incident_id = %analysis.incident_id, error = %e, "synthesis request failed");
                None
            }
        }
    }
}
