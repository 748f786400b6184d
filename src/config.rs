//! Environment-provided configuration.
//!
//! The synthesis credential and voice identity come from the environment
//! (optionally via a `.env` file). Their absence is a supported state:
//! the pipeline simply runs without voice alerts.

/// Default ElevenLabs voice ("Rachel").
const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

#[derive(Debug, Clone)]
pub struct Config {
    /// ElevenLabs API key. `None` disables synthesis entirely.
    pub synthesis_key: Option<String>,
    /// Target voice identity for synthesis requests.
    pub voice_id: String,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        let synthesis_key = std::env::var("ELEVENLABS_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let voice_id = std::env::var("ELEVENLABS_VOICE")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VOICE_ID.to_string());
        Self {
            synthesis_key,
            voice_id,
        }
    }

    /// A configuration with synthesis disabled.
    pub fn without_synthesis() -> Self {
        Self {
            synthesis_key: None,
            voice_id: DEFAULT_VOICE_ID.to_string(),
        }
    }

    pub fn synthesis_enabled(&self) -> bool {
        self.synthesis_key.is_some()
    }
}
