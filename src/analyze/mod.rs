//! Alert intake -- normalization, classification, and risk scoring.

pub mod classify;
pub mod normalize;

pub use classify::classify;
pub use normalize::normalize;

use serde::{Deserialize, Serialize};

/// Alert categories the classifier knows remediation playbooks for.
/// Anything else lands in `Other` and gets an empty action list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertCategory {
    BruteForce,
    ImpossibleTravel,
    MalwareDetected,
    Other(String),
}

impl From<String> for AlertCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "BruteForce" => AlertCategory::BruteForce,
            "ImpossibleTravel" => AlertCategory::ImpossibleTravel,
            "MalwareDetected" => AlertCategory::MalwareDetected,
            _ => AlertCategory::Other(s),
        }
    }
}

impl From<AlertCategory> for String {
    fn from(c: AlertCategory) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertCategory::BruteForce => write!(f, "BruteForce"),
            AlertCategory::ImpossibleTravel => write!(f, "ImpossibleTravel"),
            AlertCategory::MalwareDetected => write!(f, "MalwareDetected"),
            AlertCategory::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Reported severity. Scoring only distinguishes High from everything
/// else; unrecognized values are kept verbatim and score like non-High.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Other(String),
}

impl Severity {
    pub fn is_high(&self) -> bool {
        matches!(self, Severity::High)
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Low" => Severity::Low,
            "Medium" => Severity::Medium,
            "High" => Severity::High,
            _ => Severity::Other(s),
        }
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        s.to_string()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A normalized inbound security alert. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub source: String,
    pub category: AlertCategory,
    pub severity: Severity,
    /// Free-form key/value context, used only for narrative interpolation.
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            source: "Defender".to_string(),
            category: AlertCategory::BruteForce,
            severity: Severity::High,
            details: serde_json::Map::new(),
        }
    }
}

/// The pipeline's derived judgment about an alert. Built once by
/// [`classify`]; nothing downstream mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub incident_id: String,
    pub summary: String,
    pub reasoning: Vec<String>,
    pub risk_score: u8,
    pub recommended_actions: Vec<String>,
    pub auto_remediated: bool,
    /// Carried for wire parity only and intentionally never populated:
    /// the narration text is built inside the voice adapter, not here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_script: Option<String>,
}
