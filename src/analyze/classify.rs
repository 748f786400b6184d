//! Deterministic threat classification and risk scoring.

use super::{Alert, AlertCategory, Analysis};
use chrono::Local;
use serde_json::Value;

/// Risk score for High-severity alerts; everything else scores
/// [`RISK_DEFAULT`]. A two-bucket step function by design -- product has
/// not signed off on a continuous scale.
const RISK_HIGH: u8 = 85;
const RISK_DEFAULT: u8 = 60;

/// Classify a normalized alert into an [`Analysis`].
///
/// Total and side-effect free: every category/severity combination,
/// recognized or not, yields a valid result. Unknown categories get an
/// empty action list but are still reported as auto-remediated; that
/// mismatch is intentional and must not be "corrected" here.
pub fn classify(alert: &Alert) -> Analysis {
    // Second-granularity IDs can collide under burst load; accepted for
    // this design's scope.
    let incident_id = format!("THR-{}", Local::now().format("%Y%m%d%H%M%S"));

    let attempts = detail_or(&alert.details, "attempts", "multiple");
    let origins = detail_or(&alert.details, "origins", "unknown regions");

    let reasoning = vec![
        format!("🔍 Detected {} from {}", alert.category, alert.source),
        format!("📊 Analyzing patterns... {} attempts detected", attempts),
        format!("🌍 GeoIP lookup: Origins from {}", origins),
        "🧠 Correlating with knowledge graph...".to_string(),
        format!("⚡ Risk assessment: {} severity confirmed", alert.severity),
        "🛡️ Checking available remediation options...".to_string(),
    ];

    let recommended_actions = actions_for(&alert.category);

    let risk_score = if alert.severity.is_high() {
        RISK_HIGH
    } else {
        RISK_DEFAULT
    };

    Analysis {
        incident_id,
        summary: format!(
            "{} attack detected - Auto-remediation initiated",
            alert.category
        ),
        reasoning,
        risk_score,
        recommended_actions,
        auto_remediated: true,
        voice_script: None,
    }
}

/// Remediation playbook per category. Order matters: actions are
/// executed (and read aloud) top to bottom.
fn actions_for(category: &AlertCategory) -> Vec<String> {
    let actions: &[&str] = match category {
        AlertCategory::BruteForce => &[
            "Block source IPs in Conditional Access",
            "Enable MFA enforcement for targeted accounts",
            "Increase sign-in risk policy to High",
            "Notify security team via voice alert",
        ],
        AlertCategory::ImpossibleTravel => &[
            "Require re-authentication",
            "Enable location-based Conditional Access",
            "Flag session for review",
        ],
        AlertCategory::MalwareDetected => &[
            "Isolate affected device",
            "Revoke active sessions",
            "Trigger Defender scan",
            "Alert SOC team",
        ],
        AlertCategory::Other(_) => &[],
    };
    actions.iter().map(|s| s.to_string()).collect()
}

/// Render a detail value for narrative interpolation, falling back to a
/// named placeholder when the key is absent or null.
pub(crate) fn detail_or(
    details: &serde_json::Map<String, Value>,
    key: &str,
    fallback: &str,
) -> String {
    match details.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => fallback.to_string(),
        Some(other) => other.to_string(),
    }
}
