//! Lenient alert normalization.
//!
//! Alerts arrive from heterogeneous sources, so every optional field is
//! defaulted rather than rejected. Only a payload that is not a JSON
//! object at all is refused.

use super::{Alert, AlertCategory, Severity};
use crate::pipeline::PipelineError;
use serde_json::Value;

/// Normalize a raw alert payload into an [`Alert`].
///
/// Missing or wrong-typed fields fall back to their defaults
/// (source "Defender", category BruteForce, severity High, empty
/// details). A non-object payload is the only rejection.
pub fn normalize(raw: Value) -> Result<Alert, PipelineError> {
    let obj = match raw {
        Value::Object(map) => map,
        other => {
            return Err(PipelineError::Validation(format!(
                "alert payload must be a JSON object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let defaults = Alert::default();

    let source = match obj.get("source") {
        Some(Value::String(s)) => s.clone(),
        _ => defaults.source,
    };
    let category = match obj.get("category") {
        Some(Value::String(s)) => AlertCategory::from(s.clone()),
        _ => defaults.category,
    };
    let severity = match obj.get("severity") {
        Some(Value::String(s)) => Severity::from(s.clone()),
        _ => defaults.severity,
    };
    let details = match obj.get("details") {
        Some(Value::Object(map)) => map.clone(),
        _ => defaults.details,
    };

    Ok(Alert {
        source,
        category,
        severity,
        details,
    })
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
