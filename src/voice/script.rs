//! Voice alert script builder.
//!
//! The SOC persona briefs the on-call team in German; detail values are
//! interpolated with German fallbacks so the narration stays coherent
//! when an alert carries no context.

use crate::analyze::{classify::detail_or, Alert, Analysis};

/// Build the narration text for a voice alert.
pub fn build_script(analysis: &Analysis, alert: &Alert) -> String {
    let origins = detail_or(&alert.details, "origins", "mehreren Regionen");
    let attempts = detail_or(&alert.details, "attempts", "tausende");

    format!(
        "\n    Hi, hier ist Ada vom Security Operations Center.\n    \n    \
         Kurzes Update: In den letzten Stunden gab es {attempts} Login-Versuche \n    \
         aus {origins}.\n    \n    \
         Ich habe mir erlaubt, die Conditional Access Policy vorübergehend zu verschärfen \n    \
         und MFA auf allen Admin-Accounts zu erzwingen.\n    \n    \
         Der betroffene Kollege ohne MFA wurde automatisch geschützt - \n    \
         er kann sich Montag bei mir bedanken.\n    \n    \
         Threat ID ist {incident_id}. Details im Dashboard.\n    \n    \
         Schönes Wochenende!\n    ",
        attempts = attempts,
        origins = origins,
        incident_id = analysis.incident_id,
    )
}
