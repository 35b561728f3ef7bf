//! Intent classification by ordered keyword containment.
//!
//! The first keyword group (in table order) with any keyword contained in
//! the lower-cased utterance wins. Matching is plain substring search, so
//! "dokter" also matches inside longer words.

use sleepsense_core::IntentLabel;

/// Keyword groups in priority order, highest first.
const INTENT_KEYWORDS: &[(IntentLabel, &[&str])] = &[
    (
        IntentLabel::DeviceTroubleshooting,
        &["error", "tidak berfungsi", "masalah", "troubleshoot"],
    ),
    (
        IntentLabel::DeviceSetup,
        &["setup", "install", "cara", "panduan"],
    ),
    (
        IntentLabel::MedicalGuidance,
        &["diagnosis", "dokter", "treatment", "terapi"],
    ),
    (
        IntentLabel::MedicalEducation,
        &["osa", "sleep apnea", "apnea"],
    ),
    (
        IntentLabel::TechnologyInfo,
        &["sleepsense", "teknologi", "sensor"],
    ),
];

/// Classify an utterance into exactly one intent label.
pub fn classify_intent(utterance: &str) -> IntentLabel {
    let lower = utterance.to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(label, _)| *label)
        .unwrap_or_default()
}
