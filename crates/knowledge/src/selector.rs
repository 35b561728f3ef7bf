//! Relevance selection: which knowledge domains to put in the prompt.
//!
//! Each domain has its own trigger words. Every domain whose triggers
//! match contributes all of its sections, in domain order. Triggers are
//! independent of each other and of the intent classifier; the result is
//! not deduplicated.

use crate::store::KnowledgeStore;
use sleepsense_core::{Domain, RelevantSection};

/// Trigger words per domain, in the order domains are appended.
const DOMAIN_TRIGGERS: &[(Domain, &[&str])] = &[
    (
        Domain::Medical,
        &["osa", "sleep apnea", "apnea", "tidur", "mendengkur", "sesak"],
    ),
    (
        Domain::Technology,
        &["sleepsense", "sensor", "device", "esp32", "monitoring"],
    ),
    (
        Domain::Clinical,
        &["ahi", "diagnosis", "gejala", "dokter", "treatment"],
    ),
    (
        Domain::Device,
        &["setup", "install", "troubleshoot", "error", "battery"],
    ),
    (Domain::Safety, &["diagnosis", "terapi", "treatment"]),
];

/// Domains triggered by an utterance, in append order.
pub fn triggered_domains(utterance: &str) -> Vec<Domain> {
    let lower = utterance.to_lowercase();
    DOMAIN_TRIGGERS
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(domain, _)| *domain)
        .collect()
}

/// Select the knowledge sections relevant to an utterance.
pub fn select_relevant<'a>(store: &'a KnowledgeStore, utterance: &str) -> Vec<RelevantSection<'a>> {
    triggered_domains(utterance)
        .into_iter()
        .flat_map(|domain| store.sections(domain))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(sections: &[RelevantSection<'a>]) -> Vec<&'a str> {
        sections.iter().map(|s| s.key).collect()
    }

    #[test]
    fn troubleshooting_query_pulls_technology_and_device() {
        let store = KnowledgeStore::builtin();
        let sections = select_relevant(&store, "Device saya error, bagaimana troubleshoot?");

        assert_eq!(
            triggered_domains("Device saya error, bagaimana troubleshoot?"),
            [Domain::Technology, Domain::Device]
        );
        let keys = keys(&sections);
        for key in store.keys(Domain::Device) {
            assert!(keys.contains(&key), "missing device section {key}");
        }
        assert!(!keys.contains(&"medical_disclaimer"));
    }

    #[test]
    fn no_trigger_gives_empty_list() {
        let store = KnowledgeStore::builtin();
        assert!(select_relevant(&store, "Halo").is_empty());
        assert!(triggered_domains("").is_empty());
    }

    #[test]
    fn whole_domain_is_appended() {
        let store = KnowledgeStore::builtin();
        let sections = select_relevant(&store, "Apa itu OSA?");
        assert_eq!(keys(&sections), store.keys(Domain::Medical));
    }

    #[test]
    fn diagnosis_triggers_clinical_and_safety() {
        assert_eq!(
            triggered_domains("Bagaimana diagnosis dilakukan?"),
            [Domain::Clinical, Domain::Safety]
        );
        assert_eq!(triggered_domains("Terapi apa saja?"), [Domain::Safety]);
    }

    #[test]
    fn domain_order_is_fixed() {
        let store = KnowledgeStore::builtin();
        let sections = select_relevant(
            &store,
            "Treatment apnea, setup sensor, dan nilai AHI",
        );
        let expected: Vec<&str> = [
            Domain::Medical,
            Domain::Technology,
            Domain::Clinical,
            Domain::Device,
            Domain::Safety,
        ]
        .into_iter()
        .flat_map(|d| store.keys(d))
        .collect();
        assert_eq!(keys(&sections), expected);
    }

    #[test]
    fn selection_is_stable_and_case_insensitive() {
        let store = KnowledgeStore::builtin();
        let a = select_relevant(&store, "Monitoring TIDUR dengan ESP32");
        let b = select_relevant(&store, "monitoring tidur dengan esp32");
        assert_eq!(a, b);
        assert_eq!(a, select_relevant(&store, "Monitoring TIDUR dengan ESP32"));
    }

    #[test]
    fn duplicates_are_not_removed() {
        let store = KnowledgeStore::from_toml_str(
            r#"
[[sections]]
domain = "clinical"
key = "shared"
content = "sama"

[[sections]]
domain = "safety"
key = "shared"
content = "sama"
"#,
        )
        .unwrap();
        let sections = select_relevant(&store, "diagnosis");
        assert_eq!(keys(&sections), ["shared", "shared"]);
    }
}
