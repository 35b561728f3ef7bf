//! Knowledge domains and the sections selected from them per request.

use serde::{Deserialize, Serialize};

/// One of the five top-level topic groupings of the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Medical,
    Technology,
    Clinical,
    Device,
    Safety,
}

impl Domain {
    /// All domains in canonical iteration order.
    pub const ALL: [Domain; 5] = [
        Domain::Medical,
        Domain::Technology,
        Domain::Clinical,
        Domain::Device,
        Domain::Safety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medical => "medical",
            Self::Technology => "technology",
            Self::Clinical => "clinical",
            Self::Device => "device",
            Self::Safety => "safety",
        }
    }

    /// Parse a domain from its lowercase name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == name)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(section key, content)` pair picked for one request.
///
/// Borrowed from the knowledge store, so it never outlives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelevantSection<'a> {
    pub key: &'a str,
    pub content: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_domain() {
        for domain in Domain::ALL {
            assert_eq!(Domain::parse(domain.as_str()), Some(domain));
        }
        assert_eq!(Domain::parse("billing"), None);
    }

    #[test]
    fn canonical_order() {
        let names: Vec<&str> = Domain::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, ["medical", "technology", "clinical", "device", "safety"]);
    }
}
