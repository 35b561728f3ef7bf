//! The knowledge store: `domain -> (section key -> content)`.
//!
//! Built once at startup, either from the embedded SleepSense data or from
//! a TOML file, and never mutated afterwards. Share it behind an `Arc`.
//!
//! # File format
//!
//! ```toml
//! [[sections]]
//! domain = "medical"
//! key = "osa_definition"
//! content = "Obstructive Sleep Apnea (OSA) adalah ..."
//! ```
//!
//! Sections keep file order within their domain. Keys must be unique per
//! domain.

use crate::builtin::BUILTIN;
use serde::Deserialize;
use sleepsense_core::{Domain, RelevantSection};
use std::path::{Path, PathBuf};

/// One titled block of knowledge text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub key: String,
    pub content: String,
}

/// Immutable knowledge base grouped by domain.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    /// Indexed by position in `Domain::ALL`.
    domains: [Vec<Section>; 5],
}

impl KnowledgeStore {
    /// The embedded SleepSense knowledge base.
    pub fn builtin() -> Self {
        let mut store = Self::empty();
        for (domain, table) in BUILTIN {
            for (key, content) in table.iter() {
                store.domains[index(*domain)].push(Section {
                    key: (*key).to_string(),
                    content: (*content).to_string(),
                });
            }
        }
        store
    }

    fn empty() -> Self {
        Self {
            domains: Default::default(),
        }
    }

    /// Parse a knowledge base from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile =
            toml::from_str(text).map_err(|e| KnowledgeError::Parse(e.to_string()))?;

        let mut store = Self::empty();
        for entry in file.sections {
            let domain = Domain::parse(&entry.domain.to_lowercase())
                .ok_or_else(|| KnowledgeError::UnknownDomain(entry.domain.clone()))?;

            let sections = &mut store.domains[index(domain)];
            if sections.iter().any(|s| s.key == entry.key) {
                return Err(KnowledgeError::DuplicateKey {
                    domain: domain.to_string(),
                    key: entry.key,
                });
            }

            sections.push(Section {
                key: entry.key,
                content: entry.content.trim().to_string(),
            });
        }

        Ok(store)
    }

    /// Load a knowledge base from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, KnowledgeError> {
        let text = std::fs::read_to_string(path).map_err(|e| KnowledgeError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let store = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            sections = store.len(),
            "Loaded knowledge base from file"
        );
        Ok(store)
    }

    /// The file-backed store when a path is given, the embedded one otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, KnowledgeError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// All sections of a domain, in insertion order.
    pub fn sections(&self, domain: Domain) -> impl Iterator<Item = RelevantSection<'_>> {
        self.domains[index(domain)].iter().map(|s| RelevantSection {
            key: &s.key,
            content: &s.content,
        })
    }

    /// Section keys of a domain, in insertion order.
    pub fn keys(&self, domain: Domain) -> Vec<&str> {
        self.domains[index(domain)].iter().map(|s| s.key.as_str()).collect()
    }

    /// Look up one section.
    pub fn get(&self, domain: Domain, key: &str) -> Option<&str> {
        self.domains[index(domain)]
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.content.as_str())
    }

    /// Total number of sections across all domains.
    pub fn len(&self) -> usize {
        self.domains.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn index(domain: Domain) -> usize {
    match domain {
        Domain::Medical => 0,
        Domain::Technology => 1,
        Domain::Clinical => 2,
        Domain::Device => 3,
        Domain::Safety => 4,
    }
}

#[derive(Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    sections: Vec<SectionEntry>,
}

#[derive(Deserialize)]
struct SectionEntry {
    domain: String,
    key: String,
    content: String,
}

/// Errors loading a knowledge base file.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge file at {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse knowledge file: {0}")]
    Parse(String),

    #[error("Unknown knowledge domain: {0}")]
    UnknownDomain(String),

    #[error("Duplicate section key '{key}' in domain {domain}")]
    DuplicateKey { domain: String, key: String },
}
