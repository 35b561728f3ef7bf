//! Configuration loading, validation, and management for SleepSense.
//!
//! Loads configuration from `~/.sleepsense/config.toml` (or the path in
//! `SLEEPSENSE_CONFIG`) with environment variable overrides. Validates all
//! settings at startup; a missing API key is fatal for commands that talk
//! to the model.

use serde::{Deserialize, Serialize};
use sleepsense_core::provider::GenerationConfig;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.sleepsense/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini model and credentials
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// HTTP gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Conversation history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// Knowledge base source
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Override the API base URL (proxies, tests)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    #[serde(default = "default_top_k")]
    pub top_k: u32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// HTTP client timeout for a single generation call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_temperature() -> f32 {
    0.3
}
fn default_top_p() -> f32 {
    0.8
}
fn default_top_k() -> u32 {
    40
}
fn default_max_output_tokens() -> u32 {
    1024
}
fn default_timeout_secs() -> u64 {
    120
}

impl GeminiConfig {
    /// Sampling parameters in the provider-neutral shape.
    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_p: Some(self.top_p),
            top_k: Some(self.top_k),
            max_output_tokens: Some(self.max_output_tokens),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: None,
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("top_k", &self.top_k)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Redact a secret for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "0.0.0.0".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// Upper bound on stored turns per user (6 exchanges).
pub const MAX_HISTORY_TURNS: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Turns kept per user (6 user/assistant exchanges)
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// Most recent turns rendered into the prompt
    #[serde(default = "default_context_turns")]
    pub context_turns: usize,

    /// Characters kept per turn in the prompt
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
}

fn default_max_turns() -> usize {
    MAX_HISTORY_TURNS
}
fn default_context_turns() -> usize {
    4
}
fn default_snippet_chars() -> usize {
    150
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
            context_turns: default_context_turns(),
            snippet_chars: default_snippet_chars(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// TOML file replacing the built-in knowledge base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the default path, then apply environment overrides:
    /// - `GEMINI_API_KEY`
    /// - `GEMINI_MODEL`
    /// - `PORT`
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through a lookup function.
    ///
    /// Environment values win over the file. An empty `GEMINI_API_KEY`
    /// counts as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.gemini.api_key = Some(key);
        }

        if let Some(model) = lookup("GEMINI_MODEL").filter(|m| !m.trim().is_empty()) {
            self.gemini.model = model;
        }

        if let Some(port) = lookup("PORT") {
            self.gateway.port = port.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("PORT must be a port number, got '{port}'"))
            })?;
        }

        Ok(())
    }

    /// Path of the config file: `SLEEPSENSE_CONFIG` or `~/.sleepsense/config.toml`.
    pub fn config_path() -> PathBuf {
        std::env::var("SLEEPSENSE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::config_dir().join("config.toml"))
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".sleepsense")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.gemini.temperature) {
            return Err(ConfigError::ValidationError(
                "gemini.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.gemini.top_p) {
            return Err(ConfigError::ValidationError(
                "gemini.top_p must be between 0.0 and 1.0".into(),
            ));
        }

        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::ValidationError("gemini.model must not be empty".into()));
        }

        if !(1..=MAX_HISTORY_TURNS).contains(&self.history.max_turns) {
            return Err(ConfigError::ValidationError(format!(
                "history.max_turns must be between 1 and {MAX_HISTORY_TURNS}"
            )));
        }

        if self.history.context_turns == 0 || self.history.context_turns > self.history.max_turns {
            return Err(ConfigError::ValidationError(
                "history.context_turns must be between 1 and history.max_turns".into(),
            ));
        }

        if self.history.snippet_chars == 0 {
            return Err(ConfigError::ValidationError(
                "history.snippet_chars must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// The API key, or a fatal error explaining where to get one.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key().ok_or(ConfigError::MissingApiKey)
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// A blank key counts as no key, wherever it came from.
    fn api_key(&self) -> Option<&str> {
        self.gemini.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error(
        "Missing required environment variable: GEMINI_API_KEY (get a key at https://aistudio.google.com/app/apikey)"
    )]
    MissingApiKey,
}
