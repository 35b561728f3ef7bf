//! Provider construction from configuration.

use crate::gemini::GeminiProvider;
use sleepsense_config::{AppConfig, ConfigError};
use sleepsense_core::provider::Provider;
use std::sync::Arc;
use std::time::Duration;

/// Build the configured Gemini provider.
///
/// Fails with [`ConfigError::MissingApiKey`] when no key is configured;
/// callers treat that as fatal at startup.
pub fn build_from_config(config: &AppConfig) -> Result<Arc<dyn Provider>, ConfigError> {
    Ok(Arc::new(build_gemini(config)?))
}

/// Build the concrete Gemini provider (used where the probe needs it).
pub fn build_gemini(config: &AppConfig) -> Result<GeminiProvider, ConfigError> {
    let api_key = config.require_api_key()?;

    let mut provider = GeminiProvider::new(api_key)
        .with_timeout(Duration::from_secs(config.gemini.timeout_secs));
    if let Some(url) = &config.gemini.api_url {
        provider = provider.with_base_url(url);
    }

    tracing::debug!(
        model = %config.gemini.model,
        custom_url = config.gemini.api_url.is_some(),
        "Gemini provider ready"
    );
    Ok(provider)
}
