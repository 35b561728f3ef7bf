//! Model probing: find a model name the configured key can actually use.
//!
//! Gemini model names change over time, so the probe walks a fixed list of
//! candidates with a tiny prompt and stops at the first one that answers.

use sleepsense_core::provider::{GenerateRequest, GenerationConfig, Provider};
use std::time::Instant;
use tracing::{debug, info};

/// Candidates in the order they are tried.
pub const CANDIDATE_MODELS: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-pro",
    "gemini-1.0-pro",
    "models/gemini-1.5-flash",
    "models/gemini-1.5-pro",
    "models/gemini-pro",
];

const PROBE_PROMPT: &str = "You are a medical AI assistant for OSA monitoring. \
Please respond in Indonesian: \"Test: Jelaskan OSA dalam satu kalimat singkat.\"";

/// Outcome of trying one model.
#[derive(Debug, Clone)]
pub struct ProbeAttempt {
    pub model: String,
    pub elapsed_ms: u64,
    pub outcome: Result<String, String>,
}

impl ProbeAttempt {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// All attempts made, plus the first working model if any.
#[derive(Debug, Clone, Default)]
pub struct ProbeResult {
    pub attempts: Vec<ProbeAttempt>,
    pub working_model: Option<String>,
}

/// Try `candidates` in order until one generates text.
pub async fn probe_models(
    provider: &dyn Provider,
    candidates: &[&str],
    generation: &GenerationConfig,
) -> ProbeResult {
    let mut result = ProbeResult::default();

    for model in candidates {
        debug!(model, "Probing model");
        let started = Instant::now();
        let outcome = provider
            .generate(GenerateRequest {
                model: (*model).to_string(),
                prompt: PROBE_PROMPT.into(),
                generation: generation.clone(),
            })
            .await
            .map(|resp| resp.text)
            .map_err(|e| e.to_string());

        let succeeded = outcome.is_ok();
        result.attempts.push(ProbeAttempt {
            model: (*model).to_string(),
            elapsed_ms: started.elapsed().as_millis() as u64,
            outcome,
        });

        if succeeded {
            info!(model, "Found working model");
            result.working_model = Some((*model).to_string());
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sleepsense_core::error::ProviderError;
    use sleepsense_core::provider::GenerateResponse;
    use std::sync::Mutex;

    /// Accepts exactly one model name and records every request.
    struct OnlyModel {
        accepted: &'static str,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Provider for OnlyModel {
        fn name(&self) -> &str {
            "only-model"
        }

        async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ProviderError> {
            self.seen.lock().unwrap().push(request.model.clone());
            if request.model == self.accepted {
                Ok(GenerateResponse {
                    text: "OSA adalah gangguan napas saat tidur.".into(),
                    model: request.model,
                    usage: None,
                    finish_reason: Some("STOP".into()),
                })
            } else {
                Err(ProviderError::ModelNotFound(request.model))
            }
        }
    }

    #[tokio::test]
    async fn stops_at_first_working_model() {
        let provider = OnlyModel {
            accepted: "gemini-pro",
            seen: Mutex::new(Vec::new()),
        };
        let result = probe_models(&provider, CANDIDATE_MODELS, &GenerationConfig::default()).await;

        assert_eq!(result.working_model.as_deref(), Some("gemini-pro"));
        assert_eq!(result.attempts.len(), 3);
        assert!(!result.attempts[0].succeeded());
        assert!(result.attempts[2].succeeded());
        assert_eq!(
            *provider.seen.lock().unwrap(),
            ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"]
        );
    }

    #[tokio::test]
    async fn reports_every_failure() {
        let provider = OnlyModel {
            accepted: "none",
            seen: Mutex::new(Vec::new()),
        };
        let result = probe_models(&provider, CANDIDATE_MODELS, &GenerationConfig::default()).await;

        assert!(result.working_model.is_none());
        assert_eq!(result.attempts.len(), CANDIDATE_MODELS.len());
        assert!(
            result.attempts[0]
                .outcome
                .as_ref()
                .unwrap_err()
                .contains("gemini-1.5-flash")
        );
    }
}
