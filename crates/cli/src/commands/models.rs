//! `sleepsense models` — Find which Gemini model names answer.
//!
//! Lists the models the key can see, then probes the candidate names in
//! order with a tiny prompt and stops at the first one that works.

use sleepsense_core::provider::Provider;
use sleepsense_providers::{CANDIDATE_MODELS, probe_models};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    if !config.has_api_key() {
        return Err(super::missing_api_key());
    }

    let provider = sleepsense_providers::build_gemini(&config)?;

    println!("🤖 Gemini Model Probe");
    println!("=====================");
    println!("  Configured model: {}", config.gemini.model);
    println!();

    match provider.list_models().await {
        Ok(models) if models.is_empty() => println!("  No models support generateContent for this key."),
        Ok(models) => {
            println!("  Available models ({}):", models.len());
            for model in &models {
                println!("    - {model}");
            }
        }
        Err(e) => println!("  ⚠️  Could not list models: {e}"),
    }
    println!();

    let result = probe_models(&provider, CANDIDATE_MODELS, &config.gemini.generation()).await;
    for attempt in &result.attempts {
        match &attempt.outcome {
            Ok(text) => println!(
                "  ✅ {:<26} {:>6} ms  {}",
                attempt.model,
                attempt.elapsed_ms,
                text.trim()
            ),
            Err(e) => println!("  ❌ {:<26} {:>6} ms  {e}", attempt.model, attempt.elapsed_ms),
        }
    }
    println!();

    match result.working_model {
        Some(model) => {
            println!("  🎉 Working model: {model}");
            if model != config.gemini.model {
                println!("     Set it with: export GEMINI_MODEL='{model}'");
            }
            Ok(())
        }
        None => {
            println!("  Check that the API key is valid and the Generative Language API is enabled.");
            Err("No candidate model answered".into())
        }
    }
}
